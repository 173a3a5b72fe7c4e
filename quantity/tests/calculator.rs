/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;

use quantity::{
    Area, Dimension, DimensionalFormula as F, Engine, EngineConfig, Length,
    Quantity, QuantityType, RoundingMode, Speed, Unit, UnitError,
};

fn engine() -> Engine {
    Engine::from_config(&EngineConfig::default()).unwrap()
}

fn q(engine: &Engine, value: &str, unit: &str) -> Quantity {
    engine.quantity(value, unit).unwrap()
}

#[test]
fn same_dimension() {
    let engine = engine();
    let calc = engine.calculator();

    let sum = calc.add(&q(&engine, "1", "km"), &q(&engine, "500", "m"));
    assert_eq!(sum.unwrap().to_string(), "1.5000000000 km");

    let diff = calc.subtract(&q(&engine, "1", "m"), &q(&engine, "20", "cm"));
    assert_eq!(diff.unwrap().to_string(), "0.8000000000 m");

    assert_eq!(
        calc.add(&q(&engine, "1", "m"), &q(&engine, "1", "s")),
        Err(UnitError::IncompatibleDimensions(
            Dimension::Length,
            Dimension::Time
        ))
    );

    let parts = [
        q(&engine, "1", "m"),
        q(&engine, "50", "cm"),
        q(&engine, "250", "mm"),
    ];
    let total = calc.sum(&parts).unwrap().unwrap();
    assert_eq!(total.to_string(), "1.7500000000 m");
    assert_eq!(calc.sum::<Quantity>(&[]).unwrap(), None);
}

#[test]
fn scalars() {
    let engine = engine();
    let calc = engine.calculator();
    let length = q(&engine, "2.5", "m");
    let four = engine.value("4").unwrap();
    let three = engine.value("3").unwrap();

    let scaled = calc.multiply_by(&length, &four).unwrap();
    assert_eq!(scaled.to_string(), "10.0 m");
    assert_eq!(
        calc.divide_by(&q(&engine, "10", "m"), &three)
            .unwrap()
            .to_string(),
        "3.3333333333 m"
    );
    assert_eq!(
        calc.divide_by(&length, &engine.value("0").unwrap()),
        Err(UnitError::DivisionByZero)
    );
    assert_eq!(calc.negate(&length).to_string(), "-2.5 m");
    assert_eq!(calc.abs(&calc.negate(&length)).to_string(), "2.5 m");
}

#[test]
fn area_from_lengths() {
    let engine = engine();
    let calc = engine.calculator();

    let area = calc
        .multiply(&q(&engine, "100", "m"), &q(&engine, "50", "m"), None)
        .unwrap();
    assert_eq!(area.to_string(), "5000.0000000000 m²");
    assert_eq!(
        QuantityType::for_unit(area.unit()),
        QuantityType::Named(Dimension::Area)
    );
    assert!(Area::try_from(area).is_ok());

    let area = calc
        .multiply(&q(&engine, "10", "ft"), &q(&engine, "20", "ft"), None)
        .unwrap();
    assert_eq!(area.to_string(), "200.0000000000 ft²");

    /* The more specific system wins. */
    let area = calc
        .multiply(&q(&engine, "3", "m"), &q(&engine, "2", "ft"), None)
        .unwrap();
    assert_eq!(area.to_string(), "19.6850393701 ft²");

    /* Unless a result unit is given. */
    let area = calc
        .multiply(
            &q(&engine, "3", "m"),
            &q(&engine, "2", "ft"),
            Some(Unit::from_symbol("m²").unwrap()),
        )
        .unwrap();
    assert_eq!(area.to_string(), "1.8288000000 m²");

    assert!(matches!(
        calc.multiply(
            &q(&engine, "3", "m"),
            &q(&engine, "2", "m"),
            Some(Unit::from_symbol("m").unwrap()),
        ),
        Err(UnitError::IncompatibleDimensions(_, _))
    ));
}

#[test]
fn derived_results() {
    let engine = engine();
    let calc = engine.calculator();

    let speed = calc
        .divide(&q(&engine, "100", "km"), &q(&engine, "2", "h"), None)
        .unwrap();
    assert_eq!(speed.to_string(), "13.8888888889 m/s");
    assert!(Speed::try_from(speed).is_ok());

    let speed = calc
        .divide(
            &q(&engine, "100", "km"),
            &q(&engine, "2", "h"),
            Some(Unit::from_symbol("km/h").unwrap()),
        )
        .unwrap();
    assert_eq!(speed.to_string(), "50.0000000000 km/h");

    let distance = calc
        .multiply(&q(&engine, "10", "m/s"), &q(&engine, "1", "min"), None)
        .unwrap();
    assert_eq!(distance.to_string(), "600.0000000000 m");

    let energy = calc
        .multiply(&q(&engine, "2", "N"), &q(&engine, "3", "m"), None)
        .unwrap();
    assert_eq!(energy.to_string(), "6.0000000000 J");

    let ratio = calc
        .divide(&q(&engine, "3", "m"), &q(&engine, "4", "m"), None)
        .unwrap();
    assert_eq!(ratio.to_string(), "0.7500000000");
    assert_eq!(ratio.dimension(), Dimension::Dimensionless);

    let rate = calc
        .divide(&q(&engine, "1", "MB"), &q(&engine, "4", "s"), None)
        .unwrap();
    assert_eq!(rate.to_string(), "250000.0000000000 B/s");

    /* No registered type for [L¹T¹]: generic, in the coherent unit. */
    let odd = calc
        .multiply(&q(&engine, "2", "m"), &q(&engine, "3", "s"), None)
        .unwrap();
    let formula = F::LENGTH * F::TIME;
    assert_eq!(odd.unit(), Unit::Coherent(formula));
    assert_eq!(odd.value().to_string(), "6.0000000000");
    assert_eq!(
        QuantityType::for_unit(odd.unit()),
        QuantityType::Generic(formula)
    );
}

#[test]
fn powers_and_roots() {
    let engine = engine();
    let calc = engine.calculator();

    let area = calc.power(&q(&engine, "3", "m"), 2, None).unwrap();
    assert_eq!(area.to_string(), "9.0000000000 m²");

    let frequency = calc.power(&q(&engine, "2", "s"), -1, None).unwrap();
    assert_eq!(frequency.to_string(), "0.5000000000 Hz");

    let side = calc.sqrt(&q(&engine, "16", "m²"), None).unwrap();
    assert_eq!(side.to_string(), "4.0000000000 m");
    assert!(Length::try_from(side).is_ok());

    let side = calc.sqrt(&q(&engine, "1", "ha"), None).unwrap();
    assert_eq!(side.to_string(), "100.0000000000 m");

    assert_eq!(
        calc.sqrt(&q(&engine, "1", "m"), None),
        Err(UnitError::NonIntegerRoot(F::LENGTH, 2))
    );
    assert!(matches!(
        calc.sqrt(&q(&engine, "-4", "m²"), None),
        Err(UnitError::NegativeRadicand(_))
    ));
    assert!(matches!(
        calc.power(&q(&engine, "1", "m²"), i32::MAX, None),
        Err(UnitError::ExponentOverflow(_))
    ));
}

#[test]
fn ratio_and_rounding() {
    let engine = engine();
    let calc = engine.calculator();

    let ratio = calc
        .ratio(
            &q(&engine, "1", "km"),
            &q(&engine, "250", "m"),
            2,
            RoundingMode::HalfUp,
        )
        .unwrap();
    assert_eq!(ratio.to_string(), "4.00");
    assert!(calc
        .ratio(
            &q(&engine, "1", "km"),
            &q(&engine, "1", "h"),
            2,
            RoundingMode::HalfUp
        )
        .is_err());

    let length = q(&engine, "1.23456", "m");
    assert_eq!(
        calc.round(&length, 2, RoundingMode::HalfUp)
            .unwrap()
            .to_string(),
        "1.23 m"
    );
    assert_eq!(calc.floor(&length, 3).unwrap().to_string(), "1.234 m");
    assert_eq!(calc.ceil(&length, 3).unwrap().to_string(), "1.235 m");
}
