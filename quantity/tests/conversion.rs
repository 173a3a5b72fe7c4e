/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantity::{
    BackendKind, ConversionRule, Dimension, DimensionalFormula as F, Engine,
    EngineConfig, NumericValue, Quantity, QuantityType, RoundingMode, Unit,
    UnitError,
};

fn engine() -> Engine {
    Engine::from_config(&EngineConfig::default()).unwrap()
}

fn unit(symbol: &str) -> Unit {
    Unit::from_symbol(symbol).unwrap()
}

fn convert(engine: &Engine, value: &str, from: &str, to: &str) -> String {
    engine
        .converter()
        .convert(
            &engine.value(value).unwrap(),
            unit(from),
            unit(to),
            10,
            RoundingMode::HalfUp,
        )
        .unwrap()
        .to_string()
}

#[test]
fn linear_conversions() {
    let engine = engine();
    assert_eq!(convert(&engine, "5", "km", "m"), "5000.0000000000");
    assert_eq!(convert(&engine, "1", "mi", "km"), "1.6093440000");
    assert_eq!(convert(&engine, "12", "in", "ft"), "1.0000000000");
    assert_eq!(convert(&engine, "1", "ft²", "m²"), "0.0929030400");
    assert_eq!(convert(&engine, "1", "ha", "m²"), "10000.0000000000");
    assert_eq!(convert(&engine, "1", "gal", "L"), "3.7854117840");
    assert_eq!(convert(&engine, "1", "lb", "g"), "453.5923700000");
    assert_eq!(convert(&engine, "90", "min", "h"), "1.5000000000");
    assert_eq!(convert(&engine, "36", "km/h", "m/s"), "10.0000000000");
    assert_eq!(convert(&engine, "1", "kWh", "MJ"), "3.6000000000");
    assert_eq!(convert(&engine, "1", "KiB", "B"), "1024.0000000000");
    assert_eq!(convert(&engine, "1", "kb/s", "B/s"), "125.0000000000");
    assert_eq!(convert(&engine, "25", "%", ""), "0.2500000000");
}

#[test]
fn affine_conversions() {
    let engine = engine();
    assert_eq!(convert(&engine, "0", "°C", "K"), "273.1500000000");
    assert_eq!(convert(&engine, "100", "°C", "K"), "373.1500000000");
    assert_eq!(convert(&engine, "-40", "°C", "°F"), "-40.0000000000");
    assert_eq!(convert(&engine, "212", "degF", "degC"), "100.0000000000");
    assert_eq!(convert(&engine, "0", "K", "°R"), "0.0000000000");
}

#[test]
fn round_trip() {
    let engine = engine();
    let converter = engine.converter();
    let tolerance = engine.value("1e-8").unwrap();
    let pairs = [
        ("72.5", "°F", "°C"),
        ("3.3", "mi", "km"),
        ("1234.5678", "psi", "kPa"),
        ("17", "kn", "km/h"),
        ("0.001", "BTU", "kcal"),
    ];
    for (value, from, to) in pairs {
        let original = engine.value(value).unwrap();
        let mode = RoundingMode::HalfEven;
        let there = converter
            .convert(&original, unit(from), unit(to), 15, mode)
            .unwrap();
        let back = converter
            .convert(&there, unit(to), unit(from), 15, mode)
            .unwrap();
        assert!(
            original.equals(&back, Some(&tolerance)).unwrap(),
            "{} {} -> {} {} -> {} {}",
            value,
            from,
            there,
            to,
            back,
            from
        );
    }
}

#[test]
fn same_unit_is_idempotent() {
    let engine = engine();
    for symbol in ["m", "°C", "mi", "kWh", "MiB"] {
        let value = engine.value("42.125").unwrap();
        let converted = engine
            .converter()
            .convert(&value, unit(symbol), unit(symbol), 10, Default::default())
            .unwrap();
        assert!(converted.equals(&value, None).unwrap(), "{}", symbol);
    }
}

#[test]
fn incompatible_dimensions() {
    let engine = engine();
    let result = engine.converter().convert(
        &engine.value("1").unwrap(),
        unit("m"),
        unit("s"),
        10,
        RoundingMode::HalfUp,
    );
    assert_eq!(
        result,
        Err(UnitError::IncompatibleDimensions(
            Dimension::Length,
            Dimension::Time
        ))
    );
}

#[test]
fn quantities() {
    let engine = engine();
    let converter = engine.converter();
    let distance = engine.quantity("1500", "m").unwrap();

    let km = converter
        .convert_quantity(&distance, unit("km"), 3, RoundingMode::HalfUp)
        .unwrap();
    assert_eq!(km.to_string(), "1.500 km");

    let base = converter
        .to_base_unit(&engine.quantity("2", "km").unwrap())
        .unwrap();
    assert_eq!(base, Quantity::new(engine.value("2000").unwrap(), unit("m")));

    let hours = converter
        .from_base_unit(
            &engine.value("5400").unwrap(),
            unit("h"),
            2,
            RoundingMode::HalfUp,
        )
        .unwrap();
    assert_eq!(hours.to_string(), "1.50 h");

    let normalized = converter
        .normalize(
            &engine.quantity("3", "lb").unwrap(),
            6,
            RoundingMode::HalfUp,
        )
        .unwrap();
    assert_eq!(normalized.to_string(), "1.360777 kg");

    /* No catalog unit for jerk: the coherent unit stands in. */
    let jerk = Unit::Coherent(F::LENGTH / F::TIME.power(3));
    let normalized = converter
        .normalize(
            &Quantity::new(engine.value("1").unwrap(), jerk),
            0,
            RoundingMode::HalfUp,
        )
        .unwrap();
    assert_eq!(normalized.unit(), jerk);
}

#[test]
fn quantities_outside_the_display_set() {
    let engine = engine();
    let converter = engine.converter();
    let convert = |value: &str, from: &str, to: &str| {
        converter
            .convert_quantity(
                &engine.quantity(value, from).unwrap(),
                unit(to),
                10,
                RoundingMode::HalfUp,
            )
            .unwrap()
    };

    let hm = convert("5", "km", "hm");
    assert_eq!(hm.to_string(), "50.0000000000 hm");
    assert_eq!(hm.dimension(), Dimension::Length);
    assert_eq!(
        convert("5", "km", "nmi").to_string(),
        "2.6997840173 nmi"
    );
    assert_eq!(
        convert("36", "km/h", "m/min").to_string(),
        "600.0000000000 m/min"
    );

    /* Without a conversion rule the target stays unknown. */
    let bare = quantity::Converter::new(
        std::sync::Arc::new(quantity::ConversionFactorRegistry::new(
            engine.backend(),
        )),
        engine.units().clone(),
    );
    assert_eq!(
        bare.convert_quantity(
            &engine.quantity("5", "km").unwrap(),
            unit("hm"),
            10,
            RoundingMode::HalfUp,
        ),
        Err(UnitError::UnregisteredUnit(unit("hm")))
    );
}

#[test]
fn quantity_types() {
    let engine = engine();
    let value = engine.value("1").unwrap();
    assert_eq!(
        QuantityType::Named(Dimension::Length)
            .of(value.clone(), unit("ft"))
            .unwrap()
            .unit(),
        unit("ft")
    );
    assert!(matches!(
        QuantityType::Named(Dimension::Length).of(value, unit("s")),
        Err(UnitError::InvalidUnit(_, _))
    ));
}

#[test]
fn conversion_rules() {
    let backend = BackendKind::LIST
        .iter()
        .find(|kind| kind.is_available())
        .unwrap()
        .instantiate()
        .unwrap();
    let zero = NumericValue::zero(&backend);
    assert_eq!(
        ConversionRule::multiplicative(zero),
        Err(UnitError::DivisionByZero)
    );

    let rule = ConversionRule::for_unit(
        unit("°C"),
        &backend,
        20,
        RoundingMode::HalfUp,
    )
    .unwrap();
    assert!(!rule.is_multiplicative());
    assert_eq!(rule.to_string(), "x * 1 + 273.15");
    assert!(ConversionRule::identity(&backend).is_identity());
}

#[test]
fn quantity_json() {
    let engine = engine();
    let quantity = engine.quantity("2.50", "kB").unwrap();
    let json = serde_json::to_value(&quantity).unwrap();
    assert_eq!(json["value"], serde_json::json!("2.50"));
    let parsed: Quantity = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, quantity);
}
