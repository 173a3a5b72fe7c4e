/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::Arc;

use quantity::{
    AutoScaler, AutoscaleRange, DimensionalFormula as F, Engine,
    EngineConfig, MathContext, Quantity, QuantityType, Unit, UnitError,
    UnitRegistry, UnitSystem,
};

fn engine() -> Engine {
    Engine::from_config(&EngineConfig::default()).unwrap()
}

fn q(engine: &Engine, value: &str, unit: &str) -> Quantity {
    engine.quantity(value, unit).unwrap()
}

/// An autoscaler over mm, cm, m and km only.
fn metric_lengths(engine: &Engine) -> AutoScaler {
    let mut units = UnitRegistry::new();
    for symbol in ["mm", "cm", "m", "km"] {
        let unit = Unit::from_symbol(symbol).unwrap();
        units.register(unit, QuantityType::for_unit(unit)).unwrap();
    }
    let converter = quantity::Converter::new(
        engine.conversions().clone(),
        Arc::new(units),
    );
    AutoScaler::new(
        converter,
        MathContext::default(),
        AutoscaleRange::standard(engine.backend()),
    )
}

#[test]
fn single_unit_in_range() {
    let engine = engine();
    let scaler = metric_lengths(&engine);
    assert_eq!(
        scaler.autoscale(&q(&engine, "1200", "m"), None).unwrap(),
        q(&engine, "1.2", "km")
    );
    assert_eq!(
        scaler.autoscale(&q(&engine, "0.005", "m"), None).unwrap(),
        q(&engine, "5", "mm")
    );
    assert_eq!(
        scaler.autoscale(&q(&engine, "-250", "cm"), None).unwrap(),
        q(&engine, "-2.5", "m")
    );
}

#[test]
fn nothing_in_range() {
    let engine = engine();
    let scaler = metric_lengths(&engine);
    /* Closest to the range's geometric mean. */
    assert_eq!(
        scaler.autoscale(&q(&engine, "5e9", "m"), None).unwrap(),
        q(&engine, "5000000", "km")
    );
}

#[test]
fn several_in_range() {
    let engine = engine();
    let scaler = engine.autoscaler();

    /* 5.12 MB and 4.8828125 MiB qualify; MB is closer to sqrt(1000). */
    let scaled = scaler.autoscale(&q(&engine, "5120", "kB"), None).unwrap();
    assert_eq!(scaled, q(&engine, "5.12", "MB"));

    let scaled = scaler.autoscale(&q(&engine, "1800", "s"), None).unwrap();
    assert_eq!(scaled, q(&engine, "30", "min"));

    /* 30 m, 32.8 yd and 98.4 ft qualify: yards are closest. */
    let scaled = scaler.autoscale(&q(&engine, "30", "m"), None).unwrap();
    assert_eq!(scaled.unit(), Unit::from_symbol("yd").unwrap());
    assert_eq!(scaled.value().to_string(), "32.8083989501");
}

#[test]
fn system_filter() {
    let engine = engine();
    let scaler = engine.autoscaler();
    let length = q(&engine, "30", "m");

    let metric = scaler
        .autoscale(&length, Some(UnitSystem::Metric))
        .unwrap();
    assert_eq!(metric, length);

    let imperial = scaler
        .autoscale(&q(&engine, "500", "m"), Some(UnitSystem::Imperial))
        .unwrap();
    assert_eq!(imperial.unit(), Unit::from_symbol("yd").unwrap());

    let candidates = scaler.candidates(
        length.dimension(),
        Some(UnitSystem::Imperial),
    );
    let symbols: Vec<String> =
        candidates.iter().map(|unit| unit.to_string()).collect();
    assert_eq!(symbols, ["in", "ft", "yd", "mi"]);
}

#[test]
fn custom_range() {
    let engine = engine();
    let scaler = metric_lengths(&engine);
    let range = AutoscaleRange::new(
        engine.value("0").unwrap(),
        engine.value("10").unwrap(),
    )
    .unwrap();

    /* Both 0.5 m and 0.0005 km qualify; the target is 10 / 2. */
    let scaled = scaler
        .autoscale_within(&q(&engine, "0.5", "m"), None, &range)
        .unwrap();
    assert_eq!(scaled, q(&engine, "0.5", "m"));

    assert!(matches!(
        AutoscaleRange::new(
            engine.value("5").unwrap(),
            engine.value("1").unwrap()
        ),
        Err(UnitError::InvalidRange(_, _))
    ));
    assert!(matches!(
        AutoscaleRange::new(
            engine.value("-1").unwrap(),
            engine.value("1").unwrap()
        ),
        Err(UnitError::InvalidRange(_, _))
    ));
}

#[test]
fn unchanged() {
    let engine = engine();
    let scaler = engine.autoscaler();

    let zero = q(&engine, "0", "TB");
    assert_eq!(scaler.autoscale(&zero, None).unwrap().to_string(), "0 TB");

    let jerk = Quantity::new(
        engine.value("12345").unwrap(),
        Unit::Coherent(F::LENGTH / F::TIME.power(3)),
    );
    assert!(scaler.candidates(jerk.dimension(), None).is_empty());
    assert_eq!(scaler.autoscale(&jerk, None).unwrap(), jerk);

    let empty = AutoScaler::new(
        quantity::Converter::new(
            engine.conversions().clone(),
            Arc::new(UnitRegistry::new()),
        ),
        MathContext::default(),
        engine.range().clone(),
    );
    let length = q(&engine, "1200", "m");
    assert_eq!(empty.autoscale(&length, None).unwrap(), length);
}
