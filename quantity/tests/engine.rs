/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::sync::Mutex;

use quantity::{
    BackendKind, Engine, EngineConfig, QuantityOps, RoundingMode, Unit,
    UnitError, UnitSystem,
};

/* Engine::install and QuantityOps share process-wide state. */
static GLOBALS: Mutex<()> = Mutex::new(());

fn unit(symbol: &str) -> Unit {
    Unit::from_symbol(symbol).unwrap()
}

#[test]
fn config_defaults() {
    let config = EngineConfig::from_json("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.backend, None);
    assert_eq!(config.rule_scale, quantity::DEFAULT_RULE_SCALE);

    let config = EngineConfig::from_json(
        r#"{ "backend": "exact", "scale": 4, "rounding": "half_even" }"#,
    )
    .unwrap();
    assert_eq!(config.backend, Some(BackendKind::Exact));
    assert_eq!(config.scale, 4);
    assert_eq!(config.rounding, RoundingMode::HalfEven);
    assert_eq!(config.autoscale_max, "1000");
}

#[test]
fn config_errors() {
    assert!(matches!(
        EngineConfig::from_json(r#"{ "backend": "float" }"#),
        Err(UnitError::Config(_))
    ));
    assert!(matches!(
        EngineConfig::from_json("{ scale: 4 }"),
        Err(UnitError::Config(_))
    ));
    assert!(matches!(
        EngineConfig::load(std::path::Path::new("/nonexistent/engine.json")),
        Err(UnitError::Config(_))
    ));

    let config = EngineConfig {
        autoscale_min: "10".to_string(),
        autoscale_max: "1".to_string(),
        ..EngineConfig::default()
    };
    assert!(matches!(
        Engine::from_config(&config),
        Err(UnitError::InvalidRange(_, _))
    ));
}

#[test]
fn configured_engines() {
    for kind in BackendKind::LIST.iter().filter(|k| k.is_available()) {
        let config = EngineConfig {
            backend: Some(*kind),
            scale: 3,
            rule_scale: 10,
            ..EngineConfig::default()
        };
        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.backend().kind(), *kind);
        assert_eq!(engine.context().scale, 3);

        let context = engine.context();
        let distance = engine
            .converter()
            .convert_quantity(
                &engine.quantity("1", "mi").unwrap(),
                unit("km"),
                context.scale,
                context.rounding,
            )
            .unwrap();
        assert_eq!(distance.to_string(), "1.609 km");
    }
}

#[test]
fn installed_defaults() {
    let _guard = GLOBALS.lock().unwrap_or_else(|e| e.into_inner());

    let config = EngineConfig {
        scale: 2,
        autoscale_min: "0.5".to_string(),
        ..EngineConfig::default()
    };
    let engine = Engine::from_config(&config).unwrap();
    engine.install();

    let global = Engine::global().unwrap();
    assert_eq!(global.config(), &config);
    assert_eq!(global.range(), engine.range());

    let distance = engine.quantity("1500", "m").unwrap();
    assert_eq!(distance.convert_to(unit("mi")).unwrap().to_string(), "0.93 mi");

    Engine::reset();
    assert_eq!(Engine::global().unwrap().config(), &EngineConfig::default());
    assert_eq!(
        distance.convert_to(unit("mi")).unwrap().to_string(),
        "0.9320567884 mi"
    );
}

#[test]
fn quantity_operations() {
    let _guard = GLOBALS.lock().unwrap_or_else(|e| e.into_inner());
    Engine::reset();

    let engine = Engine::global().unwrap();
    let km = engine.quantity("1", "km").unwrap();
    let m = engine.quantity("250", "m").unwrap();

    assert_eq!(km.plus(&m).unwrap().to_string(), "1.2500000000 km");
    assert_eq!(km.minus(&m).unwrap().to_string(), "0.7500000000 km");
    assert_eq!(km.compare_to(&m).unwrap(), Ordering::Greater);
    assert!(km
        .equals_within(&engine.quantity("1000", "m").unwrap(), None)
        .unwrap());

    let area = km.times(&m).unwrap();
    assert_eq!(area.to_string(), "250000.0000000000 m²");
    let ratio = km.divided_by(&m).unwrap();
    assert_eq!(ratio.to_string(), "4.0000000000");
    let doubled = m.scaled_by(&engine.value("2").unwrap()).unwrap();
    assert_eq!(doubled.to_string(), "500 m");

    let normalized = engine.quantity("2", "h").unwrap().normalize().unwrap();
    assert_eq!(normalized.unit(), unit("s"));

    let scaled = engine.quantity("1500000", "B").unwrap();
    assert_eq!(
        scaled.autoscaled(None).unwrap(),
        engine.quantity("1.5", "MB").unwrap()
    );
    let scaled = engine
        .quantity("5000", "m")
        .unwrap()
        .autoscaled(Some(UnitSystem::Metric))
        .unwrap();
    assert_eq!(scaled.to_string(), "5.0000000000 km");
}
