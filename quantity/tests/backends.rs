/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The same scenarios on every compiled-in arithmetic backend.

use quantity::{
    BackendKind, ConversionRule, Engine, EngineConfig, Quantity, RoundingMode,
    Unit, UnitError,
};

fn engines() -> Vec<Engine> {
    BackendKind::LIST
        .iter()
        .filter(|kind| kind.is_available())
        .map(|kind| {
            let config = EngineConfig {
                backend: Some(*kind),
                ..EngineConfig::default()
            };
            Engine::from_config(&config).unwrap()
        })
        .collect()
}

fn unit(symbol: &str) -> Unit {
    Unit::from_symbol(symbol).unwrap()
}

fn q(engine: &Engine, value: &str, symbol: &str) -> Quantity {
    engine.quantity(value, symbol).unwrap()
}

fn convert(engine: &Engine, value: &str, from: &str, to: &str) -> String {
    let input = engine.value(value).unwrap();
    engine
        .converter()
        .convert(&input, unit(from), unit(to), 10, RoundingMode::HalfUp)
        .unwrap_or_else(|e| {
            panic!("{} backend: {from} -> {to}: {e}", engine.backend().kind())
        })
        .to_string()
}

#[test]
fn every_catalog_rule_builds() {
    for engine in engines() {
        for u in Unit::all() {
            let rule = ConversionRule::for_unit(
                u,
                engine.backend(),
                engine.config().rule_scale,
                engine.config().rounding,
            );
            assert!(rule.is_ok(), "{} {}", engine.backend().kind(), u);
        }
    }
}

#[test]
fn linear_conversions() {
    for engine in engines() {
        assert_eq!(convert(&engine, "5", "km", "m"), "5000.0000000000");
        assert_eq!(convert(&engine, "1", "mi", "km"), "1.6093440000");
        assert_eq!(convert(&engine, "36", "km/h", "m/s"), "10.0000000000");
        assert_eq!(convert(&engine, "1", "hp", "W"), "745.6998715823");
        assert_eq!(convert(&engine, "1", "psi", "kPa"), "6.8947572932");
    }
}

#[test]
fn affine_conversions() {
    for engine in engines() {
        assert_eq!(convert(&engine, "0", "°C", "K"), "273.1500000000");
        assert_eq!(convert(&engine, "100", "°C", "K"), "373.1500000000");
        assert_eq!(convert(&engine, "100", "°C", "°F"), "212.0000000000");
        assert_eq!(convert(&engine, "-40", "°C", "°F"), "-40.0000000000");
        assert_eq!(convert(&engine, "212", "degF", "degC"), "100.0000000000");
    }
}

#[test]
fn same_unit_is_idempotent() {
    for engine in engines() {
        for symbol in ["m", "°C", "mi", "kWh", "MiB"] {
            let original = q(&engine, "42.125", symbol);
            let converted = engine
                .converter()
                .convert_quantity(
                    &original,
                    unit(symbol),
                    10,
                    RoundingMode::HalfUp,
                )
                .unwrap();
            assert!(engine
                .comparator()
                .equals(&converted, &original, None)
                .unwrap());
        }
    }
}

#[test]
fn derived_quantities() {
    for engine in engines() {
        let calc = engine.calculator();
        let area = calc
            .multiply(&q(&engine, "100", "m"), &q(&engine, "50", "m"), None)
            .unwrap();
        assert_eq!(area.to_string(), "5000.0000000000 m²");

        let speed = calc
            .divide(&q(&engine, "100", "km"), &q(&engine, "2", "h"), None)
            .unwrap();
        assert_eq!(speed.to_string(), "13.8888888889 m/s");

        let side = calc.sqrt(&q(&engine, "16", "m²"), None).unwrap();
        assert_eq!(side.to_string(), "4.0000000000 m");

        assert_eq!(
            calc.divide_by(&area, &engine.value("0").unwrap()),
            Err(UnitError::DivisionByZero)
        );
    }
}

#[test]
fn autoscaling() {
    for engine in engines() {
        let scaler = engine.autoscaler();
        assert_eq!(
            scaler.autoscale(&q(&engine, "1200", "m"), None).unwrap(),
            q(&engine, "1.2", "km")
        );
        assert_eq!(
            scaler.autoscale(&q(&engine, "0.005", "m"), None).unwrap(),
            q(&engine, "5", "mm")
        );
    }
}
