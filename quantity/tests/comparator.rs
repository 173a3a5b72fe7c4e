/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use quantity::{Dimension, Engine, EngineConfig, Quantity, UnitError};

fn engine() -> Engine {
    Engine::from_config(&EngineConfig::default()).unwrap()
}

fn q(engine: &Engine, value: &str, unit: &str) -> Quantity {
    engine.quantity(value, unit).unwrap()
}

#[test]
fn ordering_across_units() {
    let engine = engine();
    let cmp = engine.comparator();
    let km = q(&engine, "1", "km");
    let m = q(&engine, "1000", "m");
    let mi = q(&engine, "1", "mi");

    assert_eq!(cmp.compare(&km, &m).unwrap(), Ordering::Equal);
    assert_eq!(cmp.compare(&km, &mi).unwrap(), Ordering::Less);
    assert!(cmp.is_greater_than(&mi, &m).unwrap());
    assert!(cmp.is_less_than(&m, &mi).unwrap());
    assert!(!cmp.is_less_than(&km, &m).unwrap());

    assert_eq!(
        cmp.compare(&q(&engine, "0", "°C"), &q(&engine, "33", "°F"))
            .unwrap(),
        Ordering::Less
    );
    assert!(cmp
        .is_greater_than(&q(&engine, "0", "°C"), &q(&engine, "273", "K"))
        .unwrap());

    assert_eq!(
        cmp.compare(&km, &q(&engine, "1", "kg")),
        Err(UnitError::IncompatibleDimensions(
            Dimension::Length,
            Dimension::Mass
        ))
    );
}

#[test]
fn equality_with_tolerance() {
    let engine = engine();
    let cmp = engine.comparator();
    let inch = q(&engine, "1", "in");

    assert!(cmp.equals(&inch, &q(&engine, "2.54", "cm"), None).unwrap());
    assert!(!cmp.equals(&inch, &q(&engine, "2.5", "cm"), None).unwrap());

    /* Tolerances are base-unit magnitudes (here: meters). */
    let tolerance = engine.value("0.001").unwrap();
    assert!(cmp
        .equals(&inch, &q(&engine, "2.5", "cm"), Some(&tolerance))
        .unwrap());
    assert!(!cmp
        .equals(&inch, &q(&engine, "2.3", "cm"), Some(&tolerance))
        .unwrap());
}

#[test]
fn ranges() {
    let engine = engine();
    let cmp = engine.comparator();
    let low = q(&engine, "1", "m");
    let high = q(&engine, "1", "km");

    assert!(cmp.is_between(&q(&engine, "50", "ft"), &low, &high).unwrap());
    assert!(cmp.is_between(&q(&engine, "100", "cm"), &low, &high).unwrap());
    assert!(cmp.is_between(&q(&engine, "1000", "m"), &low, &high).unwrap());
    assert!(!cmp.is_between(&q(&engine, "1", "mi"), &low, &high).unwrap());
    assert!(matches!(
        cmp.is_between(&low, &high, &low),
        Err(UnitError::InvalidRange(_, _))
    ));

    let clamped = cmp.clamp(&q(&engine, "2", "mi"), &low, &high).unwrap();
    assert_eq!(clamped.to_string(), "0.6213711922 mi");
    let clamped = cmp.clamp(&q(&engine, "10", "cm"), &low, &high).unwrap();
    assert_eq!(clamped.to_string(), "100.0000000000 cm");
    let inside = q(&engine, "4", "ft");
    assert_eq!(cmp.clamp(&inside, &low, &high).unwrap().to_string(), "4 ft");

    /* 3 ft is 0.9144 m: just below the floor. */
    let below = cmp.clamp(&q(&engine, "3", "ft"), &low, &high).unwrap();
    assert_eq!(below.to_string(), "3.2808398950 ft");
}

#[test]
fn extremes() {
    let engine = engine();
    let cmp = engine.comparator();
    let a = q(&engine, "1", "km");
    let b = q(&engine, "1000", "m");
    let c = q(&engine, "3", "ft");

    /* Operands come back unchanged; ties keep the first. */
    assert_eq!(cmp.min(&a, &b).unwrap().to_string(), "1 km");
    assert_eq!(cmp.max(&b, &a).unwrap().to_string(), "1000 m");
    assert_eq!(cmp.min(&a, &c).unwrap(), c);

    let all = [a.clone(), b, c.clone(), q(&engine, "2", "mi")];
    assert_eq!(cmp.min_of(&all).unwrap(), Some(c));
    assert_eq!(cmp.max_of(&all).unwrap().unwrap().to_string(), "2 mi");
    assert_eq!(cmp.max_of::<Quantity>(&[]).unwrap(), None);
    assert!(cmp.max_of(&[a, q(&engine, "1", "h")]).is_err());
}
