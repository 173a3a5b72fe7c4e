/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantity::{
    BaseDimension, Dimension, DimensionalFormula as F, Unit, UnitError,
};

#[test]
fn algebra() {
    let area = F::LENGTH.multiply(F::LENGTH);
    assert_eq!(area, F::LENGTH.power(2));
    assert_eq!(area.root(2).unwrap(), F::LENGTH);
    assert_eq!(F::LENGTH.power(3).root(3).unwrap(), F::LENGTH);
    assert_eq!(area.divide(F::LENGTH), F::LENGTH);
    assert_eq!(F::TIME.inverse(), F::DIMENSIONLESS / F::TIME);
    assert!(F::LENGTH.divide(F::LENGTH).is_dimensionless());
    assert!(!F::DIGITAL.is_dimensionless());
    assert_eq!(F::LENGTH.exponent(BaseDimension::Length), 1);
    assert_eq!(
        (F::MASS * F::LENGTH / F::TIME.power(2)).exponents(),
        [1, 1, -2, 0, 0, 0, 0, 0]
    );
}

#[test]
fn roots() {
    assert_eq!(
        F::LENGTH.root(2),
        Err(UnitError::NonIntegerRoot(F::LENGTH, 2))
    );
    assert_eq!(F::LENGTH.power(2).root(0), Err(UnitError::InvalidRoot(0)));
    assert_eq!(F::DIMENSIONLESS.root(5).unwrap(), F::DIMENSIONLESS);
    assert_eq!(F::TIME.power(-2).root(2).unwrap(), F::TIME.inverse());
}

#[test]
fn exponent_overflow() {
    let area = F::LENGTH.multiply(F::LENGTH);
    assert_eq!(area.checked_power(3).unwrap(), F::LENGTH.power(6));
    assert!(matches!(
        area.checked_power(i32::MAX),
        Err(UnitError::ExponentOverflow(_))
    ));

    let huge = F::LENGTH.power(i32::MAX);
    assert_eq!(
        huge.checked_divide(F::LENGTH).unwrap(),
        F::LENGTH.power(i32::MAX - 1)
    );
    assert!(matches!(
        huge.checked_multiply(F::LENGTH),
        Err(UnitError::ExponentOverflow(_))
    ));
    assert!(matches!(
        F::LENGTH.power(i32::MIN).checked_divide(F::LENGTH),
        Err(UnitError::ExponentOverflow(_))
    ));

    assert!(matches!(
        F::LENGTH.power(i32::MIN).root(-1),
        Err(UnitError::ExponentOverflow(_))
    ));
    assert_eq!(F::LENGTH.power(-4).root(-2).unwrap(), F::LENGTH.power(2));
}

#[test]
fn canonical_string() {
    let acceleration = F::LENGTH / F::TIME.power(2);
    assert_eq!(acceleration.to_string(), "[L¹T⁻²]");
    assert_eq!((F::DIGITAL / F::TIME).to_string(), "[T⁻¹D¹]");
    assert_eq!(F::DIMENSIONLESS.to_string(), "[]");
}

#[test]
fn named_dimensions() {
    assert_eq!(Dimension::from_formula(F::LENGTH.power(2)), Dimension::Area);
    assert_eq!(
        Dimension::from_formula(F::DIGITAL / F::TIME),
        Dimension::DataRate
    );
    let jerk = F::LENGTH / F::TIME.power(3);
    assert_eq!(Dimension::from_formula(jerk), Dimension::Derived(jerk));
    assert!(Dimension::Energy.is_compatible_with(&Dimension::from_formula(
        F::MASS * F::LENGTH.power(2) / F::TIME.power(2)
    )));
    assert!(!Dimension::Energy.is_compatible_with(&Dimension::Power));
}

#[test]
fn coherent_unit_symbols() {
    let force = F::MASS * F::LENGTH / F::TIME.power(2);
    assert_eq!(force.unit_symbol(false), "m\u{22c5}kg/s²");
    assert_eq!(force.unit_symbol(true), "m*kg/s^2");
    assert_eq!(F::from_unit_symbol("kg\u{22c5}m/s²"), Some(force));
    assert_eq!(F::from_unit_symbol("kg*m/s^2"), Some(force));
    assert_eq!(F::from_unit_symbol("1/s"), Some(F::TIME.inverse()));
    assert_eq!(
        F::from_unit_symbol("mol/m³"),
        Some(F::AMOUNT_OF_SUBSTANCE / F::LENGTH.power(3))
    );
    assert_eq!(F::from_unit_symbol("furlong"), None);

    let jerk = F::LENGTH / F::TIME.power(3);
    assert_eq!(Unit::from_symbol("m/s³").unwrap(), Unit::Coherent(jerk));
    assert_eq!(Unit::Coherent(jerk).to_string(), "m/s³");
}
