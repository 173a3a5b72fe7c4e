/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use quantity::{Backend, BackendKind, NumericValue, RoundingMode, UnitError};

fn backends() -> Vec<Backend> {
    BackendKind::LIST
        .iter()
        .filter(|kind| kind.is_available())
        .map(|kind| kind.instantiate().unwrap())
        .collect()
}

fn num(input: &str, backend: &Backend) -> NumericValue {
    NumericValue::parse(input, backend).unwrap()
}

#[test]
fn rounding_modes_agree_across_backends() {
    let cases = [
        ("10.555", RoundingMode::HalfUp, "10.56"),
        ("10.555", RoundingMode::HalfDown, "10.55"),
        ("10.555", RoundingMode::HalfEven, "10.56"),
        ("10.565", RoundingMode::HalfEven, "10.56"),
        ("10.555", RoundingMode::HalfOdd, "10.55"),
        ("10.551", RoundingMode::Ceiling, "10.56"),
        ("10.559", RoundingMode::Floor, "10.55"),
        ("10.559", RoundingMode::Down, "10.55"),
        ("10.551", RoundingMode::Up, "10.56"),
        ("-10.555", RoundingMode::HalfUp, "-10.56"),
        ("-10.555", RoundingMode::HalfDown, "-10.55"),
        ("-10.559", RoundingMode::Ceiling, "-10.55"),
        ("-10.551", RoundingMode::Floor, "-10.56"),
        ("-10.559", RoundingMode::Down, "-10.55"),
        ("-10.551", RoundingMode::Up, "-10.56"),
        ("10.5", RoundingMode::HalfUp, "10.50"),
    ];
    for backend in backends() {
        for (input, mode, expected) in cases {
            let rounded = num(input, &backend).round(2, mode).unwrap();
            assert_eq!(
                rounded.to_string(),
                expected,
                "{} {} on {}",
                input,
                mode,
                backend.kind()
            );
        }
    }
}

#[test]
fn floor_and_ceil() {
    for backend in backends() {
        let value = num("2.345", &backend);
        assert_eq!(value.floor(1).unwrap().to_string(), "2.3");
        assert_eq!(value.ceil(1).unwrap().to_string(), "2.4");
        assert_eq!(value.negate().floor(0).unwrap().to_string(), "-3");
    }
}

#[test]
fn division_is_rounded_at_the_requested_scale() {
    for backend in backends() {
        let one = num("1", &backend);
        let two = num("2", &backend);
        let three = num("3", &backend);
        let third = one.divide(&three, 5, RoundingMode::HalfUp).unwrap();
        assert_eq!(third.to_string(), "0.33333");
        let two_thirds = two.divide(&three, 5, RoundingMode::HalfUp).unwrap();
        assert_eq!(two_thirds.to_string(), "0.66667");
        let two_thirds = two.divide(&three, 5, RoundingMode::Down).unwrap();
        assert_eq!(two_thirds.to_string(), "0.66666");
        let half = one.divide(&two, 0, RoundingMode::HalfEven).unwrap();
        assert_eq!(half.to_string(), "0");
    }
}

#[test]
fn division_by_zero() {
    for backend in backends() {
        let result = num("1", &backend).divide(
            &NumericValue::zero(&backend),
            10,
            RoundingMode::HalfUp,
        );
        assert!(matches!(result, Err(UnitError::DivisionByZero)));
    }
}

#[test]
fn square_roots() {
    for backend in backends() {
        let two = num("2", &backend);
        assert_eq!(
            two.sqrt(10, RoundingMode::HalfUp).unwrap().to_string(),
            "1.4142135624"
        );
        assert_eq!(
            two.sqrt(10, RoundingMode::Down).unwrap().to_string(),
            "1.4142135623"
        );
        assert_eq!(
            num("6.25", &backend)
                .sqrt(2, RoundingMode::HalfUp)
                .unwrap()
                .to_string(),
            "2.50"
        );
        assert!(matches!(
            num("-4", &backend).sqrt(2, RoundingMode::HalfUp),
            Err(UnitError::NegativeRadicand(_))
        ));
    }
}

#[test]
fn exact_arithmetic() {
    for backend in backends() {
        let a = num("0.1", &backend);
        let b = num("0.2", &backend);
        assert_eq!(a.add(&b).unwrap(), num("0.3", &backend));
        assert_eq!(a.multiply(&b).unwrap().to_string(), "0.02");
        assert_eq!(a.subtract(&b).unwrap().to_string(), "-0.1");
        assert_eq!(num("1.5", &backend).power(3).unwrap().to_string(), "3.375");
        assert_eq!(
            num("2", &backend)
                .powi(-2, 4, RoundingMode::HalfUp)
                .unwrap()
                .to_string(),
            "0.2500"
        );
    }
}

#[test]
fn comparison_ignores_scale() {
    for backend in backends() {
        let a = num("1.50", &backend);
        let b = num("1.5", &backend);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Equal);
        assert!(a.equals(&b, None).unwrap());
        assert_eq!(a.normalized().to_string(), "1.5");
        assert!(num("1.51", &backend)
            .equals(&b, Some(&num("0.01", &backend)))
            .unwrap());
        assert!(!num("1.52", &backend)
            .equals(&b, Some(&num("0.01", &backend)))
            .unwrap());
        assert_eq!(a.min(&num("-2", &backend)).unwrap().to_string(), "-2");
        assert_eq!(a.max(&num("-2", &backend)).unwrap().to_string(), "1.50");
    }
}

#[test]
fn parsing() {
    let backend = backends().remove(0);
    assert_eq!(num("1.5e3", &backend).to_string(), "1500");
    assert_eq!(num("15e-3", &backend).to_string(), "0.015");
    assert_eq!(num("-.5", &backend).to_string(), "-0.5");
    assert!(matches!(
        NumericValue::parse("1.2.3", &backend),
        Err(UnitError::InvalidNumber(_))
    ));
    assert!(matches!(
        NumericValue::parse("", &backend),
        Err(UnitError::InvalidNumber(_))
    ));
}

#[test]
fn exponents_are_bounded() {
    let backend = backends().remove(0);
    assert_eq!(num("1e1000", &backend).to_string().len(), 1001);
    assert_eq!(num("1e-1000", &backend).scale(), 1000);
    for input in [
        "1e1001",
        "1e-1001",
        "1e4000000000",
        "1e-4000000000",
        "1e-9223372036854775808",
    ] {
        assert!(
            matches!(
                NumericValue::parse(input, &backend),
                Err(UnitError::InvalidNumber(_))
            ),
            "{}",
            input
        );
    }
}

#[test]
fn large_square_roots() {
    for backend in backends() {
        assert_eq!(
            num("1000000000", &backend)
                .sqrt(10, RoundingMode::HalfUp)
                .unwrap()
                .to_string(),
            "31622.7766016838"
        );
    }
}

#[cfg(all(feature = "exact-backend", feature = "fixed-backend"))]
#[test]
fn mixed_backends_are_rejected() {
    let exact = BackendKind::Exact.instantiate().unwrap();
    let fixed = BackendKind::Fixed.instantiate().unwrap();
    let result = num("1", &exact).add(&num("1", &fixed));
    assert!(matches!(result, Err(UnitError::BackendMismatch(_, _))));
}

#[cfg(all(feature = "exact-backend", feature = "fixed-backend"))]
#[test]
fn fixed_backend_overflows_where_exact_does_not() {
    let exact = BackendKind::Exact.instantiate().unwrap();
    let fixed = BackendKind::Fixed.instantiate().unwrap();
    let big = num("1e20", &exact);
    assert_eq!(big.multiply(&big).unwrap(), num("1e40", &exact));
    let big = num("1e20", &fixed);
    assert!(matches!(big.multiply(&big), Err(UnitError::Overflow(_))));
}

#[test]
fn serializes_as_decimal_string() {
    let backend = backends().remove(0);
    let value = num("12.50", &backend);
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"12.50\"");
    let parsed: NumericValue = serde_json::from_str("\"12.5\"").unwrap();
    assert_eq!(parsed, value);
}
