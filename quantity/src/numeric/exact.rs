/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use super::repr::DecimalRepr;
use super::{ArithmeticBackend, BackendKind, RoundingMode};
use crate::error::UnitError;

/// Unbounded decimal arithmetic on big integers.
#[derive(Clone, Copy, Default, Debug)]
pub struct ExactBackend;

impl ArithmeticBackend for ExactBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Exact
    }

    fn add(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        let (a, b, scale) = a.align(b);
        Ok(DecimalRepr::new(a + b, scale))
    }

    fn subtract(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        let (a, b, scale) = a.align(b);
        Ok(DecimalRepr::new(a - b, scale))
    }

    fn multiply(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        Ok(DecimalRepr::new(
            a.mantissa() * b.mantissa(),
            a.scale() + b.scale(),
        ))
    }

    fn divide(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        if b.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        Ok(a.quotient(b, scale, mode))
    }

    fn power(
        &self,
        a: &DecimalRepr,
        exponent: u32,
    ) -> Result<DecimalRepr, UnitError> {
        Ok(DecimalRepr::new(
            a.mantissa().pow(exponent),
            a.scale() * exponent,
        ))
    }

    fn sqrt(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        if a.is_negative() {
            return Err(UnitError::NegativeRadicand(a.to_string()));
        }
        Ok(a.square_root(scale, mode))
    }

    fn round(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        Ok(a.rounded(scale, mode))
    }

    fn compare(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<Ordering, UnitError> {
        Ok(a.cmp(b))
    }
}
