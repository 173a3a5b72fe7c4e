/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use num_bigint::BigInt;
use rust_decimal::Decimal;

use super::repr::DecimalRepr;
use super::{ArithmeticBackend, BackendKind, RoundingMode};
use crate::error::UnitError;

/// 96-bit decimal arithmetic (28 significant digits) on `rust_decimal`.
///
/// Operands and results must fit a `Decimal`; anything that does not
/// fails with `Overflow` instead of losing digits silently. Quotients
/// and roots are rounded on the full mantissas, so only the rounded
/// result has to fit.
#[derive(Clone, Copy, Default, Debug)]
pub struct FixedBackend;

fn overflow() -> UnitError {
    UnitError::Overflow(BackendKind::Fixed.to_string())
}

fn to_decimal(value: &DecimalRepr) -> Result<Decimal, UnitError> {
    let mantissa = i128::try_from(value.mantissa()).map_err(|_| overflow())?;
    Decimal::try_from_i128_with_scale(mantissa, value.scale())
        .map_err(|_| overflow())
}

fn from_decimal(value: Decimal) -> DecimalRepr {
    DecimalRepr::new(BigInt::from(value.mantissa()), value.scale())
}

/// Fails when `rust_decimal` had to drop fractional digits.
fn exact(value: Decimal, scale: u32) -> Result<Decimal, UnitError> {
    match value.scale() == scale {
        true => Ok(value),
        false => Err(overflow()),
    }
}

/// Range check for results computed on the mantissas.
fn fit(value: DecimalRepr) -> Result<DecimalRepr, UnitError> {
    to_decimal(&value).map(from_decimal)
}

impl ArithmeticBackend for FixedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Fixed
    }

    fn add(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        let sum = to_decimal(a)?
            .checked_add(to_decimal(b)?)
            .ok_or_else(overflow)?;
        Ok(from_decimal(exact(sum, a.scale().max(b.scale()))?))
    }

    fn subtract(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        let diff = to_decimal(a)?
            .checked_sub(to_decimal(b)?)
            .ok_or_else(overflow)?;
        Ok(from_decimal(exact(diff, a.scale().max(b.scale()))?))
    }

    fn multiply(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError> {
        let product = to_decimal(a)?
            .checked_mul(to_decimal(b)?)
            .ok_or_else(overflow)?;
        Ok(from_decimal(exact(product, a.scale() + b.scale())?))
    }

    fn divide(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        to_decimal(a)?;
        if to_decimal(b)?.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        fit(a.quotient(b, scale, mode))
    }

    fn power(
        &self,
        a: &DecimalRepr,
        exponent: u32,
    ) -> Result<DecimalRepr, UnitError> {
        let base = to_decimal(a)?;
        let result = (0..exponent).try_fold(Decimal::ONE, |acc, _| {
            acc.checked_mul(base).ok_or_else(overflow)
        })?;
        Ok(from_decimal(exact(result, a.scale() * exponent)?))
    }

    fn sqrt(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        to_decimal(a)?;
        if a.is_negative() {
            return Err(UnitError::NegativeRadicand(a.to_string()));
        }
        fit(a.square_root(scale, mode))
    }

    fn round(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError> {
        to_decimal(a)?;
        fit(a.rounded(scale, mode))
    }

    fn compare(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<Ordering, UnitError> {
        Ok(to_decimal(a)?.cmp(&to_decimal(b)?))
    }
}
