/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use crate::error::UnitError;
use crate::numeric::{Backend, NumericValue, RoundingMode};
use crate::unit::Unit;

/// Affine transform between a unit and the base unit of its
/// dimension: `base = value * factor + offset`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ConversionRule {
    factor: NumericValue,
    offset: NumericValue,
}

impl ConversionRule {
    /// Fails `DivisionByZero` for a zero factor, which could not be
    /// inverted.
    pub fn new(
        factor: NumericValue,
        offset: NumericValue,
    ) -> Result<Self, UnitError> {
        if factor.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        Ok(ConversionRule { factor, offset })
    }

    pub fn multiplicative(factor: NumericValue) -> Result<Self, UnitError> {
        let offset = NumericValue::zero(factor.backend());
        Self::new(factor, offset)
    }

    pub fn identity(backend: &Backend) -> Self {
        ConversionRule {
            factor: NumericValue::one(backend),
            offset: NumericValue::zero(backend),
        }
    }

    /// The rule for a catalog unit. Factors whose decimal expansion
    /// does not terminate are rounded at `scale`.
    pub fn for_unit(
        unit: Unit,
        backend: &Backend,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Self, UnitError> {
        Self::new(
            unit.factor().to_value(backend, scale, mode)?,
            unit.offset().to_value(backend, scale, mode)?,
        )
    }

    pub fn factor(&self) -> &NumericValue {
        &self.factor
    }

    pub fn offset(&self) -> &NumericValue {
        &self.offset
    }

    pub fn is_multiplicative(&self) -> bool {
        self.offset.is_zero()
    }

    pub fn is_identity(&self) -> bool {
        self.is_multiplicative()
            && self.factor == NumericValue::one(self.factor.backend())
    }

    /// Exact: `value * factor + offset`.
    pub fn to_base(
        &self,
        value: &NumericValue,
    ) -> Result<NumericValue, UnitError> {
        value.multiply(&self.factor)?.add(&self.offset)
    }

    /// `(value - offset) / factor`, rounded at `scale`.
    pub fn from_base(
        &self,
        value: &NumericValue,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<NumericValue, UnitError> {
        value.subtract(&self.offset)?.divide(&self.factor, scale, mode)
    }
}

impl Display for ConversionRule {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.is_multiplicative() {
            true => write!(f, "x * {}", self.factor.normalized()),
            false => write!(
                f,
                "x * {} + {}",
                self.factor.normalized(),
                self.offset.normalized()
            ),
        }
    }
}
