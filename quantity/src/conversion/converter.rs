/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::Arc;

use crate::error::UnitError;
use crate::numeric::{NumericValue, RoundingMode};
use crate::quantity::{Measure, Quantity, QuantityType};
use crate::registry::{ConversionFactorRegistry, UnitRegistry};
use crate::unit::Unit;

/// Converts values between units of compatible dimension, always
/// pivoting through the base unit.
#[derive(Clone, Debug)]
pub struct Converter {
    conversions: Arc<ConversionFactorRegistry>,
    units: Arc<UnitRegistry>,
}

impl Converter {
    pub fn new(
        conversions: Arc<ConversionFactorRegistry>,
        units: Arc<UnitRegistry>,
    ) -> Self {
        Converter { conversions, units }
    }

    /// Converter over the process-wide default registries.
    pub fn global() -> Result<Self, UnitError> {
        Ok(Converter::new(
            ConversionFactorRegistry::global()?,
            UnitRegistry::global()?,
        ))
    }

    pub fn conversions(&self) -> &ConversionFactorRegistry {
        &self.conversions
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    /// `from -> base -> to`. Converting to the same unit still goes
    /// through the base unit and rounds at `scale`.
    pub fn convert(
        &self,
        value: &NumericValue,
        from: Unit,
        to: Unit,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<NumericValue, UnitError> {
        let (from_dim, to_dim) = (from.dimension(), to.dimension());
        if !from_dim.is_compatible_with(&to_dim) {
            return Err(UnitError::IncompatibleDimensions(from_dim, to_dim));
        }
        let from_rule = self.conversions.get_rule(from)?;
        let to_rule = self.conversions.get_rule(to)?;
        let base = from_rule.to_base(value)?;
        let result = to_rule.from_base(&base, scale, mode)?;
        log::trace!("{} {} -> {} {}", value, from, result, to);
        Ok(result)
    }

    /// Converts and rebuilds the quantity with the target unit's type.
    pub fn convert_quantity<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        to: Unit,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Quantity, UnitError> {
        let quantity_type = self.quantity_type(to)?;
        let value =
            self.convert(quantity.value(), quantity.unit(), to, scale, mode)?;
        quantity_type.of(value, to)
    }

    /// The magnitude in the base unit of the quantity's dimension.
    /// Exact.
    pub fn base_value<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
    ) -> Result<NumericValue, UnitError> {
        self.conversions
            .get_rule(quantity.unit())?
            .to_base(quantity.value())
    }

    /// Single leg to the base unit. Exact.
    pub fn to_base_unit<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
    ) -> Result<Quantity, UnitError> {
        let unit = self.conversions.get_base_unit(quantity.dimension());
        Ok(Quantity::new(self.base_value(quantity)?, unit))
    }

    /// Single leg from a base-unit magnitude into `to`.
    pub fn from_base_unit(
        &self,
        value: &NumericValue,
        to: Unit,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Quantity, UnitError> {
        let quantity_type = self.quantity_type(to)?;
        let rule = self.conversions.get_rule(to)?;
        let value = rule.from_base(value, scale, mode)?;
        quantity_type.of(value, to)
    }

    /// The registered quantity type, or the catalog type of a unit
    /// that only has a conversion rule.
    fn quantity_type(&self, unit: Unit) -> Result<QuantityType, UnitError> {
        match self.units.has(unit) || !self.conversions.has(unit) {
            true => self.units.get_quantity_type(unit),
            false => Ok(QuantityType::for_unit(unit)),
        }
    }

    /// Converts into the registered base unit of the dimension.
    pub fn normalize<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Quantity, UnitError> {
        let base = self.conversions.get_base_unit(quantity.dimension());
        self.convert_quantity(quantity, base, scale, mode)
    }
}
