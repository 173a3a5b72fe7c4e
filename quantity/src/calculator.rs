/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::Arc;

use crate::conversion::Converter;
use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::formula::DimensionalFormula;
use crate::numeric::{MathContext, NumericValue, RoundingMode};
use crate::quantity::{Measure, Quantity, QuantityType};
use crate::registry::{ResultType, ResultTypeRegistry};
use crate::system::UnitSystem;
use crate::unit::Unit;

/// Dimension-aware arithmetic on quantities.
///
/// Same-dimension operations keep the left operand's unit.
/// Cross-dimension operations combine base-unit magnitudes and look up
/// the unit of the resulting formula in the result-type registry,
/// unless a result unit is given.
#[derive(Clone, Debug)]
pub struct Calculator {
    converter: Converter,
    results: Arc<ResultTypeRegistry>,
    context: MathContext,
}

impl Calculator {
    pub fn new(
        converter: Converter,
        results: Arc<ResultTypeRegistry>,
        context: MathContext,
    ) -> Self {
        Calculator {
            converter,
            results,
            context,
        }
    }

    pub fn context(&self) -> MathContext {
        self.context
    }

    /* Same dimension. */

    pub fn add<A, B>(&self, a: &A, b: &B) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let rhs = self.in_unit_of(a, b)?;
        Ok(Quantity::new(a.value().add(&rhs)?, a.unit()))
    }

    pub fn subtract<A, B>(&self, a: &A, b: &B) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let rhs = self.in_unit_of(a, b)?;
        Ok(Quantity::new(a.value().subtract(&rhs)?, a.unit()))
    }

    /// Sum in the unit of the first element; `None` for no elements.
    pub fn sum<Q: Measure>(
        &self,
        quantities: &[Q],
    ) -> Result<Option<Quantity>, UnitError> {
        let mut iter = quantities.iter();
        let mut total = match iter.next() {
            Some(first) => first.to_quantity(),
            None => return Ok(None),
        };
        for quantity in iter {
            total = self.add(&total, quantity)?;
        }
        Ok(Some(total))
    }

    /* Scalars. */

    pub fn multiply_by<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        scalar: &NumericValue,
    ) -> Result<Quantity, UnitError> {
        let value = quantity.value().multiply(scalar)?;
        Ok(Quantity::new(value, quantity.unit()))
    }

    pub fn divide_by<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        scalar: &NumericValue,
    ) -> Result<Quantity, UnitError> {
        let value = quantity.value().divide(
            scalar,
            self.context.scale,
            self.context.rounding,
        )?;
        Ok(Quantity::new(value, quantity.unit()))
    }

    pub fn negate<Q: Measure + ?Sized>(&self, quantity: &Q) -> Quantity {
        Quantity::new(quantity.value().negate(), quantity.unit())
    }

    pub fn abs<Q: Measure + ?Sized>(&self, quantity: &Q) -> Quantity {
        Quantity::new(quantity.value().abs(), quantity.unit())
    }

    /* Cross dimension. */

    pub fn multiply<A, B>(
        &self,
        a: &A,
        b: &B,
        result_unit: Option<Unit>,
    ) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let formula = a.formula().checked_multiply(b.formula())?;
        let magnitude = self
            .converter
            .base_value(a)?
            .multiply(&self.converter.base_value(b)?)?;
        let system = a.system().prefer(b.system());
        self.combine(formula, system, magnitude, result_unit)
    }

    pub fn divide<A, B>(
        &self,
        a: &A,
        b: &B,
        result_unit: Option<Unit>,
    ) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let formula = a.formula().checked_divide(b.formula())?;
        let magnitude = self.converter.base_value(a)?.divide(
            &self.converter.base_value(b)?,
            self.context.scale,
            self.context.rounding,
        )?;
        let system = a.system().prefer(b.system());
        self.combine(formula, system, magnitude, result_unit)
    }

    pub fn power<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        exponent: i32,
        result_unit: Option<Unit>,
    ) -> Result<Quantity, UnitError> {
        let formula = quantity.formula().checked_power(exponent)?;
        let magnitude = self.converter.base_value(quantity)?.powi(
            exponent,
            self.context.scale,
            self.context.rounding,
        )?;
        self.combine(formula, quantity.system(), magnitude, result_unit)
    }

    pub fn sqrt<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        result_unit: Option<Unit>,
    ) -> Result<Quantity, UnitError> {
        let formula = quantity.formula().root(2)?;
        let magnitude = self
            .converter
            .base_value(quantity)?
            .sqrt(self.context.scale, self.context.rounding)?;
        self.combine(formula, quantity.system(), magnitude, result_unit)
    }

    /// Dimensionless ratio of two quantities of the same dimension.
    pub fn ratio<A, B>(
        &self,
        a: &A,
        b: &B,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<NumericValue, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        check_compatible(a.dimension(), b.dimension())?;
        self.converter.base_value(a)?.divide(
            &self.converter.base_value(b)?,
            scale,
            mode,
        )
    }

    /* Rounding, unit unchanged. */

    pub fn round<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        precision: u32,
        mode: RoundingMode,
    ) -> Result<Quantity, UnitError> {
        let value = quantity.value().round(precision, mode)?;
        Ok(Quantity::new(value, quantity.unit()))
    }

    pub fn floor<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        precision: u32,
    ) -> Result<Quantity, UnitError> {
        self.round(quantity, precision, RoundingMode::Floor)
    }

    pub fn ceil<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        precision: u32,
    ) -> Result<Quantity, UnitError> {
        self.round(quantity, precision, RoundingMode::Ceiling)
    }

    /// `b`'s value in `a`'s unit.
    fn in_unit_of<A, B>(
        &self,
        a: &A,
        b: &B,
    ) -> Result<NumericValue, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        check_compatible(a.dimension(), b.dimension())?;
        self.converter.convert(
            b.value(),
            b.unit(),
            a.unit(),
            self.context.scale,
            self.context.rounding,
        )
    }

    /// Expresses a coherent magnitude of `formula` in the result unit.
    fn combine(
        &self,
        formula: DimensionalFormula,
        system: UnitSystem,
        magnitude: NumericValue,
        result_unit: Option<Unit>,
    ) -> Result<Quantity, UnitError> {
        let target = match result_unit {
            Some(unit) => {
                let dimension = Dimension::from_formula(formula);
                check_compatible(dimension, unit.dimension())?;
                ResultType {
                    unit,
                    quantity_type: QuantityType::for_unit(unit),
                }
            }
            None => self.results.resolve(
                formula,
                system,
                self.converter.conversions(),
            ),
        };
        let value = self
            .converter
            .conversions()
            .get_rule(target.unit)?
            .from_base(&magnitude, self.context.scale, self.context.rounding)?;
        target.quantity_type.of(value, target.unit)
    }
}

fn check_compatible(a: Dimension, b: Dimension) -> Result<(), UnitError> {
    match a.is_compatible_with(&b) {
        true => Ok(()),
        false => Err(UnitError::IncompatibleDimensions(a, b)),
    }
}
