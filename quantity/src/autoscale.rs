/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use crate::conversion::Converter;
use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::numeric::{Backend, MathContext, NumericValue};
use crate::quantity::{Measure, Quantity};
use crate::system::UnitSystem;
use crate::unit::Unit;

/// Inclusive magnitude range `[min, max]` an autoscaled value should
/// land in.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AutoscaleRange {
    min: NumericValue,
    max: NumericValue,
}

impl AutoscaleRange {
    /// Fails `InvalidRange` unless `0 <= min <= max`.
    pub fn new(
        min: NumericValue,
        max: NumericValue,
    ) -> Result<Self, UnitError> {
        if min.is_negative() || min.compare(&max)? == Ordering::Greater {
            return Err(UnitError::InvalidRange(
                min.to_string(),
                max.to_string(),
            ));
        }
        Ok(AutoscaleRange { min, max })
    }

    /// `[1, 1000]`.
    pub fn standard(backend: &Backend) -> Self {
        AutoscaleRange {
            min: NumericValue::from_i64(1, backend),
            max: NumericValue::from_i64(1000, backend),
        }
    }

    pub fn min(&self) -> &NumericValue {
        &self.min
    }

    pub fn max(&self) -> &NumericValue {
        &self.max
    }

    fn contains(&self, magnitude: &NumericValue) -> Result<bool, UnitError> {
        Ok(magnitude.compare(&self.min)? != Ordering::Less
            && magnitude.compare(&self.max)? != Ordering::Greater)
    }

    /// Geometric mean of the bounds, or the arithmetic mean when the
    /// lower bound is zero.
    fn target(&self, context: MathContext) -> Result<NumericValue, UnitError> {
        match self.min.is_zero() {
            false => self
                .min
                .multiply(&self.max)?
                .sqrt(context.scale, context.rounding),
            true => self.max.divide(
                &NumericValue::from_i64(2, self.max.backend()),
                context.scale,
                context.rounding,
            ),
        }
    }
}

/// Picks the registered unit that renders a quantity inside a
/// human-friendly range.
#[derive(Clone, Debug)]
pub struct AutoScaler {
    converter: Converter,
    context: MathContext,
    range: AutoscaleRange,
}

impl AutoScaler {
    pub fn new(
        converter: Converter,
        context: MathContext,
        range: AutoscaleRange,
    ) -> Self {
        AutoScaler {
            converter,
            context,
            range,
        }
    }

    pub fn range(&self) -> &AutoscaleRange {
        &self.range
    }

    /// Units known to both registries with a compatible dimension,
    /// optionally limited to one system, in `Unit` order.
    pub fn candidates(
        &self,
        dimension: Dimension,
        system: Option<UnitSystem>,
    ) -> Vec<Unit> {
        self.converter
            .units()
            .units()
            .filter(|unit| self.converter.conversions().has(*unit))
            .filter(|unit| unit.dimension().is_compatible_with(&dimension))
            .filter(|unit| system.map_or(true, |s| unit.system() == s))
            .collect()
    }

    /// Autoscale into the configured range.
    pub fn autoscale<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        system: Option<UnitSystem>,
    ) -> Result<Quantity, UnitError> {
        self.autoscale_within(quantity, system, &self.range)
    }

    /// A unit whose magnitude is in range when exactly one qualifies;
    /// otherwise the magnitude closest to the range's mean, among the
    /// qualifying units if several do. Ties prefer a magnitude at or
    /// above the mean, then the first candidate. Without candidates, or
    /// for zero, the quantity is returned unchanged.
    pub fn autoscale_within<Q: Measure + ?Sized>(
        &self,
        quantity: &Q,
        system: Option<UnitSystem>,
        range: &AutoscaleRange,
    ) -> Result<Quantity, UnitError> {
        let candidates = self.candidates(quantity.dimension(), system);
        if candidates.is_empty() || quantity.value().is_zero() {
            return Ok(quantity.to_quantity());
        }

        let mut scaled = Vec::with_capacity(candidates.len());
        let mut in_range = Vec::new();
        for unit in candidates {
            let value = self.converter.convert(
                quantity.value(),
                quantity.unit(),
                unit,
                self.context.scale,
                self.context.rounding,
            )?;
            if range.contains(&value.abs())? {
                in_range.push((unit, value.clone()));
            }
            scaled.push((unit, value));
        }

        let pool = match in_range.len() {
            0 => scaled,
            _ => in_range,
        };
        let target = range.target(self.context)?;
        let (unit, value) = match closest(pool, &target)? {
            Some(choice) => choice,
            None => return Ok(quantity.to_quantity()),
        };
        log::trace!("autoscaled {} to {} {}", quantity.unit(), value, unit);
        self.converter.units().get_quantity_type(unit)?.of(value, unit)
    }
}

/* Smallest distance to the target; ties go to a magnitude at or above
 * the target, then to the earlier candidate. */
fn closest(
    pool: Vec<(Unit, NumericValue)>,
    target: &NumericValue,
) -> Result<Option<(Unit, NumericValue)>, UnitError> {
    let mut best: Option<(Unit, NumericValue, NumericValue, bool)> = None;
    for (unit, value) in pool {
        let magnitude = value.abs();
        let distance = magnitude.subtract(target)?.abs();
        let above = magnitude.compare(target)? != Ordering::Less;
        let better = match &best {
            None => true,
            Some((_, _, best_distance, best_above)) => {
                match distance.compare(best_distance)? {
                    Ordering::Less => true,
                    Ordering::Equal => above && !best_above,
                    Ordering::Greater => false,
                }
            }
        };
        if better {
            best = Some((unit, value, distance, above));
        }
    }
    Ok(best.map(|(unit, value, _, _)| (unit, value)))
}
