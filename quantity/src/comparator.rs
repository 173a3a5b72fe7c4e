/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use crate::conversion::Converter;
use crate::error::UnitError;
use crate::numeric::{MathContext, NumericValue};
use crate::quantity::{Measure, Quantity};

/// Orders quantities across units by comparing their base-unit
/// magnitudes. Operands must share a dimension.
#[derive(Clone, Debug)]
pub struct Comparator {
    converter: Converter,
    context: MathContext,
}

impl Comparator {
    pub fn new(converter: Converter, context: MathContext) -> Self {
        Comparator { converter, context }
    }

    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let (a, b) = self.base_values(a, b)?;
        a.compare(&b)
    }

    /// Exact equality, or within `tolerance` (a base-unit magnitude).
    pub fn equals<A, B>(
        &self,
        a: &A,
        b: &B,
        tolerance: Option<&NumericValue>,
    ) -> Result<bool, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let (a, b) = self.base_values(a, b)?;
        a.equals(&b, tolerance)
    }

    pub fn is_greater_than<A, B>(
        &self,
        a: &A,
        b: &B,
    ) -> Result<bool, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        Ok(self.compare(a, b)? == Ordering::Greater)
    }

    pub fn is_less_than<A, B>(&self, a: &A, b: &B) -> Result<bool, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    /// Inclusive on both ends.
    pub fn is_between<Q, L, H>(
        &self,
        quantity: &Q,
        low: &L,
        high: &H,
    ) -> Result<bool, UnitError>
    where
        Q: Measure + ?Sized,
        L: Measure + ?Sized,
        H: Measure + ?Sized,
    {
        self.check_range(low, high)?;
        Ok(self.compare(quantity, low)? != Ordering::Less
            && self.compare(quantity, high)? != Ordering::Greater)
    }

    /// The smaller operand, unchanged; `a` on a tie.
    pub fn min<A, B>(&self, a: &A, b: &B) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        match self.compare(a, b)? {
            Ordering::Greater => Ok(b.to_quantity()),
            _ => Ok(a.to_quantity()),
        }
    }

    /// The larger operand, unchanged; `a` on a tie.
    pub fn max<A, B>(&self, a: &A, b: &B) -> Result<Quantity, UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        match self.compare(a, b)? {
            Ordering::Less => Ok(b.to_quantity()),
            _ => Ok(a.to_quantity()),
        }
    }

    pub fn min_of<Q: Measure>(
        &self,
        quantities: &[Q],
    ) -> Result<Option<Quantity>, UnitError> {
        self.select(quantities, Ordering::Less)
    }

    pub fn max_of<Q: Measure>(
        &self,
        quantities: &[Q],
    ) -> Result<Option<Quantity>, UnitError> {
        self.select(quantities, Ordering::Greater)
    }

    /// The quantity limited to `[low, high]`. A bound that applies is
    /// returned converted into the quantity's unit.
    pub fn clamp<Q, L, H>(
        &self,
        quantity: &Q,
        low: &L,
        high: &H,
    ) -> Result<Quantity, UnitError>
    where
        Q: Measure + ?Sized,
        L: Measure + ?Sized,
        H: Measure + ?Sized,
    {
        self.check_range(low, high)?;
        if self.compare(quantity, low)? == Ordering::Less {
            return self.in_unit_of(quantity, low);
        }
        if self.compare(quantity, high)? == Ordering::Greater {
            return self.in_unit_of(quantity, high);
        }
        Ok(quantity.to_quantity())
    }

    fn base_values<A, B>(
        &self,
        a: &A,
        b: &B,
    ) -> Result<(NumericValue, NumericValue), UnitError>
    where
        A: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let (a_dim, b_dim) = (a.dimension(), b.dimension());
        if !a_dim.is_compatible_with(&b_dim) {
            return Err(UnitError::IncompatibleDimensions(a_dim, b_dim));
        }
        Ok((self.converter.base_value(a)?, self.converter.base_value(b)?))
    }

    fn check_range<L, H>(&self, low: &L, high: &H) -> Result<(), UnitError>
    where
        L: Measure + ?Sized,
        H: Measure + ?Sized,
    {
        match self.compare(low, high)? {
            Ordering::Greater => Err(UnitError::InvalidRange(
                low.to_quantity().to_string(),
                high.to_quantity().to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn select<Q: Measure>(
        &self,
        quantities: &[Q],
        wanted: Ordering,
    ) -> Result<Option<Quantity>, UnitError> {
        let mut best: Option<&Q> = None;
        for quantity in quantities {
            best = match best {
                None => Some(quantity),
                Some(current) => match self.compare(quantity, current)? {
                    ordering if ordering == wanted => Some(quantity),
                    _ => Some(current),
                },
            };
        }
        Ok(best.map(Measure::to_quantity))
    }

    /// `bound` expressed in the unit of `quantity`.
    fn in_unit_of<Q, B>(
        &self,
        quantity: &Q,
        bound: &B,
    ) -> Result<Quantity, UnitError>
    where
        Q: Measure + ?Sized,
        B: Measure + ?Sized,
    {
        let value = self.converter.convert(
            bound.value(),
            bound.unit(),
            quantity.unit(),
            self.context.scale,
            self.context.rounding,
        )?;
        Ok(Quantity::new(value, quantity.unit()))
    }
}
