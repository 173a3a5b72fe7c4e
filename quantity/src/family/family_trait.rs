/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::system::{Notation, UnitSystem};

/// A closed family of units sharing one dimension.
///
/// Every unit converts to the family's base unit through
/// `base = value * factor + offset`; the base unit itself has
/// factor 1 and offset 0.
pub trait UnitFamily: Sized + Copy + Ord + 'static {
    const DIMENSION: Dimension;
    const BASE: Self;

    /// Every unit of the family, smallest first where that applies.
    fn all() -> Vec<Self>;

    fn symbol(&self, notation: Notation) -> String;
    fn name(&self) -> String;
    fn system(&self) -> UnitSystem;

    fn factor(&self) -> Factor;

    fn offset(&self) -> Factor {
        Factor::zero()
    }
}
