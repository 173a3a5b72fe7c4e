/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::factor::Factor;
use crate::system::Notation;

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i64;
    fn prefix(&self, notation: Notation) -> &'static str;
    fn name(&self) -> &'static str;

    fn factor(&self) -> Factor {
        Factor::power_of(Self::BASE, self.power())
    }
}
