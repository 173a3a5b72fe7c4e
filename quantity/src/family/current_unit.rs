/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::UnitFamily;
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{Prefix, SiPrefix};
use crate::system::{Notation, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum CurrentUnit {
    Ampere(SiPrefix),
}

impl UnitFamily for CurrentUnit {
    const DIMENSION: Dimension = Dimension::ElectricCurrent;
    const BASE: Self = CurrentUnit::Ampere(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE.iter().map(|p| Self::Ampere(*p)).collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            CurrentUnit::Ampere(p) => format!("{}A", p.prefix(notation)),
        }
    }

    fn name(&self) -> String {
        match self {
            CurrentUnit::Ampere(p) => format!("{}ampere", p.name()),
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            CurrentUnit::Ampere(p) => p.factor(),
        }
    }
}

impl Display for CurrentUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
