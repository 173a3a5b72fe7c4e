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
pub enum AmountUnit {
    Mole(SiPrefix),
}

impl UnitFamily for AmountUnit {
    const DIMENSION: Dimension = Dimension::AmountOfSubstance;
    const BASE: Self = AmountUnit::Mole(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE.iter().map(|p| Self::Mole(*p)).collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            AmountUnit::Mole(p) => format!("{}mol", p.prefix(notation)),
        }
    }

    fn name(&self) -> String {
        match self {
            AmountUnit::Mole(p) => format!("{}mole", p.name()),
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            AmountUnit::Mole(p) => p.factor(),
        }
    }
}

impl Display for AmountUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
