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
pub enum LuminousUnit {
    Candela(SiPrefix),
}

impl UnitFamily for LuminousUnit {
    const DIMENSION: Dimension = Dimension::LuminousIntensity;
    const BASE: Self = LuminousUnit::Candela(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE.iter().map(|p| Self::Candela(*p)).collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            LuminousUnit::Candela(p) => format!("{}cd", p.prefix(notation)),
        }
    }

    fn name(&self) -> String {
        match self {
            LuminousUnit::Candela(p) => format!("{}candela", p.name()),
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            LuminousUnit::Candela(p) => p.factor(),
        }
    }
}

impl Display for LuminousUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
