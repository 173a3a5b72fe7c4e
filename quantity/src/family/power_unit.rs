/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{ForceUnit, LengthUnit, UnitFamily};
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
pub enum PowerUnit {
    Watt(SiPrefix),
    Horsepower,
}

impl UnitFamily for PowerUnit {
    const DIMENSION: Dimension = Dimension::Power;
    const BASE: Self = PowerUnit::Watt(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Watt(*p))
            .chain([Self::Horsepower])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            PowerUnit::Watt(p) => format!("{}W", p.prefix(notation)),
            PowerUnit::Horsepower => "hp".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            PowerUnit::Watt(p) => format!("{}watt", p.name()),
            PowerUnit::Horsepower => "horsepower".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            PowerUnit::Watt(_) => UnitSystem::Metric,
            PowerUnit::Horsepower => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            PowerUnit::Watt(p) => p.factor(),
            /* Mechanical horsepower: 550 ft⋅lbf/s. */
            PowerUnit::Horsepower => {
                Factor::integer(550)
                    * LengthUnit::Foot.factor()
                    * ForceUnit::PoundForce.factor()
            }
        }
    }
}

impl Display for PowerUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
