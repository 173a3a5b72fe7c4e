/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{MassUnit, UnitFamily};
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
pub enum ForceUnit {
    Newton(SiPrefix),
    Dyne,
    PoundForce,
}

impl UnitFamily for ForceUnit {
    const DIMENSION: Dimension = Dimension::Force;
    const BASE: Self = ForceUnit::Newton(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Newton(*p))
            .chain([Self::Dyne, Self::PoundForce])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            ForceUnit::Newton(p) => format!("{}N", p.prefix(notation)),
            ForceUnit::Dyne => "dyn".to_string(),
            ForceUnit::PoundForce => "lbf".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            ForceUnit::Newton(p) => format!("{}newton", p.name()),
            ForceUnit::Dyne => "dyne".to_string(),
            ForceUnit::PoundForce => "pound-force".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            ForceUnit::Newton(_) | ForceUnit::Dyne => UnitSystem::Metric,
            ForceUnit::PoundForce => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            ForceUnit::Newton(p) => p.factor(),
            ForceUnit::Dyne => Factor::power_of(10, -5),
            /* Standard gravity times the avoirdupois pound. */
            ForceUnit::PoundForce => {
                Factor::ratio(980665, 100000) * MassUnit::Pound.factor()
            }
        }
    }
}

impl Display for ForceUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
