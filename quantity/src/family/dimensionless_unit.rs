/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::UnitFamily;
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{DecPrefix, Prefix};
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
pub enum DimensionlessUnit {
    Count(DecPrefix),
    Percent,
    Permille,
    PartsPerMillion,
}

impl UnitFamily for DimensionlessUnit {
    const DIMENSION: Dimension = Dimension::Dimensionless;
    const BASE: Self = DimensionlessUnit::Count(DecPrefix::Unit);

    fn all() -> Vec<Self> {
        DecPrefix::SCALE
            .iter()
            .map(|p| Self::Count(*p))
            .chain([Self::Percent, Self::Permille, Self::PartsPerMillion])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match (self, notation) {
            (DimensionlessUnit::Count(p), _) => p.prefix(notation).to_string(),
            (DimensionlessUnit::Percent, _) => "%".to_string(),
            (DimensionlessUnit::Permille, Notation::Unicode) => "‰".to_string(),
            (DimensionlessUnit::Permille, Notation::Ascii) => {
                "permille".to_string()
            }
            (DimensionlessUnit::PartsPerMillion, _) => "ppm".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            DimensionlessUnit::Count(DecPrefix::Unit) => "one".to_string(),
            DimensionlessUnit::Count(p) => p.name().to_string(),
            DimensionlessUnit::Percent => "percent".to_string(),
            DimensionlessUnit::Permille => "per mille".to_string(),
            DimensionlessUnit::PartsPerMillion => {
                "parts per million".to_string()
            }
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            DimensionlessUnit::Count(p) => p.factor(),
            DimensionlessUnit::Percent => Factor::ratio(1, 100),
            DimensionlessUnit::Permille => Factor::ratio(1, 1000),
            DimensionlessUnit::PartsPerMillion => Factor::ratio(1, 1000000),
        }
    }
}

impl Display for DimensionlessUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
