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
pub enum MassUnit {
    Gram(SiPrefix),
    Tonne,
    Ounce,
    Pound,
    Stone,
}

impl UnitFamily for MassUnit {
    const DIMENSION: Dimension = Dimension::Mass;
    const BASE: Self = MassUnit::Gram(SiPrefix::Kilo);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Gram(*p))
            .chain([Self::Tonne, Self::Ounce, Self::Pound, Self::Stone])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            MassUnit::Gram(p) => format!("{}g", p.prefix(notation)),
            MassUnit::Tonne => "t".to_string(),
            MassUnit::Ounce => "oz".to_string(),
            MassUnit::Pound => "lb".to_string(),
            MassUnit::Stone => "st".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            MassUnit::Gram(p) => format!("{}gram", p.name()),
            MassUnit::Tonne => "tonne".to_string(),
            MassUnit::Ounce => "ounce".to_string(),
            MassUnit::Pound => "pound".to_string(),
            MassUnit::Stone => "stone".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            MassUnit::Gram(_) | MassUnit::Tonne => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        let pound = Factor::ratio(45359237, 100000000);
        match self {
            MassUnit::Gram(p) => p.factor() * Factor::ratio(1, 1000),
            MassUnit::Tonne => Factor::integer(1000),
            MassUnit::Ounce => pound / Factor::integer(16),
            MassUnit::Pound => pound,
            MassUnit::Stone => pound * Factor::integer(14),
        }
    }
}

impl Display for MassUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
