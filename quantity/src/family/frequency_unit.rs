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
pub enum FrequencyUnit {
    Hertz(SiPrefix),
    RevolutionsPerMinute,
}

impl UnitFamily for FrequencyUnit {
    const DIMENSION: Dimension = Dimension::Frequency;
    const BASE: Self = FrequencyUnit::Hertz(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Hertz(*p))
            .chain([Self::RevolutionsPerMinute])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            FrequencyUnit::Hertz(p) => format!("{}Hz", p.prefix(notation)),
            FrequencyUnit::RevolutionsPerMinute => "rpm".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            FrequencyUnit::Hertz(p) => format!("{}hertz", p.name()),
            FrequencyUnit::RevolutionsPerMinute => {
                "revolutions per minute".to_string()
            }
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            FrequencyUnit::Hertz(p) => p.factor(),
            FrequencyUnit::RevolutionsPerMinute => Factor::ratio(1, 60),
        }
    }
}

impl Display for FrequencyUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
