/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::UnitFamily;
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{FracPrefix, Prefix};
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
pub enum TimeUnit {
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week,
}

impl UnitFamily for TimeUnit {
    const DIMENSION: Dimension = Dimension::Time;
    const BASE: Self = TimeUnit::Second(FracPrefix::Unit);

    fn all() -> Vec<Self> {
        FracPrefix::SCALE
            .iter()
            .map(|p| Self::Second(*p))
            .chain([Self::Minute, Self::Hour, Self::Day, Self::Week])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            TimeUnit::Second(p) => format!("{}s", p.prefix(notation)),
            TimeUnit::Minute => "min".to_string(),
            TimeUnit::Hour => "h".to_string(),
            TimeUnit::Day => "d".to_string(),
            TimeUnit::Week => "wk".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            TimeUnit::Second(p) => format!("{}second", p.name()),
            TimeUnit::Minute => "minute".to_string(),
            TimeUnit::Hour => "hour".to_string(),
            TimeUnit::Day => "day".to_string(),
            TimeUnit::Week => "week".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Metric
    }

    fn factor(&self) -> Factor {
        match self {
            TimeUnit::Second(p) => p.factor(),
            TimeUnit::Minute => Factor::integer(60),
            TimeUnit::Hour => Factor::integer(3600),
            TimeUnit::Day => Factor::integer(86400),
            TimeUnit::Week => Factor::integer(604800),
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
