/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The measurement system a unit belongs to.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// SI and the metric units accepted alongside it.
    Metric,
    Imperial,
    UsCustomary,
    /// Bits, bytes and their multiples.
    Digital,
}

impl UnitSystem {
    pub const LIST: &'static [Self] =
        &[Self::Metric, Self::Imperial, Self::UsCustomary, Self::Digital];

    /// Metric is the neutral default; everything else is a deliberate
    /// choice and wins when operands disagree.
    pub const fn specificity(&self) -> u8 {
        match self {
            UnitSystem::Metric => 0,
            UnitSystem::Digital => 1,
            UnitSystem::Imperial | UnitSystem::UsCustomary => 2,
        }
    }

    /// The more specific of two systems; ties go to `self`.
    pub fn prefer(self, other: Self) -> Self {
        match other.specificity() > self.specificity() {
            true => other,
            false => self,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::UsCustomary => "US customary",
            UnitSystem::Digital => "digital",
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Which spelling of a unit symbol to render.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum Notation {
    #[default]
    Unicode,
    Ascii,
}
