/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use crate::system::Notation;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Sub-unit (base 1000) prefixes.
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
pub enum FracPrefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
}

impl Prefix for FracPrefix {
    const BASE: u64 = 1000;
    const SCALE: &'static [Self] = &[
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Unit,
    ];

    fn power(&self) -> i64 {
        match self {
            FracPrefix::Pico => -4,
            FracPrefix::Nano => -3,
            FracPrefix::Micro => -2,
            FracPrefix::Milli => -1,
            FracPrefix::Unit => 0,
        }
    }

    fn prefix(&self, notation: Notation) -> &'static str {
        match self {
            FracPrefix::Pico => "p",
            FracPrefix::Nano => "n",
            FracPrefix::Micro => match notation {
                Notation::Unicode => "µ",
                Notation::Ascii => "u",
            },
            FracPrefix::Milli => "m",
            FracPrefix::Unit => "",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FracPrefix::Pico => "pico",
            FracPrefix::Nano => "nano",
            FracPrefix::Micro => "micro",
            FracPrefix::Milli => "milli",
            FracPrefix::Unit => "",
        }
    }
}

impl Display for FracPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix(Notation::Unicode))
    }
}
