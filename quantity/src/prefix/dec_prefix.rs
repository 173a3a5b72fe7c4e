/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use crate::system::Notation;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Decimal (base 1000) multiples.
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
pub enum DecPrefix {
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl Prefix for DecPrefix {
    const BASE: u64 = 1000;
    const SCALE: &'static [Self] = &[
        Self::Unit,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
    ];

    fn power(&self) -> i64 {
        match self {
            DecPrefix::Unit => 0,
            DecPrefix::Kilo => 1,
            DecPrefix::Mega => 2,
            DecPrefix::Giga => 3,
            DecPrefix::Tera => 4,
            DecPrefix::Peta => 5,
        }
    }

    fn prefix(&self, _notation: Notation) -> &'static str {
        match self {
            DecPrefix::Unit => "",
            DecPrefix::Kilo => "k",
            DecPrefix::Mega => "M",
            DecPrefix::Giga => "G",
            DecPrefix::Tera => "T",
            DecPrefix::Peta => "P",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DecPrefix::Unit => "",
            DecPrefix::Kilo => "kilo",
            DecPrefix::Mega => "mega",
            DecPrefix::Giga => "giga",
            DecPrefix::Tera => "tera",
            DecPrefix::Peta => "peta",
        }
    }
}

impl Display for DecPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix(Notation::Unicode))
    }
}
