/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use crate::system::Notation;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// IEC binary (base 1024) multiples. There is no unit prefix: the
/// plain byte is spelled with `DecPrefix::Unit`.
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
pub enum BinPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
}

impl Prefix for BinPrefix {
    const BASE: u64 = 1024;
    const SCALE: &'static [Self] = &[
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
    ];

    fn power(&self) -> i64 {
        match self {
            BinPrefix::Kibi => 1,
            BinPrefix::Mebi => 2,
            BinPrefix::Gibi => 3,
            BinPrefix::Tebi => 4,
            BinPrefix::Pebi => 5,
        }
    }

    fn prefix(&self, _notation: Notation) -> &'static str {
        match self {
            BinPrefix::Kibi => "Ki",
            BinPrefix::Mebi => "Mi",
            BinPrefix::Gibi => "Gi",
            BinPrefix::Tebi => "Ti",
            BinPrefix::Pebi => "Pi",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BinPrefix::Kibi => "kibi",
            BinPrefix::Mebi => "mebi",
            BinPrefix::Gibi => "gibi",
            BinPrefix::Tebi => "tebi",
            BinPrefix::Pebi => "pebi",
        }
    }
}

impl Display for BinPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix(Notation::Unicode))
    }
}
