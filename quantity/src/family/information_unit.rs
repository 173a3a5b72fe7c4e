/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::UnitFamily;
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{BinPrefix, DecPrefix, Prefix};
use crate::system::{Notation, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/* Decimal and IEC binary multiples of the byte are kept apart, so
 * that "kB" always means 1000 bytes and "KiB" 1024. */
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
pub enum InformationUnit {
    Bit(DecPrefix),
    Byte(DecPrefix),
    BinaryByte(BinPrefix),
}

impl UnitFamily for InformationUnit {
    const DIMENSION: Dimension = Dimension::DigitalVolume;
    const BASE: Self = InformationUnit::Byte(DecPrefix::Unit);

    fn all() -> Vec<Self> {
        let bits = DecPrefix::SCALE.iter().map(|p| Self::Bit(*p));
        let bytes = DecPrefix::SCALE.iter().map(|p| Self::Byte(*p));
        let binary = BinPrefix::SCALE.iter().map(|p| Self::BinaryByte(*p));
        bits.chain(bytes).chain(binary).collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            InformationUnit::Bit(p) => format!("{}b", p.prefix(notation)),
            InformationUnit::Byte(p) => format!("{}B", p.prefix(notation)),
            InformationUnit::BinaryByte(p) => {
                format!("{}B", p.prefix(notation))
            }
        }
    }

    fn name(&self) -> String {
        match self {
            InformationUnit::Bit(p) => format!("{}bit", p.name()),
            InformationUnit::Byte(p) => format!("{}byte", p.name()),
            InformationUnit::BinaryByte(p) => format!("{}byte", p.name()),
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Digital
    }

    fn factor(&self) -> Factor {
        match self {
            InformationUnit::Bit(p) => p.factor() * Factor::ratio(1, 8),
            InformationUnit::Byte(p) => p.factor(),
            InformationUnit::BinaryByte(p) => p.factor(),
        }
    }
}

impl Display for InformationUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
