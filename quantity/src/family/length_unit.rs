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
pub enum LengthUnit {
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
}

impl LengthUnit {
    /// The lengths that area, volume and speed units are built from.
    pub const COMMON: [LengthUnit; 8] = [
        LengthUnit::Meter(SiPrefix::Milli),
        LengthUnit::Meter(SiPrefix::Centi),
        LengthUnit::Meter(SiPrefix::Unit),
        LengthUnit::Meter(SiPrefix::Kilo),
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];
}

impl UnitFamily for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;
    const BASE: Self = LengthUnit::Meter(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Meter(*p))
            .chain([
                Self::Inch,
                Self::Foot,
                Self::Yard,
                Self::Mile,
                Self::NauticalMile,
            ])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            LengthUnit::Meter(p) => format!("{}m", p.prefix(notation)),
            LengthUnit::Inch => "in".to_string(),
            LengthUnit::Foot => "ft".to_string(),
            LengthUnit::Yard => "yd".to_string(),
            LengthUnit::Mile => "mi".to_string(),
            LengthUnit::NauticalMile => "nmi".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            LengthUnit::Meter(p) => format!("{}meter", p.name()),
            LengthUnit::Inch => "inch".to_string(),
            LengthUnit::Foot => "foot".to_string(),
            LengthUnit::Yard => "yard".to_string(),
            LengthUnit::Mile => "mile".to_string(),
            LengthUnit::NauticalMile => "nautical mile".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            LengthUnit::Meter(_) | LengthUnit::NauticalMile => {
                UnitSystem::Metric
            }
            _ => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            LengthUnit::Meter(p) => p.factor(),
            LengthUnit::Inch => Factor::ratio(254, 10000),
            LengthUnit::Foot => Factor::ratio(3048, 10000),
            LengthUnit::Yard => Factor::ratio(9144, 10000),
            LengthUnit::Mile => Factor::ratio(1609344, 1000),
            LengthUnit::NauticalMile => Factor::integer(1852),
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
