/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{LengthUnit, UnitFamily};
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::SiPrefix;
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
pub enum AreaUnit {
    Square(LengthUnit),
    Hectare,
    Acre,
}

impl UnitFamily for AreaUnit {
    const DIMENSION: Dimension = Dimension::Area;
    const BASE: Self = AreaUnit::Square(LengthUnit::Meter(SiPrefix::Unit));

    fn all() -> Vec<Self> {
        LengthUnit::COMMON
            .into_iter()
            .map(Self::Square)
            .chain([Self::Hectare, Self::Acre])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match (self, notation) {
            (AreaUnit::Square(l), Notation::Unicode) => {
                format!("{}²", l.symbol(notation))
            }
            (AreaUnit::Square(l), Notation::Ascii) => {
                format!("{}^2", l.symbol(notation))
            }
            (AreaUnit::Hectare, _) => "ha".to_string(),
            (AreaUnit::Acre, _) => "ac".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            AreaUnit::Square(l) => format!("square {}", l.name()),
            AreaUnit::Hectare => "hectare".to_string(),
            AreaUnit::Acre => "acre".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            AreaUnit::Square(l) => l.system(),
            AreaUnit::Hectare => UnitSystem::Metric,
            AreaUnit::Acre => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            AreaUnit::Square(l) => l.factor().powi(2),
            AreaUnit::Hectare => Factor::integer(10000),
            /* 4840 square yards */
            AreaUnit::Acre => {
                Factor::integer(4840) * LengthUnit::Yard.factor().powi(2)
            }
        }
    }
}

impl Display for AreaUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
