/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{LengthUnit, UnitFamily};
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
pub enum VolumeUnit {
    Cubic(LengthUnit),
    Liter(SiPrefix),
    UsGallon,
    ImperialGallon,
}

impl UnitFamily for VolumeUnit {
    const DIMENSION: Dimension = Dimension::Volume;
    const BASE: Self = VolumeUnit::Cubic(LengthUnit::Meter(SiPrefix::Unit));

    fn all() -> Vec<Self> {
        LengthUnit::COMMON
            .into_iter()
            .map(Self::Cubic)
            .chain(
                [SiPrefix::Milli, SiPrefix::Centi, SiPrefix::Deci]
                    .into_iter()
                    .chain([SiPrefix::Unit, SiPrefix::Hecto])
                    .map(Self::Liter),
            )
            .chain([Self::UsGallon, Self::ImperialGallon])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match (self, notation) {
            (VolumeUnit::Cubic(l), Notation::Unicode) => {
                format!("{}³", l.symbol(notation))
            }
            (VolumeUnit::Cubic(l), Notation::Ascii) => {
                format!("{}^3", l.symbol(notation))
            }
            (VolumeUnit::Liter(p), _) => format!("{}L", p.prefix(notation)),
            (VolumeUnit::UsGallon, _) => "gal".to_string(),
            (VolumeUnit::ImperialGallon, _) => "gal (imp)".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            VolumeUnit::Cubic(l) => format!("cubic {}", l.name()),
            VolumeUnit::Liter(p) => format!("{}liter", p.name()),
            VolumeUnit::UsGallon => "US gallon".to_string(),
            VolumeUnit::ImperialGallon => "imperial gallon".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            VolumeUnit::Cubic(l) => l.system(),
            VolumeUnit::Liter(_) => UnitSystem::Metric,
            VolumeUnit::UsGallon => UnitSystem::UsCustomary,
            VolumeUnit::ImperialGallon => UnitSystem::Imperial,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            VolumeUnit::Cubic(l) => l.factor().powi(3),
            VolumeUnit::Liter(p) => p.factor() * Factor::ratio(1, 1000),
            /* 231 cubic inches */
            VolumeUnit::UsGallon => {
                Factor::integer(231) * LengthUnit::Inch.factor().powi(3)
            }
            VolumeUnit::ImperialGallon => Factor::ratio(454609, 100000000),
        }
    }
}

impl Display for VolumeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
