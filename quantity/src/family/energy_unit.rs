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
pub enum EnergyUnit {
    Joule(SiPrefix),
    WattHour(SiPrefix),
    Calorie(SiPrefix),
    BritishThermalUnit,
}

impl UnitFamily for EnergyUnit {
    const DIMENSION: Dimension = Dimension::Energy;
    const BASE: Self = EnergyUnit::Joule(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        let scaled = [
            SiPrefix::Unit,
            SiPrefix::Kilo,
            SiPrefix::Mega,
            SiPrefix::Giga,
            SiPrefix::Tera,
        ];
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Joule(*p))
            .chain(scaled.into_iter().map(Self::WattHour))
            .chain([SiPrefix::Unit, SiPrefix::Kilo].map(Self::Calorie))
            .chain([Self::BritishThermalUnit])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            EnergyUnit::Joule(p) => format!("{}J", p.prefix(notation)),
            EnergyUnit::WattHour(p) => format!("{}Wh", p.prefix(notation)),
            EnergyUnit::Calorie(p) => format!("{}cal", p.prefix(notation)),
            EnergyUnit::BritishThermalUnit => "BTU".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            EnergyUnit::Joule(p) => format!("{}joule", p.name()),
            EnergyUnit::WattHour(p) => format!("{}watt-hour", p.name()),
            EnergyUnit::Calorie(p) => format!("{}calorie", p.name()),
            EnergyUnit::BritishThermalUnit => {
                "british thermal unit".to_string()
            }
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            EnergyUnit::BritishThermalUnit => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            EnergyUnit::Joule(p) => p.factor(),
            EnergyUnit::WattHour(p) => p.factor() * Factor::integer(3600),
            /* Thermochemical calorie. */
            EnergyUnit::Calorie(p) => p.factor() * Factor::ratio(4184, 1000),
            EnergyUnit::BritishThermalUnit => {
                Factor::ratio(105505585262, 100000000)
            }
        }
    }
}

impl Display for EnergyUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
