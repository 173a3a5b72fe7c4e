/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{ForceUnit, LengthUnit, UnitFamily};
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
pub enum PressureUnit {
    Pascal(SiPrefix),
    Bar(SiPrefix),
    Atmosphere,
    PoundPerSquareInch,
}

impl UnitFamily for PressureUnit {
    const DIMENSION: Dimension = Dimension::Pressure;
    const BASE: Self = PressureUnit::Pascal(SiPrefix::Unit);

    fn all() -> Vec<Self> {
        SiPrefix::SCALE
            .iter()
            .map(|p| Self::Pascal(*p))
            .chain([Self::Bar(SiPrefix::Milli), Self::Bar(SiPrefix::Unit)])
            .chain([Self::Atmosphere, Self::PoundPerSquareInch])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            PressureUnit::Pascal(p) => format!("{}Pa", p.prefix(notation)),
            PressureUnit::Bar(p) => format!("{}bar", p.prefix(notation)),
            PressureUnit::Atmosphere => "atm".to_string(),
            PressureUnit::PoundPerSquareInch => "psi".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            PressureUnit::Pascal(p) => format!("{}pascal", p.name()),
            PressureUnit::Bar(p) => format!("{}bar", p.name()),
            PressureUnit::Atmosphere => "standard atmosphere".to_string(),
            PressureUnit::PoundPerSquareInch => {
                "pound per square inch".to_string()
            }
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            PressureUnit::PoundPerSquareInch => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            PressureUnit::Pascal(p) => p.factor(),
            PressureUnit::Bar(p) => p.factor() * Factor::integer(100000),
            PressureUnit::Atmosphere => Factor::integer(101325),
            PressureUnit::PoundPerSquareInch => {
                ForceUnit::PoundForce.factor()
                    / LengthUnit::Inch.factor().powi(2)
            }
        }
    }
}

impl Display for PressureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
