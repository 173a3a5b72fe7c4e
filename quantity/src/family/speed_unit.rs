/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{LengthUnit, TimeUnit, UnitFamily};
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{FracPrefix, SiPrefix};
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
pub enum SpeedUnit {
    Per(LengthUnit, TimeUnit),
    Knot,
}

impl UnitFamily for SpeedUnit {
    const DIMENSION: Dimension = Dimension::Speed;
    const BASE: Self = SpeedUnit::Per(
        LengthUnit::Meter(SiPrefix::Unit),
        TimeUnit::Second(FracPrefix::Unit),
    );

    fn all() -> Vec<Self> {
        let times = [
            TimeUnit::Second(FracPrefix::Unit),
            TimeUnit::Minute,
            TimeUnit::Hour,
        ];
        LengthUnit::COMMON
            .iter()
            .flat_map(|l| times.iter().map(|t| Self::Per(*l, *t)))
            .chain([Self::Knot])
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            SpeedUnit::Per(l, t) => {
                format!("{}/{}", l.symbol(notation), t.symbol(notation))
            }
            SpeedUnit::Knot => "kn".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            SpeedUnit::Per(l, t) => format!("{} per {}", l.name(), t.name()),
            SpeedUnit::Knot => "knot".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            SpeedUnit::Per(l, _) => l.system(),
            SpeedUnit::Knot => UnitSystem::Metric,
        }
    }

    fn factor(&self) -> Factor {
        match self {
            SpeedUnit::Per(l, t) => l.factor() / t.factor(),
            SpeedUnit::Knot => {
                LengthUnit::NauticalMile.factor() / TimeUnit::Hour.factor()
            }
        }
    }
}

impl Display for SpeedUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
