/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::{InformationUnit, TimeUnit, UnitFamily};
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::prefix::{DecPrefix, FracPrefix};
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
pub enum DataRateUnit {
    Per(InformationUnit, TimeUnit),
}

impl UnitFamily for DataRateUnit {
    const DIMENSION: Dimension = Dimension::DataRate;
    const BASE: Self = DataRateUnit::Per(
        InformationUnit::Byte(DecPrefix::Unit),
        TimeUnit::Second(FracPrefix::Unit),
    );

    fn all() -> Vec<Self> {
        let second = TimeUnit::Second(FracPrefix::Unit);
        InformationUnit::all()
            .into_iter()
            .map(|i| Self::Per(i, second))
            .collect()
    }

    fn symbol(&self, notation: Notation) -> String {
        match self {
            DataRateUnit::Per(i, t) => {
                format!("{}/{}", i.symbol(notation), t.symbol(notation))
            }
        }
    }

    fn name(&self) -> String {
        match self {
            DataRateUnit::Per(i, t) => {
                format!("{} per {}", i.name(), t.name())
            }
        }
    }

    fn system(&self) -> UnitSystem {
        UnitSystem::Digital
    }

    fn factor(&self) -> Factor {
        match self {
            DataRateUnit::Per(i, t) => i.factor() / t.factor(),
        }
    }
}

impl Display for DataRateUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
