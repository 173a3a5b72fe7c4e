/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::UnitFamily;
use crate::dimension::Dimension;
use crate::factor::Factor;
use crate::system::{Notation, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Absolute temperature scales. Celsius and Fahrenheit carry an offset,
/// so their conversion rules are affine rather than multiplicative.
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
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl UnitFamily for TemperatureUnit {
    const DIMENSION: Dimension = Dimension::Temperature;
    const BASE: Self = TemperatureUnit::Kelvin;

    fn all() -> Vec<Self> {
        vec![Self::Kelvin, Self::Celsius, Self::Fahrenheit, Self::Rankine]
    }

    fn symbol(&self, notation: Notation) -> String {
        match (self, notation) {
            (TemperatureUnit::Kelvin, _) => "K".to_string(),
            (TemperatureUnit::Celsius, Notation::Unicode) => "°C".to_string(),
            (TemperatureUnit::Celsius, Notation::Ascii) => "degC".to_string(),
            (TemperatureUnit::Fahrenheit, Notation::Unicode) => {
                "°F".to_string()
            }
            (TemperatureUnit::Fahrenheit, Notation::Ascii) => {
                "degF".to_string()
            }
            (TemperatureUnit::Rankine, Notation::Unicode) => "°R".to_string(),
            (TemperatureUnit::Rankine, Notation::Ascii) => "degR".to_string(),
        }
    }

    fn name(&self) -> String {
        match self {
            TemperatureUnit::Kelvin => "kelvin".to_string(),
            TemperatureUnit::Celsius => "degree Celsius".to_string(),
            TemperatureUnit::Fahrenheit => "degree Fahrenheit".to_string(),
            TemperatureUnit::Rankine => "degree Rankine".to_string(),
        }
    }

    fn system(&self) -> UnitSystem {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => {
                UnitSystem::Metric
            }
            TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => {
                UnitSystem::UsCustomary
            }
        }
    }

    fn factor(&self) -> Factor {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => Factor::one(),
            TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => {
                Factor::ratio(5, 9)
            }
        }
    }

    fn offset(&self) -> Factor {
        match self {
            TemperatureUnit::Celsius => Factor::ratio(27315, 100),
            /* 459.67 °R at 0 °F */
            TemperatureUnit::Fahrenheit => {
                Factor::ratio(45967, 100) * Factor::ratio(5, 9)
            }
            TemperatureUnit::Kelvin | TemperatureUnit::Rankine => {
                Factor::zero()
            }
        }
    }
}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}
