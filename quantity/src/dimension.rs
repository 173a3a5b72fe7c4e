/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::formula::DimensionalFormula as F;

/// Physical quantity kinds. Conversion is possible only between
/// units of compatible dimension, i.e. with equal formulas.
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
#[cfg_attr(feature = "serialize_as_string", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /* SI base dimensions. */
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,

    /* SI derived dimensions. */
    Area,
    Volume,
    Speed,
    Acceleration,
    Frequency,
    Force,
    Energy,
    Power,
    Pressure,

    /* Information. */
    DigitalVolume,
    DataRate,

    Dimensionless,

    /* Any other combination of base dimensions. */
    Derived(F),
}

pub(crate) static DIMENSIONS: [Dimension; 19] = [
    Dimension::Length,
    Dimension::Mass,
    Dimension::Time,
    Dimension::ElectricCurrent,
    Dimension::Temperature,
    Dimension::AmountOfSubstance,
    Dimension::LuminousIntensity,
    Dimension::Area,
    Dimension::Volume,
    Dimension::Speed,
    Dimension::Acceleration,
    Dimension::Frequency,
    Dimension::Force,
    Dimension::Energy,
    Dimension::Power,
    Dimension::Pressure,
    Dimension::DigitalVolume,
    Dimension::DataRate,
    Dimension::Dimensionless,
];

impl Dimension {
    /// The named dimensions.
    pub const LIST: &'static [Self] = &DIMENSIONS;

    pub const fn formula(&self) -> F {
        match self {
            Dimension::Length => F::LENGTH,
            Dimension::Mass => F::MASS,
            Dimension::Time => F::TIME,
            Dimension::ElectricCurrent => F::ELECTRIC_CURRENT,
            Dimension::Temperature => F::TEMPERATURE,
            Dimension::AmountOfSubstance => F::AMOUNT_OF_SUBSTANCE,
            Dimension::LuminousIntensity => F::LUMINOUS_INTENSITY,
            Dimension::Area => F::LENGTH.power(2),
            Dimension::Volume => F::LENGTH.power(3),
            Dimension::Speed => F::LENGTH.divide(F::TIME),
            Dimension::Acceleration => F::LENGTH.divide(F::TIME.power(2)),
            Dimension::Frequency => F::TIME.power(-1),
            Dimension::Force => {
                F::MASS.multiply(F::LENGTH).divide(F::TIME.power(2))
            }
            Dimension::Energy => F::MASS
                .multiply(F::LENGTH.power(2))
                .divide(F::TIME.power(2)),
            Dimension::Power => F::MASS
                .multiply(F::LENGTH.power(2))
                .divide(F::TIME.power(3)),
            Dimension::Pressure => {
                F::MASS.divide(F::LENGTH).divide(F::TIME.power(2))
            }
            Dimension::DigitalVolume => F::DIGITAL,
            Dimension::DataRate => F::DIGITAL.divide(F::TIME),
            Dimension::Dimensionless => F::DIMENSIONLESS,
            Dimension::Derived(formula) => *formula,
        }
    }

    /// The named dimension with this formula, if any.
    pub fn from_formula(formula: F) -> Self {
        Self::LIST
            .iter()
            .find(|d| d.formula() == formula)
            .copied()
            .unwrap_or(Dimension::Derived(formula))
    }

    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.formula() == other.formula()
    }

    pub fn name(&self) -> String {
        match self {
            Dimension::Length => "length".to_string(),
            Dimension::Mass => "mass".to_string(),
            Dimension::Time => "time".to_string(),
            Dimension::ElectricCurrent => "electric current".to_string(),
            Dimension::Temperature => "temperature".to_string(),
            Dimension::AmountOfSubstance => "amount of substance".to_string(),
            Dimension::LuminousIntensity => "luminous intensity".to_string(),
            Dimension::Area => "area".to_string(),
            Dimension::Volume => "volume".to_string(),
            Dimension::Speed => "speed".to_string(),
            Dimension::Acceleration => "acceleration".to_string(),
            Dimension::Frequency => "frequency".to_string(),
            Dimension::Force => "force".to_string(),
            Dimension::Energy => "energy".to_string(),
            Dimension::Power => "power".to_string(),
            Dimension::Pressure => "pressure".to_string(),
            Dimension::DigitalVolume => "digital volume".to_string(),
            Dimension::DataRate => "data rate".to_string(),
            Dimension::Dimensionless => "dimensionless".to_string(),
            Dimension::Derived(formula) => formula.to_string(),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}
