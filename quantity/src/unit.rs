/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::dimension::Dimension;
use super::error::UnitError;
use super::factor::Factor;
use super::family::{
    AmountUnit, AreaUnit, CurrentUnit, DataRateUnit, DimensionlessUnit,
    EnergyUnit, ForceUnit, FrequencyUnit, InformationUnit, LengthUnit,
    LuminousUnit, MassUnit, PowerUnit, PressureUnit, SpeedUnit,
    TemperatureUnit, TimeUnit, UnitFamily, VolumeUnit,
};
use super::formula::DimensionalFormula;
use super::system::{Notation, UnitSystem};

/// Every unit known to the crate, grouped by family.
///
/// The enum is `Copy` and compares by identity. `Coherent` stands for
/// the coherent SI unit of an arbitrary formula (e.g. `kg⋅m/s²` before
/// it is recognized as a newton); it always converts with the
/// identity rule.
#[derive(PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub enum Unit {
    Length(LengthUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Mass(MassUnit),
    Time(TimeUnit),
    Temperature(TemperatureUnit),
    ElectricCurrent(CurrentUnit),
    AmountOfSubstance(AmountUnit),
    LuminousIntensity(LuminousUnit),
    Frequency(FrequencyUnit),
    Speed(SpeedUnit),
    Force(ForceUnit),
    Energy(EnergyUnit),
    Power(PowerUnit),
    Pressure(PressureUnit),
    Information(InformationUnit),
    DataRate(DataRateUnit),
    Dimensionless(DimensionlessUnit),
    Coherent(DimensionalFormula),
}

pub const NEUTRAL_UNIT: Unit = Unit::Dimensionless(DimensionlessUnit::BASE);

/* Dispatch a family method over every family variant. */
macro_rules! with_family {
    (
        $unit:expr,
        $u:ident => $family:expr,
        $formula:ident => $coherent:expr
    ) => {
        match $unit {
            Unit::Length($u) => $family,
            Unit::Area($u) => $family,
            Unit::Volume($u) => $family,
            Unit::Mass($u) => $family,
            Unit::Time($u) => $family,
            Unit::Temperature($u) => $family,
            Unit::ElectricCurrent($u) => $family,
            Unit::AmountOfSubstance($u) => $family,
            Unit::LuminousIntensity($u) => $family,
            Unit::Frequency($u) => $family,
            Unit::Speed($u) => $family,
            Unit::Force($u) => $family,
            Unit::Energy($u) => $family,
            Unit::Power($u) => $family,
            Unit::Pressure($u) => $family,
            Unit::Information($u) => $family,
            Unit::DataRate($u) => $family,
            Unit::Dimensionless($u) => $family,
            Unit::Coherent($formula) => $coherent,
        }
    };
}

fn family_dimension<U: UnitFamily>(_: &U) -> Dimension {
    U::DIMENSION
}

fn family_is_base<U: UnitFamily>(unit: &U) -> bool {
    *unit == U::BASE
}

fn family_units<U: UnitFamily>(
    wrap: fn(U) -> Unit,
) -> impl Iterator<Item = Unit> {
    U::all().into_iter().map(wrap)
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        with_family!(self, u => family_dimension(u),
                     formula => Dimension::from_formula(*formula))
    }

    pub fn formula(&self) -> DimensionalFormula {
        self.dimension().formula()
    }

    pub fn symbol(&self, notation: Notation) -> String {
        let ascii = notation == Notation::Ascii;
        with_family!(self, u => u.symbol(notation),
                     formula => formula.unit_symbol(ascii))
    }

    pub fn name(&self) -> String {
        with_family!(self, u => u.name(),
                     formula => format!("coherent unit of {}", formula))
    }

    pub fn system(&self) -> UnitSystem {
        with_family!(self, u => u.system(), _formula => UnitSystem::Metric)
    }

    /// Exact factor to the family's base unit.
    pub fn factor(&self) -> Factor {
        with_family!(self, u => u.factor(), _formula => Factor::one())
    }

    /// Exact offset to the family's base unit.
    pub fn offset(&self) -> Factor {
        with_family!(self, u => u.offset(), _formula => Factor::zero())
    }

    /// Whether this is the base unit of its family.
    pub fn is_family_base(&self) -> bool {
        with_family!(self, u => family_is_base(u), _formula => true)
    }

    /// The coherent SI unit of this unit's dimension.
    pub fn coherent(&self) -> Self {
        Unit::Coherent(self.formula())
    }

    /// Every catalog unit, family by family.
    pub fn all() -> Vec<Self> {
        std::iter::empty()
            .chain(family_units(Unit::Length))
            .chain(family_units(Unit::Area))
            .chain(family_units(Unit::Volume))
            .chain(family_units(Unit::Mass))
            .chain(family_units(Unit::Time))
            .chain(family_units(Unit::Temperature))
            .chain(family_units(Unit::ElectricCurrent))
            .chain(family_units(Unit::AmountOfSubstance))
            .chain(family_units(Unit::LuminousIntensity))
            .chain(family_units(Unit::Frequency))
            .chain(family_units(Unit::Speed))
            .chain(family_units(Unit::Force))
            .chain(family_units(Unit::Energy))
            .chain(family_units(Unit::Power))
            .chain(family_units(Unit::Pressure))
            .chain(family_units(Unit::Information))
            .chain(family_units(Unit::DataRate))
            .chain(family_units(Unit::Dimensionless))
            .collect()
    }

    /// Exact symbol lookup in either notation, falling back to the
    /// rendering of a coherent unit (`kg⋅m/s²`, `kg*m/s^2`). This is
    /// not a parser: `"km"` resolves, `"km*h"` does not.
    pub fn from_symbol(symbol: &str) -> Result<Self, UnitError> {
        let symbol = symbol.trim();
        Self::all()
            .into_iter()
            .find(|u| {
                u.symbol(Notation::Unicode) == symbol
                    || u.symbol(Notation::Ascii) == symbol
            })
            .or_else(|| {
                DimensionalFormula::from_unit_symbol(symbol)
                    .map(Unit::Coherent)
            })
            .ok_or_else(|| UnitError::UnknownSymbol(symbol.to_string()))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(Notation::Unicode))
    }
}

impl FromStr for Unit {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_symbol(s)
    }
}

impl From<Unit> for String {
    fn from(val: Unit) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;
    fn try_from(val: String) -> std::result::Result<Self, Self::Error> {
        Self::from_symbol(&val)
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for Unit {
    fn schema_name() -> String {
        String::from("Unit")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
