/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dimension::Dimension;
use super::error::UnitError;
use super::formula::DimensionalFormula;
use super::numeric::NumericValue;
use super::quantity_as_object;
use super::system::UnitSystem;
use super::unit::Unit;

/// An immutable value in a unit. Every operation returns a new
/// quantity.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Quantity {
    value: NumericValue,
    unit: Unit,
}

impl Quantity {
    /// An untyped quantity; use a `QuantityType` for validation.
    pub fn new(value: NumericValue, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn value(&self) -> &NumericValue {
        &self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn into_parts(self) -> (NumericValue, Unit) {
        (self.value, self.unit)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let symbol = self.unit.to_string();
        match symbol.is_empty() {
            true => write!(f, "{}", self.value),
            false => write!(f, "{} {}", self.value, symbol),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        quantity_as_object::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        quantity_as_object::deserialize(deserializer)
    }
}

/// Minimal `{value, unit}` capability shared by `Quantity` and the
/// typed wrappers.
pub trait Measure {
    fn value(&self) -> &NumericValue;
    fn unit(&self) -> Unit;

    fn dimension(&self) -> Dimension {
        self.unit().dimension()
    }

    fn formula(&self) -> DimensionalFormula {
        self.unit().formula()
    }

    fn system(&self) -> UnitSystem {
        self.unit().system()
    }

    fn to_quantity(&self) -> Quantity {
        Quantity::new(self.value().clone(), self.unit())
    }
}

impl Measure for Quantity {
    fn value(&self) -> &NumericValue {
        &self.value
    }

    fn unit(&self) -> Unit {
        self.unit
    }
}

/// Factory for quantities of one kind: either a named dimension
/// (`Length`, `Area`, ...) or a generic quantity carrying any formula.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum QuantityType {
    Named(Dimension),
    Generic(DimensionalFormula),
}

impl QuantityType {
    /// The named type for a formula when one exists, the generic one
    /// otherwise.
    pub fn for_formula(formula: DimensionalFormula) -> Self {
        match Dimension::from_formula(formula) {
            Dimension::Derived(formula) => QuantityType::Generic(formula),
            dimension => QuantityType::Named(dimension),
        }
    }

    pub fn for_unit(unit: Unit) -> Self {
        Self::for_formula(unit.formula())
    }

    pub fn formula(&self) -> DimensionalFormula {
        match self {
            QuantityType::Named(dimension) => dimension.formula(),
            QuantityType::Generic(formula) => *formula,
        }
    }

    pub fn accepts(&self, unit: Unit) -> bool {
        match self {
            QuantityType::Named(dimension) => unit.dimension() == *dimension,
            QuantityType::Generic(formula) => unit.formula() == *formula,
        }
    }

    /// Builds a quantity, failing `InvalidUnit` when the unit belongs
    /// to another dimension.
    pub fn of(
        &self,
        value: NumericValue,
        unit: Unit,
    ) -> Result<Quantity, UnitError> {
        match self.accepts(unit) {
            true => Ok(Quantity::new(value, unit)),
            false => Err(UnitError::InvalidUnit(self.name(), unit)),
        }
    }

    /// Rebuilds a typed quantity from an arithmetic or conversion
    /// result.
    pub fn from(&self, quantity: Quantity) -> Result<Quantity, UnitError> {
        let (value, unit) = quantity.into_parts();
        self.of(value, unit)
    }

    pub fn name(&self) -> String {
        match self {
            QuantityType::Named(dimension) => dimension.name(),
            QuantityType::Generic(formula) => format!("quantity {}", formula),
        }
    }
}

impl Display for QuantityType {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}
