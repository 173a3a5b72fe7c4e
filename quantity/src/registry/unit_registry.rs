/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::GlobalSlot;
use crate::catalog;
use crate::error::UnitError;
use crate::quantity::QuantityType;
use crate::unit::Unit;

lazy_static! {
    static ref DEFAULT_UNITS: GlobalSlot<UnitRegistry> = GlobalSlot::new();
}

/// Unit to the quantity type that constructs values in it.
#[derive(Clone, Debug, Default)]
pub struct UnitRegistry {
    types: BTreeMap<Unit, QuantityType>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        unit: Unit,
        quantity_type: QuantityType,
    ) -> Result<(), UnitError> {
        if !quantity_type.accepts(unit) {
            return Err(UnitError::InvalidUnit(quantity_type.name(), unit));
        }
        self.types.insert(unit, quantity_type);
        Ok(())
    }

    pub fn has(&self, unit: Unit) -> bool {
        self.types.contains_key(&unit)
    }

    /// The registered type; coherent units get the type of their
    /// formula.
    pub fn get_quantity_type(
        &self,
        unit: Unit,
    ) -> Result<QuantityType, UnitError> {
        match (self.types.get(&unit), unit) {
            (Some(quantity_type), _) => Ok(*quantity_type),
            (None, Unit::Coherent(formula)) => {
                Ok(QuantityType::for_formula(formula))
            }
            (None, _) => Err(UnitError::UnregisteredUnit(unit)),
        }
    }

    /// Registered units, in `Unit` order.
    pub fn units(&self) -> impl Iterator<Item = Unit> + '_ {
        self.types.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn global() -> Result<Arc<Self>, UnitError> {
        DEFAULT_UNITS.get_or_try_init(catalog::default_units)
    }

    pub fn set_global(registry: Arc<Self>) {
        DEFAULT_UNITS.set(registry)
    }

    pub fn reset() {
        DEFAULT_UNITS.clear()
    }
}
