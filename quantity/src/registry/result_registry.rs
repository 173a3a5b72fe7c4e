/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::{ConversionFactorRegistry, GlobalSlot};
use crate::catalog;
use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::formula::DimensionalFormula;
use crate::quantity::QuantityType;
use crate::system::UnitSystem;
use crate::unit::Unit;

lazy_static! {
    static ref DEFAULT_RESULT_TYPES: GlobalSlot<ResultTypeRegistry> =
        GlobalSlot::new();
}

/// Unit and quantity type of an arithmetic result.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResultType {
    pub unit: Unit,
    pub quantity_type: QuantityType,
}

/// Concrete result types for formulas produced by cross-dimension
/// arithmetic, keyed by formula and unit system.
#[derive(Clone, Debug, Default)]
pub struct ResultTypeRegistry {
    types: BTreeMap<(DimensionalFormula, UnitSystem), ResultType>,
}

impl ResultTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        formula: DimensionalFormula,
        system: UnitSystem,
        unit: Unit,
        quantity_type: QuantityType,
    ) -> Result<(), UnitError> {
        if unit.formula() != formula {
            return Err(UnitError::IncompatibleDimensions(
                Dimension::from_formula(formula),
                unit.dimension(),
            ));
        }
        if !quantity_type.accepts(unit) {
            return Err(UnitError::InvalidUnit(quantity_type.name(), unit));
        }
        self.types.insert(
            (formula, system),
            ResultType {
                unit,
                quantity_type,
            },
        );
        Ok(())
    }

    /// Registered type for the system, else the metric one.
    pub fn lookup(
        &self,
        formula: DimensionalFormula,
        system: UnitSystem,
    ) -> Option<ResultType> {
        self.types
            .get(&(formula, system))
            .or_else(|| self.types.get(&(formula, UnitSystem::Metric)))
            .copied()
    }

    /// Like `lookup`, falling back to a generic quantity in the base
    /// unit of the formula.
    pub fn resolve(
        &self,
        formula: DimensionalFormula,
        system: UnitSystem,
        conversions: &ConversionFactorRegistry,
    ) -> ResultType {
        self.lookup(formula, system).unwrap_or_else(|| {
            let unit =
                conversions.get_base_unit(Dimension::from_formula(formula));
            log::trace!("no result type for {}; using {}", formula, unit);
            ResultType {
                unit,
                quantity_type: QuantityType::Generic(formula),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn global() -> Result<Arc<Self>, UnitError> {
        DEFAULT_RESULT_TYPES.get_or_try_init(catalog::default_result_types)
    }

    pub fn set_global(registry: Arc<Self>) {
        DEFAULT_RESULT_TYPES.set(registry)
    }

    pub fn reset() {
        DEFAULT_RESULT_TYPES.clear()
    }
}
