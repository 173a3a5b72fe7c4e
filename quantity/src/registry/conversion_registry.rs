/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::GlobalSlot;
use crate::catalog;
use crate::config::DEFAULT_RULE_SCALE;
use crate::conversion::ConversionRule;
use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::formula::DimensionalFormula;
use crate::numeric::{Backend, BackendFactory, RoundingMode};
use crate::unit::Unit;

lazy_static! {
    static ref DEFAULT_CONVERSIONS: GlobalSlot<ConversionFactorRegistry> =
        GlobalSlot::new();
}

/// Unit to conversion rule, plus the base unit of every dimension.
///
/// A rule with factor 1 and offset 0 makes its unit the base unit of
/// the unit's dimension; a second such unit for the same dimension is
/// rejected. Coherent units are implicitly registered with the
/// identity rule.
#[derive(Clone, Debug)]
pub struct ConversionFactorRegistry {
    identity: ConversionRule,
    rules: BTreeMap<Unit, ConversionRule>,
    base_units: BTreeMap<DimensionalFormula, Unit>,
}

impl ConversionFactorRegistry {
    pub fn new(backend: &Backend) -> Self {
        ConversionFactorRegistry {
            identity: ConversionRule::identity(backend),
            rules: BTreeMap::new(),
            base_units: BTreeMap::new(),
        }
    }

    pub fn backend(&self) -> &Backend {
        self.identity.factor().backend()
    }

    pub fn register(
        &mut self,
        unit: Unit,
        rule: ConversionRule,
    ) -> Result<(), UnitError> {
        let formula = unit.formula();
        match rule.is_identity() {
            true => match self.base_units.get(&formula) {
                Some(base) if *base != unit => {
                    return Err(UnitError::DuplicateBaseUnit(
                        formula, *base, unit,
                    ))
                }
                _ => {
                    self.base_units.insert(formula, unit);
                }
            },
            false => {
                if self.base_units.get(&formula) == Some(&unit) {
                    self.base_units.remove(&formula);
                }
            }
        }
        log::trace!("registered conversion rule for {}: {}", unit, rule);
        self.rules.insert(unit, rule);
        Ok(())
    }

    pub fn has(&self, unit: Unit) -> bool {
        self.rules.contains_key(&unit) || matches!(unit, Unit::Coherent(_))
    }

    pub fn get_rule(&self, unit: Unit) -> Result<&ConversionRule, UnitError> {
        match (self.rules.get(&unit), unit) {
            (Some(rule), _) => Ok(rule),
            (None, Unit::Coherent(_)) => Ok(&self.identity),
            (None, _) => Err(UnitError::UnregisteredUnit(unit)),
        }
    }

    /// The registered base unit, or the coherent unit when the
    /// dimension has none.
    pub fn get_base_unit(&self, dimension: Dimension) -> Unit {
        let formula = dimension.formula();
        self.base_units
            .get(&formula)
            .copied()
            .unwrap_or(Unit::Coherent(formula))
    }

    pub fn units(&self) -> impl Iterator<Item = Unit> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The process-wide default, built from the catalog on first use.
    pub fn global() -> Result<Arc<Self>, UnitError> {
        DEFAULT_CONVERSIONS.get_or_try_init(|| {
            catalog::default_conversions(
                &BackendFactory::global()?,
                DEFAULT_RULE_SCALE,
                RoundingMode::default(),
            )
        })
    }

    pub fn set_global(registry: Arc<Self>) {
        DEFAULT_CONVERSIONS.set(registry)
    }

    pub fn reset() {
        DEFAULT_CONVERSIONS.clear()
    }
}
