/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::autoscale::{AutoScaler, AutoscaleRange};
use crate::calculator::Calculator;
use crate::catalog;
use crate::comparator::Comparator;
use crate::config::EngineConfig;
use crate::conversion::Converter;
use crate::error::UnitError;
use crate::numeric::{Backend, BackendFactory, MathContext, NumericValue};
use crate::quantity::{Measure, Quantity};
use crate::registry::{
    ConversionFactorRegistry, GlobalSlot, ResultTypeRegistry, UnitRegistry,
};
use crate::system::UnitSystem;
use crate::unit::Unit;

lazy_static! {
    static ref DEFAULT_CONFIG: GlobalSlot<EngineConfig> = GlobalSlot::new();
}

/// A backend, the three registries and the settings that tie them
/// together. Hands out the services operating on them.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    backend: Backend,
    conversions: Arc<ConversionFactorRegistry>,
    units: Arc<UnitRegistry>,
    results: Arc<ResultTypeRegistry>,
    range: AutoscaleRange,
}

impl Engine {
    /// Resolves the backend and builds the default registries.
    pub fn from_config(config: &EngineConfig) -> Result<Self, UnitError> {
        let backend = BackendFactory::resolve(config.backend)?;
        let conversions = catalog::default_conversions(
            &backend,
            config.rule_scale,
            config.rounding,
        )?;
        Self::new(
            config.clone(),
            backend,
            Arc::new(conversions),
            Arc::new(catalog::default_units()?),
            Arc::new(catalog::default_result_types()?),
        )
    }

    pub fn new(
        config: EngineConfig,
        backend: Backend,
        conversions: Arc<ConversionFactorRegistry>,
        units: Arc<UnitRegistry>,
        results: Arc<ResultTypeRegistry>,
    ) -> Result<Self, UnitError> {
        let range = autoscale_range(&config, &backend)?;
        Ok(Engine {
            config,
            backend,
            conversions,
            units,
            results,
            range,
        })
    }

    /// Assembled from the process-wide defaults, building those that
    /// are not set yet.
    pub fn global() -> Result<Self, UnitError> {
        let config = DEFAULT_CONFIG
            .get()
            .map_or_else(EngineConfig::default, |c| c.as_ref().clone());
        Self::new(
            config,
            BackendFactory::global()?,
            ConversionFactorRegistry::global()?,
            UnitRegistry::global()?,
            ResultTypeRegistry::global()?,
        )
    }

    /// Makes this engine's parts the process-wide defaults.
    pub fn install(&self) {
        BackendFactory::set_global(self.backend.clone());
        ConversionFactorRegistry::set_global(self.conversions.clone());
        UnitRegistry::set_global(self.units.clone());
        ResultTypeRegistry::set_global(self.results.clone());
        DEFAULT_CONFIG.set(Arc::new(self.config.clone()));
        log::debug!(
            "installed engine defaults ({} backend, {} units)",
            self.backend.kind(),
            self.conversions.len()
        );
    }

    /// Forgets all process-wide defaults.
    pub fn reset() {
        BackendFactory::reset();
        ConversionFactorRegistry::reset();
        UnitRegistry::reset();
        ResultTypeRegistry::reset();
        DEFAULT_CONFIG.clear();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn conversions(&self) -> &Arc<ConversionFactorRegistry> {
        &self.conversions
    }

    pub fn units(&self) -> &Arc<UnitRegistry> {
        &self.units
    }

    pub fn results(&self) -> &Arc<ResultTypeRegistry> {
        &self.results
    }

    pub fn context(&self) -> MathContext {
        self.config.math_context()
    }

    pub fn range(&self) -> &AutoscaleRange {
        &self.range
    }

    /// Parses a decimal with this engine's backend.
    pub fn value(&self, input: &str) -> Result<NumericValue, UnitError> {
        NumericValue::parse(input, &self.backend)
    }

    /// A quantity from a decimal string and a unit symbol.
    pub fn quantity(
        &self,
        value: &str,
        unit: &str,
    ) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.value(value)?, Unit::from_symbol(unit)?))
    }

    pub fn converter(&self) -> Converter {
        Converter::new(self.conversions.clone(), self.units.clone())
    }

    pub fn calculator(&self) -> Calculator {
        Calculator::new(
            self.converter(),
            self.results.clone(),
            self.context(),
        )
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.converter(), self.context())
    }

    pub fn autoscaler(&self) -> AutoScaler {
        AutoScaler::new(self.converter(), self.context(), self.range.clone())
    }
}

fn autoscale_range(
    config: &EngineConfig,
    backend: &Backend,
) -> Result<AutoscaleRange, UnitError> {
    AutoscaleRange::new(
        NumericValue::parse(&config.autoscale_min, backend)?,
        NumericValue::parse(&config.autoscale_max, backend)?,
    )
}

/// Operations on any quantity, backed by the process-wide defaults.
pub trait QuantityOps: Measure {
    fn convert_to(&self, unit: Unit) -> Result<Quantity, UnitError> {
        let engine = Engine::global()?;
        let context = engine.context();
        engine.converter().convert_quantity(
            self,
            unit,
            context.scale,
            context.rounding,
        )
    }

    fn normalize(&self) -> Result<Quantity, UnitError> {
        let engine = Engine::global()?;
        let context = engine.context();
        engine
            .converter()
            .normalize(self, context.scale, context.rounding)
    }

    fn compare_to<B>(&self, other: &B) -> Result<Ordering, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.comparator().compare(self, other)
    }

    fn equals_within<B>(
        &self,
        other: &B,
        tolerance: Option<&NumericValue>,
    ) -> Result<bool, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.comparator().equals(self, other, tolerance)
    }

    fn plus<B>(&self, other: &B) -> Result<Quantity, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.calculator().add(self, other)
    }

    fn minus<B>(&self, other: &B) -> Result<Quantity, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.calculator().subtract(self, other)
    }

    fn times<B>(&self, other: &B) -> Result<Quantity, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.calculator().multiply(self, other, None)
    }

    fn divided_by<B>(&self, other: &B) -> Result<Quantity, UnitError>
    where
        B: Measure + ?Sized,
    {
        Engine::global()?.calculator().divide(self, other, None)
    }

    fn scaled_by(&self, scalar: &NumericValue) -> Result<Quantity, UnitError> {
        Engine::global()?.calculator().multiply_by(self, scalar)
    }

    fn autoscaled(
        &self,
        system: Option<UnitSystem>,
    ) -> Result<Quantity, UnitError> {
        Engine::global()?.autoscaler().autoscale(self, system)
    }
}

impl<T: Measure + ?Sized> QuantityOps for T {}
