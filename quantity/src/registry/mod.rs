/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Registries binding units to conversion rules and quantity types.
//!
//! Each registry can be built and passed around explicitly; a
//! process-wide default is kept for the convenience operations on
//! quantities. The defaults are meant to be set up once, at startup or
//! per test.

pub mod conversion_registry;
pub mod result_registry;
pub mod unit_registry;

pub use conversion_registry::ConversionFactorRegistry;
pub use result_registry::{ResultType, ResultTypeRegistry};
pub use unit_registry::UnitRegistry;

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::UnitError;

/// Slot for a lazily built process-wide default.
pub(crate) struct GlobalSlot<T>(RwLock<Option<Arc<T>>>);

impl<T> GlobalSlot<T> {
    pub(crate) fn new() -> Self {
        GlobalSlot(RwLock::new(None))
    }

    pub(crate) fn get(&self) -> Option<Arc<T>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn get_or_try_init<F>(
        &self,
        init: F,
    ) -> Result<Arc<T>, UnitError>
    where
        F: FnOnce() -> Result<T, UnitError>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        let mut slot = self.0.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(value) => Ok(value.clone()),
            None => {
                let value = Arc::new(init()?);
                *slot = Some(value.clone());
                Ok(value)
            }
        }
    }

    pub(crate) fn set(&self, value: Arc<T>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    pub(crate) fn clear(&self) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
