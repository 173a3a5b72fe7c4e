/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use super::Backend;
use crate::error::UnitError;

/// The arithmetic implementations this crate knows about.
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
pub enum BackendKind {
    /// Unbounded big-integer decimals.
    Exact,
    /// 96-bit `rust_decimal` decimals.
    Fixed,
}

impl BackendKind {
    /// Probing order.
    pub const LIST: &'static [Self] = &[Self::Exact, Self::Fixed];

    pub const fn name(&self) -> &'static str {
        match self {
            BackendKind::Exact => "exact",
            BackendKind::Fixed => "fixed",
        }
    }

    /// Whether the implementation was compiled in.
    pub const fn is_available(&self) -> bool {
        match self {
            BackendKind::Exact => cfg!(feature = "exact-backend"),
            BackendKind::Fixed => cfg!(feature = "fixed-backend"),
        }
    }

    pub fn instantiate(&self) -> Result<Backend, UnitError> {
        match self {
            #[cfg(feature = "exact-backend")]
            BackendKind::Exact => Ok(Arc::new(super::exact::ExactBackend)),
            #[cfg(feature = "fixed-backend")]
            BackendKind::Fixed => Ok(Arc::new(super::fixed::FixedBackend)),
            #[allow(unreachable_patterns)]
            _ => Err(UnitError::NoAdapterConfigured),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BackendKind {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::LIST
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| UnitError::Config(format!("unknown backend: {}", s)))
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_BACKEND: RwLock<Option<Backend>> = RwLock::new(None);
}

/// Resolves arithmetic backends and holds the process-wide default.
pub struct BackendFactory;

impl BackendFactory {
    /// Explicit preference first, then the first available
    /// implementation in probing order.
    pub fn resolve(
        preferred: Option<BackendKind>,
    ) -> Result<Backend, UnitError> {
        if let Some(kind) = preferred {
            match kind.instantiate() {
                Ok(backend) => {
                    log::debug!("using requested arithmetic backend: {}", kind);
                    return Ok(backend);
                }
                Err(_) => log::warn!(
                    "requested arithmetic backend {} is not available; probing",
                    kind
                ),
            }
        }
        let kind = BackendKind::LIST
            .iter()
            .find(|kind| kind.is_available())
            .ok_or(UnitError::NoAdapterConfigured)?;
        log::debug!("probed arithmetic backend: {}", kind);
        kind.instantiate()
    }

    /// The process-wide default, probed once on first use.
    pub fn global() -> Result<Backend, UnitError> {
        if let Some(backend) = DEFAULT_BACKEND
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(backend.clone());
        }
        let mut slot =
            DEFAULT_BACKEND.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(backend) => Ok(backend.clone()),
            None => {
                let backend = Self::resolve(None)?;
                *slot = Some(backend.clone());
                Ok(backend)
            }
        }
    }

    pub fn set_global(backend: Backend) {
        log::debug!("default arithmetic backend set to {}", backend.kind());
        *DEFAULT_BACKEND.write().unwrap_or_else(PoisonError::into_inner) =
            Some(backend);
    }

    /// Forgets the default; the next `global()` probes again.
    pub fn reset() {
        *DEFAULT_BACKEND.write().unwrap_or_else(PoisonError::into_inner) =
            None;
    }
}
