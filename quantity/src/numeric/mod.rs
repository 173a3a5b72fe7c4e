/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Arbitrary-precision decimal values with a swappable arithmetic
//! backend.

pub mod factory;
pub mod repr;
pub mod rounding;

#[cfg(feature = "exact-backend")]
pub mod exact;
#[cfg(feature = "fixed-backend")]
pub mod fixed;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::UnitError;

pub use factory::{BackendFactory, BackendKind};
pub use repr::DecimalRepr;
pub use rounding::{MathContext, RoundingMode};

/// Shared handle to an arithmetic implementation.
pub type Backend = Arc<dyn ArithmeticBackend>;

/// The operation set every arithmetic implementation provides.
///
/// Implementations must produce identical results for identical
/// inputs, in particular for all eight rounding modes.
pub trait ArithmeticBackend: Send + Sync + Debug {
    fn kind(&self) -> BackendKind;

    fn add(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError>;

    fn subtract(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError>;

    fn multiply(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<DecimalRepr, UnitError>;

    /// Quotient with exactly `scale` fractional digits.
    fn divide(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError>;

    fn power(
        &self,
        a: &DecimalRepr,
        exponent: u32,
    ) -> Result<DecimalRepr, UnitError>;

    fn sqrt(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError>;

    fn round(
        &self,
        a: &DecimalRepr,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<DecimalRepr, UnitError>;

    fn compare(
        &self,
        a: &DecimalRepr,
        b: &DecimalRepr,
    ) -> Result<Ordering, UnitError>;
}

/// An immutable decimal bound to the backend that produced it.
#[derive(Clone)]
pub struct NumericValue {
    repr: DecimalRepr,
    backend: Backend,
}

impl NumericValue {
    pub fn new(repr: DecimalRepr, backend: Backend) -> Self {
        NumericValue { repr, backend }
    }

    pub fn parse(input: &str, backend: &Backend) -> Result<Self, UnitError> {
        Ok(NumericValue::new(input.parse()?, backend.clone()))
    }

    /// Parses with the process-wide default backend.
    pub fn parse_default(input: &str) -> Result<Self, UnitError> {
        NumericValue::parse(input, &BackendFactory::global()?)
    }

    pub fn from_i64(n: i64, backend: &Backend) -> Self {
        NumericValue::new(DecimalRepr::from_i64(n), backend.clone())
    }

    pub fn zero(backend: &Backend) -> Self {
        NumericValue::new(DecimalRepr::zero(), backend.clone())
    }

    pub fn one(backend: &Backend) -> Self {
        NumericValue::new(DecimalRepr::one(), backend.clone())
    }

    pub fn repr(&self) -> &DecimalRepr {
        &self.repr
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn scale(&self) -> u32 {
        self.repr.scale()
    }

    fn derive(&self, repr: DecimalRepr) -> Self {
        NumericValue::new(repr, self.backend.clone())
    }

    fn check_backend(&self, other: &Self) -> Result<(), UnitError> {
        let (a, b) = (self.backend.kind(), other.backend.kind());
        match a == b {
            true => Ok(()),
            false => Err(UnitError::BackendMismatch(
                a.to_string(),
                b.to_string(),
            )),
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self, UnitError> {
        self.check_backend(other)?;
        Ok(self.derive(self.backend.add(&self.repr, &other.repr)?))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, UnitError> {
        self.check_backend(other)?;
        Ok(self.derive(self.backend.subtract(&self.repr, &other.repr)?))
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, UnitError> {
        self.check_backend(other)?;
        Ok(self.derive(self.backend.multiply(&self.repr, &other.repr)?))
    }

    pub fn divide(
        &self,
        other: &Self,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Self, UnitError> {
        self.check_backend(other)?;
        if other.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        Ok(self.derive(self.backend.divide(
            &self.repr,
            &other.repr,
            scale,
            mode,
        )?))
    }

    pub fn power(&self, exponent: u32) -> Result<Self, UnitError> {
        Ok(self.derive(self.backend.power(&self.repr, exponent)?))
    }

    /// Integer power; negative exponents divide at `scale`.
    pub fn powi(
        &self,
        exponent: i32,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Self, UnitError> {
        let magnitude = self.power(exponent.unsigned_abs())?;
        match exponent < 0 {
            true => NumericValue::one(&self.backend)
                .divide(&magnitude, scale, mode),
            false => Ok(magnitude),
        }
    }

    pub fn sqrt(
        &self,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Self, UnitError> {
        if self.is_negative() {
            return Err(UnitError::NegativeRadicand(self.to_string()));
        }
        Ok(self.derive(self.backend.sqrt(&self.repr, scale, mode)?))
    }

    pub fn round(
        &self,
        precision: u32,
        mode: RoundingMode,
    ) -> Result<Self, UnitError> {
        Ok(self.derive(self.backend.round(&self.repr, precision, mode)?))
    }

    pub fn floor(&self, precision: u32) -> Result<Self, UnitError> {
        self.round(precision, RoundingMode::Floor)
    }

    pub fn ceil(&self, precision: u32) -> Result<Self, UnitError> {
        self.round(precision, RoundingMode::Ceiling)
    }

    pub fn compare(&self, other: &Self) -> Result<Ordering, UnitError> {
        self.check_backend(other)?;
        self.backend.compare(&self.repr, &other.repr)
    }

    /// Exact equality, or `|a - b| <= tolerance` when one is given.
    pub fn equals(
        &self,
        other: &Self,
        tolerance: Option<&Self>,
    ) -> Result<bool, UnitError> {
        match tolerance {
            None => Ok(self.compare(other)? == Ordering::Equal),
            Some(tolerance) => {
                let diff = self.subtract(other)?.abs();
                Ok(diff.compare(tolerance)? != Ordering::Greater)
            }
        }
    }

    pub fn min(&self, other: &Self) -> Result<Self, UnitError> {
        match self.compare(other)? {
            Ordering::Greater => Ok(other.clone()),
            _ => Ok(self.clone()),
        }
    }

    pub fn max(&self, other: &Self) -> Result<Self, UnitError> {
        match self.compare(other)? {
            Ordering::Less => Ok(other.clone()),
            _ => Ok(self.clone()),
        }
    }

    pub fn abs(&self) -> Self {
        self.derive(self.repr.abs())
    }

    pub fn negate(&self) -> Self {
        self.derive(self.repr.negate())
    }

    pub fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.repr.is_negative()
    }

    /// Same value without trailing fractional zeros.
    pub fn normalized(&self) -> Self {
        self.derive(self.repr.normalized())
    }
}

/* Value semantics: equality ignores scale and backend. */

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for NumericValue {}

impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.repr.cmp(&other.repr))
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(&self.repr, f)
    }
}

impl Debug for NumericValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}@{}", self.repr, self.backend.kind())
    }
}

impl Serialize for NumericValue {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.repr)
    }
}

impl<'de> Deserialize<'de> for NumericValue {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NumericValue::parse_default(&s).map_err(D::Error::custom)
    }
}
