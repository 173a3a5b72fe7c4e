/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::formula::DimensionalFormula;
use super::unit::Unit;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Incompatible dimensions: {0} <-> {1}")]
    IncompatibleDimensions(Dimension, Dimension),
    #[error("unit {0} is not registered")]
    UnregisteredUnit(Unit),
    #[error("invalid unit {1} for {0}")]
    InvalidUnit(String, Unit),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number {0}")]
    NegativeRadicand(String),
    #[error("dimension {0} has no integer root of degree {1}")]
    NonIntegerRoot(DimensionalFormula, i32),
    #[error("invalid root degree: {0}")]
    InvalidRoot(i32),
    #[error("dimension exponent out of range: {0}")]
    ExponentOverflow(String),
    #[error("no arithmetic backend configured")]
    NoAdapterConfigured,
    #[error("operands use different arithmetic backends: {0} <-> {1}")]
    BackendMismatch(String, String),
    #[error("arithmetic overflow in {0} backend")]
    Overflow(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unknown unit symbol: {0}")]
    UnknownSymbol(String),
    #[error("second base unit for {0}: {2} (already {1})")]
    DuplicateBaseUnit(DimensionalFormula, Unit, Unit),
    #[error("invalid range: {0} .. {1}")]
    InvalidRange(String, String),
    #[error("configuration error: {0}")]
    Config(String),
}
