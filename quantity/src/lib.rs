/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod autoscale;
pub mod calculator;
pub mod catalog;
pub mod comparator;
pub mod config;
pub mod conversion;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod factor;
pub mod family;
pub mod formula;
pub mod numeric;
pub mod prefix;
pub mod quantities;
pub mod quantity;
pub mod registry;
pub mod system;
pub mod unit;

pub mod quantity_as_object;

pub use crate::unit::{Unit, NEUTRAL_UNIT};
pub use autoscale::{AutoScaler, AutoscaleRange};
pub use calculator::Calculator;
pub use comparator::Comparator;
pub use config::{EngineConfig, DEFAULT_RULE_SCALE};
pub use conversion::{ConversionRule, Converter};
pub use dimension::Dimension;
pub use engine::{Engine, QuantityOps};
pub use error::UnitError;
pub use factor::Factor;
pub use family::{
    AmountUnit, AreaUnit, CurrentUnit, DataRateUnit, DimensionlessUnit,
    EnergyUnit, ForceUnit, FrequencyUnit, InformationUnit, LengthUnit,
    LuminousUnit, MassUnit, PowerUnit, PressureUnit, SpeedUnit,
    TemperatureUnit, TimeUnit, UnitFamily, VolumeUnit,
};
pub use formula::{BaseDimension, DimensionalFormula};
pub use numeric::{
    ArithmeticBackend, Backend, BackendFactory, BackendKind, DecimalRepr,
    MathContext, NumericValue, RoundingMode,
};
pub use quantities::{
    Area, DataRate, Duration, Information, Length, Mass, Speed, Temperature,
    Volume,
};
pub use quantity::{Measure, Quantity, QuantityType};
pub use registry::{
    ConversionFactorRegistry, ResultType, ResultTypeRegistry, UnitRegistry,
};
pub use system::{Notation, UnitSystem};

pub use prefix::{BinPrefix, DecPrefix, FracPrefix, Prefix, SiPrefix};
