/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod family_trait;

pub mod amount_unit;
pub mod area_unit;
pub mod current_unit;
pub mod data_rate_unit;
pub mod dimensionless_unit;
pub mod energy_unit;
pub mod force_unit;
pub mod frequency_unit;
pub mod information_unit;
pub mod length_unit;
pub mod luminous_unit;
pub mod mass_unit;
pub mod power_unit;
pub mod pressure_unit;
pub mod speed_unit;
pub mod temperature_unit;
pub mod time_unit;
pub mod volume_unit;

pub use amount_unit::AmountUnit;
pub use area_unit::AreaUnit;
pub use current_unit::CurrentUnit;
pub use data_rate_unit::DataRateUnit;
pub use dimensionless_unit::DimensionlessUnit;
pub use energy_unit::EnergyUnit;
pub use family_trait::UnitFamily;
pub use force_unit::ForceUnit;
pub use frequency_unit::FrequencyUnit;
pub use information_unit::InformationUnit;
pub use length_unit::LengthUnit;
pub use luminous_unit::LuminousUnit;
pub use mass_unit::MassUnit;
pub use power_unit::PowerUnit;
pub use pressure_unit::PressureUnit;
pub use speed_unit::SpeedUnit;
pub use temperature_unit::TemperatureUnit;
pub use time_unit::TimeUnit;
pub use volume_unit::VolumeUnit;
