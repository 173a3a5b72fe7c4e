/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod converter;
pub mod rule;

pub use converter::Converter;
pub use rule::ConversionRule;
