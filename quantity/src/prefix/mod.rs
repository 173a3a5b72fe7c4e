/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;

pub mod bin_prefix;
pub mod dec_prefix;
pub mod frac_prefix;
pub mod si_prefix;

pub use prefix_trait::Prefix;

pub use bin_prefix::BinPrefix;
pub use dec_prefix::DecPrefix;
pub use frac_prefix::FracPrefix;
pub use si_prefix::SiPrefix;
