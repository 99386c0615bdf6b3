pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::settings::Settings;
pub use crate::core::cycle::{validate_cycle_duration, validate_cycle_input, CycleRules, CycleValidationReport};
pub use crate::core::form::{is_form_valid, validate_form};
pub use crate::core::money::{format_brl_input, parse_brl, parse_brl_to_number};
pub use crate::core::submit::{submit, submit_with_callbacks};
pub use crate::domain::model::{
    CycleDateRange, CycleFormSnapshot, CycleType, Money, ProductFormSnapshot,
};
pub use crate::domain::ports::{FormSnapshot, Persistence};
pub use crate::utils::error::{CoopError, Result};
