pub mod cycle;
pub mod form;
pub mod money;
pub mod submit;

pub use crate::domain::model::{CycleDateRange, CycleType, Money};
pub use crate::domain::ports::{FormSnapshot, Persistence};
pub use crate::utils::error::Result;
