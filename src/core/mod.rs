pub mod calculator;
pub mod command;
pub mod memory;
pub mod registry;

pub use crate::domain::model::{Category, Conversion, MemoryChange, MemoryOperation};
pub use crate::domain::ports::{ConfigProvider, Evaluator};
pub use crate::utils::error::Result;
