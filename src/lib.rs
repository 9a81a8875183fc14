pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ServerArgs};

#[cfg(feature = "server")]
pub use adapters::http::{create_router, AppState, RouterOptions};

pub use adapters::evaluator::FastEvaluator;
pub use app::Shell;
pub use config::CalcConfig;
pub use core::calculator::{Calculator, Outcome, Session};
pub use core::memory::{Memory, MemoryStore};
pub use core::{registry, Category, Conversion, Evaluator};
pub use utils::error::{CalcError, Result};
