// Adapters layer: concrete implementations for external collaborators (expression evaluation, http).

pub mod evaluator;

#[cfg(feature = "server")]
pub mod http;
