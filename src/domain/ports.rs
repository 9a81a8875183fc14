use crate::utils::error::Result;

/// Evaluates free-form expression text to a number.
///
/// Implementations own the grammar; the calculator only forwards text that is
/// not one of its own commands.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, expression: &str) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    /// Fractional digits shown for results, `None` for the shortest exact form.
    fn precision(&self) -> Option<usize>;
    fn show_banner(&self) -> bool;
}
