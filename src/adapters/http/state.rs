use crate::core::calculator::Calculator;
use crate::core::memory::MemoryStore;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Calculator,
    pub memory: MemoryStore,
}

impl AppState {
    pub fn new(calculator: Calculator, memory: MemoryStore) -> Self {
        Self { calculator, memory }
    }
}
