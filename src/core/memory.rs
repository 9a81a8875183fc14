use crate::core::{MemoryChange, MemoryOperation};
use crate::utils::error::{CalcError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single numeric memory register, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, value: f64) -> MemoryChange {
        self.replace(self.value + value)
    }

    pub fn subtract(&mut self, value: f64) -> MemoryChange {
        self.replace(self.value - value)
    }

    pub fn set(&mut self, value: f64) -> MemoryChange {
        self.replace(value)
    }

    pub fn clear(&mut self) -> MemoryChange {
        self.replace(0.0)
    }

    /// Apply a parsed operation. `add`, `subtract` and `set` need a value.
    pub fn apply(&mut self, operation: MemoryOperation, value: Option<f64>) -> Result<MemoryChange> {
        let require = |value: Option<f64>| {
            value.ok_or_else(|| {
                CalcError::invalid_input(format!(
                    "Value is required for {} operation",
                    operation.name()
                ))
            })
        };

        Ok(match operation {
            MemoryOperation::Add => self.add(require(value)?),
            MemoryOperation::Subtract => self.subtract(require(value)?),
            MemoryOperation::Set => self.set(require(value)?),
            MemoryOperation::Clear => self.clear(),
        })
    }

    fn replace(&mut self, new_value: f64) -> MemoryChange {
        let old_value = self.value;
        self.value = new_value;
        MemoryChange {
            old_value,
            new_value,
        }
    }
}

pub const DEFAULT_SESSION: &str = "default";
const MAX_SESSION_ID_LEN: usize = 64;

/// Memory registers keyed by session id, shared across request handlers.
///
/// Every read-modify-write happens under the one lock.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    sessions: Arc<Mutex<HashMap<String, Memory>>>,
    max_sessions: usize,
}

impl MemoryStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    pub fn validate_session_id(id: &str) -> Result<()> {
        if id.is_empty() || id.len() > MAX_SESSION_ID_LEN {
            return Err(CalcError::InvalidSession {
                reason: format!("length must be between 1 and {}", MAX_SESSION_ID_LEN),
            });
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CalcError::InvalidSession {
                reason: "only letters, digits, '-' and '_' are allowed".to_string(),
            });
        }
        Ok(())
    }

    /// Current value for a session; unknown sessions read as zero without
    /// being created.
    pub fn recall(&self, session: &str) -> f64 {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.get(session).map(Memory::recall).unwrap_or(0.0)
    }

    pub fn apply(
        &self,
        session: &str,
        operation: MemoryOperation,
        value: Option<f64>,
    ) -> Result<MemoryChange> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());

        // Work on a copy so a rejected operation leaves no session behind
        let existing = sessions.get(session).copied();
        let mut memory = existing.unwrap_or_default();
        let change = memory.apply(operation, value)?;

        if existing.is_none() && sessions.len() >= self.max_sessions {
            tracing::warn!(session, limit = self.max_sessions, "Rejecting new memory session");
            return Err(CalcError::SessionLimit {
                limit: self.max_sessions,
            });
        }

        sessions.insert(session.to_string(), memory);
        tracing::debug!(
            session,
            operation = operation.name(),
            old = change.old_value,
            new = change.new_value,
            "Memory updated"
        );
        Ok(change)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(1024)
    }
}
