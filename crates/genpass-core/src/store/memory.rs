//! In-memory constraint store, for embedding and tests.

use std::collections::BTreeMap;

use crate::constraints::Constraints;
use crate::error::Result;

use super::traits::ConstraintStore;

/// Constraint store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Constraints>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConstraintStore for MemoryStore {
    fn load(&self, domain: &str) -> Result<Option<Constraints>> {
        Ok(self.entries.get(domain).cloned())
    }

    fn save(&mut self, domain: &str, constraints: &Constraints) -> Result<()> {
        if constraints.is_default() {
            self.entries.remove(domain);
        } else {
            self.entries.insert(domain.to_string(), constraints.clone());
        }
        Ok(())
    }

    fn remove(&mut self, domain: &str) -> Result<bool> {
        Ok(self.entries.remove(domain).is_some())
    }

    fn list(&self) -> Result<BTreeMap<String, Constraints>> {
        Ok(self.entries.clone())
    }
}
