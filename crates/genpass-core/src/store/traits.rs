//! Constraint store trait definition.
//!
//! The store remembers which constraints were requested for each domain so
//! later invocations can reproduce the same password without repeating the
//! flags. It only ever sees the domain label and the constraint fields.

use std::collections::BTreeMap;

use crate::constraints::Constraints;
use crate::error::Result;

/// Key-value store of per-domain constraints.
///
/// Implementations must ensure:
/// - A missing domain is `Ok(None)`, not an error
/// - Saving default constraints removes the domain's entry
/// - Nothing but the domain and constraint fields is persisted
pub trait ConstraintStore {
    /// Load the constraints saved for `domain`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when nothing is saved for the domain.
    fn load(&self, domain: &str) -> Result<Option<Constraints>>;

    /// Save `constraints` for `domain`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `GenpassError::Storage` if the backing medium cannot be written.
    fn save(&mut self, domain: &str, constraints: &Constraints) -> Result<()>;

    /// Remove the entry for `domain`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if an entry was removed.
    fn remove(&mut self, domain: &str) -> Result<bool>;

    /// Every saved entry, ordered by domain.
    fn list(&self) -> Result<BTreeMap<String, Constraints>>;
}
