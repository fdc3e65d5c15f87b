//! Per-domain constraint persistence.
//!
//! Only the domain label and the constraint fields ever reach a store. The
//! passphrase and derived passwords never do.

mod json_file;
mod memory;
mod record;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::StoredConstraints;
pub use traits::ConstraintStore;

use serde::Serialize;

use crate::constraints::Constraints;
use crate::error::Result;

/// Where the constraints for an invocation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintSource {
    /// Given explicitly for this invocation.
    Explicit,
    /// Loaded from the store.
    Saved,
    /// Nothing given and nothing saved.
    Default,
}

/// Constraints chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub constraints: Constraints,
    pub source: ConstraintSource,
}

impl Resolved {
    /// Default constraints, used when nothing is given or saved.
    pub fn defaults() -> Self {
        Self {
            constraints: Constraints::default(),
            source: ConstraintSource::Default,
        }
    }

    /// Whether these constraints should be written back to the store.
    pub fn should_save(&self) -> bool {
        self.source == ConstraintSource::Explicit
    }
}

/// Pick the constraints for `domain`.
///
/// Explicit non-default constraints win. Otherwise whatever the store holds
/// for the domain is used, falling back to the defaults.
///
/// # Errors
///
/// Propagates store read errors. A missing store file is not an error.
pub fn resolve_constraints(
    store: &dyn ConstraintStore,
    domain: &str,
    explicit: &Constraints,
) -> Result<Resolved> {
    if !explicit.is_default() {
        return Ok(Resolved {
            constraints: explicit.clone(),
            source: ConstraintSource::Explicit,
        });
    }
    match store.load(domain)? {
        Some(constraints) => {
            tracing::debug!(domain, constraints = %constraints, "using saved constraints");
            Ok(Resolved {
                constraints,
                source: ConstraintSource::Saved,
            })
        }
        None => Ok(Resolved::defaults()),
    }
}
