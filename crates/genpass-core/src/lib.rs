//! # genpass core
//!
//! Deterministic password derivation: the same passphrase, domain and
//! constraints always produce the same password, and nothing secret is
//! ever stored.
//!
//! ## Architecture
//!
//! - **charset**: character classes and their frozen canonical order
//! - **constraints**: the immutable constraint model
//! - **derive**: the derivation engine (seed, encode, trim, repair)
//! - **digest**: SHA-256 seeding and the content-keyed selector
//! - **store**: per-domain constraint persistence

pub mod charset;
pub mod constraints;
pub mod derive;
pub mod digest;
pub mod error;
pub mod fs;
pub mod store;

pub use charset::CharClass;
pub use constraints::{ClassRule, Constraints, ConstraintsBuilder};
pub use derive::{derive, validate_domain, MAX_REPAIR_ROUNDS};
pub use error::{GenpassError, Result};
pub use store::{resolve_constraints, ConstraintSource, ConstraintStore, JsonFileStore, Resolved};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
