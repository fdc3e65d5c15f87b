//! Output formatting helpers for the CLI.

use std::collections::BTreeMap;

use genpass_core::{ConstraintSource, Constraints};

/// Convert a derivation result to JSON for output.
pub fn derivation_json(
    domain: &str,
    password: &str,
    constraints: &Constraints,
    source: ConstraintSource,
) -> serde_json::Value {
    serde_json::json!({
        "domain": domain,
        "password": password,
        "source": source,
        "constraints": constraints,
    })
}

/// Convert one domain's saved constraints to JSON for output.
pub fn constraints_json(domain: &str, constraints: &Constraints) -> serde_json::Value {
    serde_json::json!({
        "domain": domain,
        "constraints": constraints,
    })
}

/// Convert every saved entry to a JSON array for output.
pub fn entries_json(entries: &BTreeMap<String, Constraints>) -> Vec<serde_json::Value> {
    entries
        .iter()
        .map(|(domain, constraints)| constraints_json(domain, constraints))
        .collect()
}
