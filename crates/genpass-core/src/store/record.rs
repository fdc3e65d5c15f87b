//! On-disk representation of a constraint set.
//!
//! Each domain maps to a 5-tuple `[length, digit, special, upper, lower]`.
//! The class slots follow the canonical class order and hold `true` for
//! required, `false` for forbidden and `null` for unconstrained.
//!
//! Files that use plain booleans, with `false` meaning "no rule", are not
//! compatible: every `false` slot loads as a forbidden class, and a
//! forbidden `lower` can never be satisfied.

use serde::{Deserialize, Serialize};

use crate::charset::CharClass;
use crate::constraints::{ClassRule, Constraints};
use crate::error::{GenpassError, Result};

/// One persisted constraint set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConstraints(
    pub usize,
    pub Option<bool>,
    pub Option<bool>,
    pub Option<bool>,
    pub Option<bool>,
);

impl StoredConstraints {
    fn slots(&self) -> [Option<bool>; 4] {
        [self.1, self.2, self.3, self.4]
    }
}

impl From<&Constraints> for StoredConstraints {
    fn from(constraints: &Constraints) -> Self {
        let slot = |class: CharClass| match constraints.rule_for(class) {
            Some(ClassRule::Required) => Some(true),
            Some(ClassRule::Forbidden) => Some(false),
            None => None,
        };
        StoredConstraints(
            constraints.target_length(),
            slot(CharClass::Digit),
            slot(CharClass::Special),
            slot(CharClass::Upper),
            slot(CharClass::Lower),
        )
    }
}

impl TryFrom<StoredConstraints> for Constraints {
    type Error = GenpassError;

    fn try_from(stored: StoredConstraints) -> Result<Self> {
        let mut builder = Constraints::builder().length(stored.0);
        for (class, slot) in CharClass::ALL.into_iter().zip(stored.slots()) {
            builder = match slot {
                Some(true) => builder.require(class),
                Some(false) => builder.forbid(class),
                None => builder,
            };
        }
        builder.build()
    }
}
