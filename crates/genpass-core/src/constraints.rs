//! The constraint model: desired length plus required and forbidden classes.
//!
//! [`Constraints`] is an immutable value. Classes are held in ordered sets
//! keyed by [`CharClass`]'s canonical order, so every accessor hands them
//! back in that order no matter how they were supplied.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::charset::CharClass;
use crate::error::{GenpassError, Result};

/// What a constraint set says about a single class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassRule {
    /// At least one member must appear.
    Required,
    /// No member may appear.
    Forbidden,
}

/// Length and character-class requirements for one derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Constraints {
    target_length: usize,
    required: BTreeSet<CharClass>,
    forbidden: BTreeSet<CharClass>,
}

impl Constraints {
    /// Start building a constraint set.
    pub fn builder() -> ConstraintsBuilder {
        ConstraintsBuilder::default()
    }

    /// Construct from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `GenpassError::Contradictory` if a class is both required and
    /// forbidden.
    pub fn new(
        target_length: usize,
        required: impl IntoIterator<Item = CharClass>,
        forbidden: impl IntoIterator<Item = CharClass>,
    ) -> Result<Self> {
        let mut builder = Self::builder().length(target_length);
        for class in required {
            builder = builder.require(class);
        }
        for class in forbidden {
            builder = builder.forbid(class);
        }
        builder.build()
    }

    /// Requested output length; 0 means the full encoded length.
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// A copy of these constraints with a different target length.
    pub fn with_length(&self, target_length: usize) -> Self {
        Self {
            target_length,
            ..self.clone()
        }
    }

    /// True when nothing is overridden: no length, no required or forbidden classes.
    pub fn is_default(&self) -> bool {
        self.target_length == 0 && self.required.is_empty() && self.forbidden.is_empty()
    }

    /// Required classes in canonical order.
    pub fn ordered_required_classes(&self) -> Vec<CharClass> {
        self.required.iter().copied().collect()
    }

    /// Forbidden classes in canonical order.
    pub fn ordered_forbidden_classes(&self) -> Vec<CharClass> {
        self.forbidden.iter().copied().collect()
    }

    /// The rule for `class`, if any.
    pub fn rule_for(&self, class: CharClass) -> Option<ClassRule> {
        if self.required.contains(&class) {
            Some(ClassRule::Required)
        } else if self.forbidden.contains(&class) {
            Some(ClassRule::Forbidden)
        } else {
            None
        }
    }

    /// Cut `s` down to the target length, counted in characters.
    ///
    /// Returns `s` unchanged when the target is 0 or not shorter than `s`.
    pub fn trim<'a>(&self, s: &'a str) -> &'a str {
        if self.target_length == 0 {
            return s;
        }
        match s.char_indices().nth(self.target_length) {
            Some((end, _)) => &s[..end],
            None => s,
        }
    }

    /// Whether `s` contains every required class and no forbidden one.
    pub fn satisfies(&self, s: &str) -> bool {
        self.required.iter().all(|class| class.appears_in(s))
            && !self.forbidden.iter().any(|class| class.appears_in(s))
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.target_length == 0 {
            write!(f, "length=full")?;
        } else {
            write!(f, "length={}", self.target_length)?;
        }
        for class in CharClass::ALL {
            match self.rule_for(class) {
                Some(ClassRule::Required) => write!(f, " +{}", class)?,
                Some(ClassRule::Forbidden) => write!(f, " -{}", class)?,
                None => {}
            }
        }
        Ok(())
    }
}

/// Builder for [`Constraints`].
#[derive(Debug, Clone, Default)]
pub struct ConstraintsBuilder {
    target_length: usize,
    required: BTreeSet<CharClass>,
    forbidden: BTreeSet<CharClass>,
}

impl ConstraintsBuilder {
    pub fn length(mut self, target_length: usize) -> Self {
        self.target_length = target_length;
        self
    }

    pub fn require(mut self, class: CharClass) -> Self {
        self.required.insert(class);
        self
    }

    pub fn forbid(mut self, class: CharClass) -> Self {
        self.forbidden.insert(class);
        self
    }

    /// Finish the constraint set.
    ///
    /// # Errors
    ///
    /// Returns `GenpassError::Contradictory` naming every class that was
    /// both required and forbidden.
    pub fn build(self) -> Result<Constraints> {
        let overlap: Vec<&str> = self
            .required
            .intersection(&self.forbidden)
            .map(|class| class.name())
            .collect();
        if !overlap.is_empty() {
            return Err(GenpassError::Contradictory(format!(
                "{} both required and forbidden",
                overlap.join(", ")
            )));
        }
        Ok(Constraints {
            target_length: self.target_length,
            required: self.required,
            forbidden: self.forbidden,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default() {
        assert!(Constraints::default().is_default());
        assert!(!Constraints::default().with_length(12).is_default());
        let required = Constraints::builder()
            .require(CharClass::Digit)
            .build()
            .unwrap();
        assert!(!required.is_default());
        let forbidden = Constraints::builder()
            .forbid(CharClass::Special)
            .build()
            .unwrap();
        assert!(!forbidden.is_default());
    }

    #[test]
    fn test_classes_come_back_in_canonical_order() {
        let constraints = Constraints::new(
            0,
            [CharClass::Lower, CharClass::Digit, CharClass::Upper],
            [],
        )
        .unwrap();
        assert_eq!(
            constraints.ordered_required_classes(),
            vec![CharClass::Digit, CharClass::Upper, CharClass::Lower]
        );

        let constraints =
            Constraints::new(0, [], [CharClass::Upper, CharClass::Special]).unwrap();
        assert_eq!(
            constraints.ordered_forbidden_classes(),
            vec![CharClass::Special, CharClass::Upper]
        );
    }

    #[test]
    fn test_overlap_is_rejected() {
        let err = Constraints::builder()
            .require(CharClass::Digit)
            .require(CharClass::Upper)
            .forbid(CharClass::Digit)
            .build()
            .unwrap_err();
        assert!(matches!(err, GenpassError::Contradictory(_)));
        assert!(err.to_string().contains("digit"));
    }

    #[test]
    fn test_trim() {
        let s = "abcdefghij";
        assert_eq!(Constraints::default().trim(s), s);
        assert_eq!(Constraints::default().with_length(4).trim(s), "abcd");
        assert_eq!(Constraints::default().with_length(10).trim(s), s);
        assert_eq!(Constraints::default().with_length(50).trim(s), s);
        assert_eq!(Constraints::default().with_length(3).trim(""), "");
    }

    #[test]
    fn test_trim_counts_characters() {
        assert_eq!(Constraints::default().with_length(2).trim("éàü"), "éà");
    }

    #[test]
    fn test_satisfies() {
        let constraints = Constraints::builder()
            .require(CharClass::Digit)
            .require(CharClass::Upper)
            .forbid(CharClass::Special)
            .build()
            .unwrap();
        assert!(constraints.satisfies("aB3"));
        assert!(!constraints.satisfies("aBc"));
        assert!(!constraints.satisfies("ab3"));
        assert!(!constraints.satisfies("aB3+"));
        assert!(Constraints::default().satisfies(""));
    }

    #[test]
    fn test_with_length_leaves_original_untouched() {
        let original = Constraints::builder()
            .length(8)
            .require(CharClass::Digit)
            .build()
            .unwrap();
        let longer = original.with_length(16);
        assert_eq!(original.target_length(), 8);
        assert_eq!(longer.target_length(), 16);
        assert_eq!(longer.ordered_required_classes(), vec![CharClass::Digit]);
    }

    #[test]
    fn test_display() {
        let constraints = Constraints::new(
            12,
            [CharClass::Upper, CharClass::Digit],
            [CharClass::Special],
        )
        .unwrap();
        assert_eq!(constraints.to_string(), "length=12 +digit -special +upper");
        assert_eq!(Constraints::default().to_string(), "length=full");
    }
}
