//! The derivation engine.
//!
//! A password is the base64 encoding of `SHA-256("{passphrase} {domain}\n")`,
//! trimmed to the requested length and then repaired until it satisfies
//! its constraints. Repairs are driven by [`salted_digest`] over the
//! current candidate, so every step is reproducible from the inputs alone.
//!
//! # Repair rules
//!
//! Each round walks the classes in canonical order:
//!
//! - a required class with no member present gets one position
//!   overwritten: position `P mod len(candidate)`, character
//!   `members[P mod len(members)]`, where `P` is the salted digest of the
//!   class name and the candidate as it stands at that moment;
//! - a forbidden class has every member replaced by a lower-case letter.
//!   `P` is computed once per class pass, and the member at index `i`
//!   becomes `lower[(P + 17 * i) mod 26]`.
//!
//! Rounds repeat until the candidate satisfies the constraints, up to
//! [`MAX_REPAIR_ROUNDS`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::charset::CharClass;
use crate::constraints::Constraints;
use crate::digest::{reduce, salted_digest, seed_digest};
use crate::error::{GenpassError, Result};

/// Upper bound on repair rounds before the constraints are declared unsatisfiable.
pub const MAX_REPAIR_ROUNDS: usize = 1000;

/// Stride folding a character's index into its forbidden-class replacement.
pub const FORBIDDEN_INDEX_STRIDE: usize = 17;

/// Length of the untrimmed candidate: 32 digest bytes in padded base64.
pub const ENCODED_LEN: usize = 44;

/// Derive the password for `domain` under `constraints`.
///
/// # Errors
///
/// Returns `GenpassError::Unsatisfiable` if the constraints cannot be met
/// within [`MAX_REPAIR_ROUNDS`], for example when `lower` is forbidden or
/// more classes are required than the target length has room for.
pub fn derive(passphrase: &str, domain: &str, constraints: &Constraints) -> Result<String> {
    let digest = seed_digest(passphrase, domain);
    let encoded = Zeroizing::new(STANDARD.encode(digest.as_slice()));
    let mut candidate = constraints.trim(&encoded).to_string();

    for round in 0..MAX_REPAIR_ROUNDS {
        if constraints.satisfies(&candidate) {
            tracing::debug!(rounds = round, length = candidate.len(), "derivation complete");
            return Ok(candidate);
        }
        repair_round(&mut candidate, constraints);
    }
    if constraints.satisfies(&candidate) {
        return Ok(candidate);
    }

    drop(Zeroizing::new(candidate));
    tracing::warn!(
        rounds = MAX_REPAIR_ROUNDS,
        constraints = %constraints,
        "repair loop did not converge"
    );
    Err(GenpassError::Unsatisfiable {
        rounds: MAX_REPAIR_ROUNDS,
    })
}

/// Check a domain label before it reaches [`derive`].
///
/// # Errors
///
/// Returns `GenpassError::InvalidInput` for an empty or all-whitespace label.
pub fn validate_domain(domain: &str) -> Result<&str> {
    if domain.trim().is_empty() {
        return Err(GenpassError::InvalidInput(
            "Domain cannot be empty".to_string(),
        ));
    }
    Ok(domain)
}

/// One pass over required then forbidden classes.
fn repair_round(candidate: &mut String, constraints: &Constraints) {
    for class in constraints.ordered_required_classes() {
        if !class.appears_in(candidate) {
            insert_member(candidate, class);
        }
    }
    for class in constraints.ordered_forbidden_classes() {
        if class.appears_in(candidate) {
            purge_members(candidate, class);
        }
    }
}

/// Overwrite one position of `candidate` with a member of `class`.
fn insert_member(candidate: &mut String, class: CharClass) {
    if candidate.is_empty() {
        return;
    }
    debug_assert!(candidate.is_ascii());
    let p = salted_digest(class.name(), candidate);
    let position = reduce(p.as_slice(), candidate.len());
    let members = class.members();
    let replacement = members[reduce(p.as_slice(), members.len())] as char;
    let mut buf = [0u8; 4];
    candidate.replace_range(position..position + 1, replacement.encode_utf8(&mut buf));
    tracing::trace!(class = class.name(), "inserted required member");
}

/// Replace every member of `class` in `candidate` with a lower-case letter.
fn purge_members(candidate: &mut String, class: CharClass) {
    let p = salted_digest(class.name(), candidate);
    let lower = CharClass::Lower.members();
    let base = reduce(p.as_slice(), lower.len());
    let repaired: String = candidate
        .chars()
        .enumerate()
        .map(|(index, c)| {
            if class.contains(c) {
                let offset = (FORBIDDEN_INDEX_STRIDE * index) % lower.len();
                lower[(base + offset) % lower.len()] as char
            } else {
                c
            }
        })
        .collect();
    drop(Zeroizing::new(std::mem::replace(candidate, repaired)));
    tracing::trace!(class = class.name(), "purged forbidden members");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_candidate(passphrase: &str, domain: &str) -> String {
        STANDARD.encode(seed_digest(passphrase, domain).as_slice())
    }

    #[test]
    fn test_unconstrained_is_plain_base64() {
        let password = derive("hunter2", "example.com", &Constraints::default()).unwrap();
        assert_eq!(password, full_candidate("hunter2", "example.com"));
        assert_eq!(password.len(), ENCODED_LEN);
        assert!(password.ends_with('='));
    }

    #[test]
    fn test_length_only_is_prefix() {
        let constraints = Constraints::default().with_length(12);
        let password = derive("hunter2", "example.com", &constraints).unwrap();
        assert_eq!(password.len(), 12);
        assert_eq!(password, &full_candidate("hunter2", "example.com")[..12]);
    }

    #[test]
    fn test_known_answers() {
        assert_eq!(
            derive("hunter2", "example.com", &Constraints::default()).unwrap(),
            "dhovCppPBWw5+tui7ekyf6J9er7pK/HyyoedAWs50+w="
        );
        assert_eq!(
            derive("hunter2", "example.com", &Constraints::default().with_length(12)).unwrap(),
            "dhovCppPBWw5"
        );
    }

    #[test]
    fn test_known_answers_after_repair() {
        let no_special = Constraints::builder()
            .length(16)
            .require(CharClass::Digit)
            .forbid(CharClass::Special)
            .build()
            .unwrap();
        assert_eq!(
            derive("hunter2", "example.com", &no_special).unwrap(),
            "dhovCppPBWw5jtui"
        );

        let no_upper = Constraints::builder()
            .length(16)
            .require(CharClass::Digit)
            .require(CharClass::Special)
            .forbid(CharClass::Upper)
            .build()
            .unwrap();
        assert_eq!(
            derive("hunter2", "example.com", &no_upper).unwrap(),
            "dhovpppofww5+tui"
        );

        let short = Constraints::builder()
            .length(4)
            .require(CharClass::Digit)
            .require(CharClass::Special)
            .build()
            .unwrap();
        assert_eq!(derive("hunter2", "example.com", &short).unwrap(), ".ho1");
    }

    #[test]
    fn test_deterministic() {
        let constraints = Constraints::builder()
            .length(16)
            .require(CharClass::Digit)
            .require(CharClass::Special)
            .forbid(CharClass::Upper)
            .build()
            .unwrap();
        let a = derive("correct horse", "bank", &constraints).unwrap();
        let b = derive("correct horse", "bank", &constraints).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_required_digit_changes_at_most_one_position() {
        let base = Constraints::default().with_length(12);
        let with_digit = Constraints::builder()
            .length(12)
            .require(CharClass::Digit)
            .build()
            .unwrap();
        let prefix = derive("hunter2", "example.com", &base).unwrap();
        let password = derive("hunter2", "example.com", &with_digit).unwrap();

        if CharClass::Digit.appears_in(&prefix) {
            assert_eq!(password, prefix);
        } else {
            let p = salted_digest("digit", &prefix);
            let position = reduce(p.as_slice(), 12);
            let expected = CharClass::Digit.members()[reduce(p.as_slice(), 10)] as char;
            let diffs: Vec<usize> = prefix
                .chars()
                .zip(password.chars())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();
            assert!(diffs.len() <= 1);
            assert_eq!(password.chars().nth(position), Some(expected));
        }
        assert!(CharClass::Digit.appears_in(&password));
    }

    #[test]
    fn test_insert_member_follows_selector() {
        let mut candidate = String::from("abcdefghijkl");
        let p = salted_digest("upper", &candidate);
        let position = reduce(p.as_slice(), candidate.len());
        let expected = CharClass::Upper.members()[reduce(p.as_slice(), 26)] as char;

        insert_member(&mut candidate, CharClass::Upper);

        assert_eq!(candidate.len(), 12);
        assert_eq!(candidate.chars().nth(position), Some(expected));
    }

    #[test]
    fn test_purge_members_uses_index_folding() {
        let mut candidate = String::from("a+b/c=d");
        let p = salted_digest("special", &candidate);
        let base = reduce(p.as_slice(), 26);
        let lower = CharClass::Lower.members();

        purge_members(&mut candidate, CharClass::Special);

        let chars: Vec<char> = candidate.chars().collect();
        assert_eq!(chars[0], 'a');
        assert_eq!(chars[2], 'b');
        assert_eq!(chars[4], 'c');
        assert_eq!(chars[6], 'd');
        for index in [1usize, 3, 5] {
            let expected = lower[(base + 17 * index) % 26] as char;
            assert_eq!(chars[index], expected);
        }
        assert!(!CharClass::Special.appears_in(&candidate));
    }

    #[test]
    fn test_forbidden_special_keeps_other_characters() {
        let full = full_candidate("hunter2", "example.com");
        let constraints = Constraints::builder()
            .forbid(CharClass::Special)
            .build()
            .unwrap();
        let password = derive("hunter2", "example.com", &constraints).unwrap();

        assert_eq!(password.len(), full.len());
        assert!(!CharClass::Special.appears_in(&password));
        for (before, after) in full.chars().zip(password.chars()) {
            if CharClass::Special.contains(before) {
                assert!(CharClass::Lower.contains(after));
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_forbidding_lower_does_not_converge() {
        let constraints = Constraints::builder()
            .forbid(CharClass::Lower)
            .build()
            .unwrap();
        let err = derive("hunter2", "example.com", &constraints).unwrap_err();
        assert!(matches!(
            err,
            GenpassError::Unsatisfiable {
                rounds: MAX_REPAIR_ROUNDS
            }
        ));
    }

    #[test]
    fn test_too_short_for_required_classes_fails() {
        let constraints = Constraints::builder()
            .length(1)
            .require(CharClass::Digit)
            .require(CharClass::Upper)
            .build()
            .unwrap();
        let err = derive("hunter2", "example.com", &constraints).unwrap_err();
        assert!(err.is_constraint_error());
    }

    #[test]
    fn test_validate_domain() {
        assert_eq!(validate_domain("example.com").unwrap(), "example.com");
        assert!(matches!(
            validate_domain("  "),
            Err(GenpassError::InvalidInput(_))
        ));
        assert!(validate_domain("").is_err());
    }

    #[test]
    fn test_every_class_required() {
        let constraints = Constraints::builder()
            .length(8)
            .require(CharClass::Digit)
            .require(CharClass::Special)
            .require(CharClass::Upper)
            .require(CharClass::Lower)
            .build()
            .unwrap();
        let password = derive("s3cret", "mail", &constraints).unwrap();
        assert_eq!(password.len(), 8);
        assert!(constraints.satisfies(&password));
    }
}
