//! SHA-256 helpers shared by seeding and the content-keyed selector.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Size of every digest produced here.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 of `bytes`.
pub fn sha256(bytes: &[u8]) -> Zeroizing<[u8; DIGEST_LEN]> {
    let mut out = Zeroizing::new([0u8; DIGEST_LEN]);
    out.copy_from_slice(&Sha256::digest(bytes));
    out
}

/// Seed digest over `"{passphrase} {domain}\n"`.
///
/// The formatted seed is wiped as soon as it has been hashed.
pub fn seed_digest(passphrase: &str, domain: &str) -> Zeroizing<[u8; DIGEST_LEN]> {
    let seed = Zeroizing::new(format!("{} {}\n", passphrase, domain));
    sha256(seed.as_bytes())
}

/// Digest keying one pseudo-random selection: `"salt for {label} {candidate}"`.
pub fn salted_digest(label: &str, candidate: &str) -> Zeroizing<[u8; DIGEST_LEN]> {
    let salt = Zeroizing::new(format!("salt for {} {}", label, candidate));
    sha256(salt.as_bytes())
}

/// Reduce a digest, read as one big-endian unsigned integer, modulo `modulus`.
///
/// Exact over the full width of the digest. A zero modulus yields 0.
pub fn reduce(digest: &[u8], modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    let m = modulus as u128;
    // acc < m <= 2^64, so acc * 256 + 255 stays well inside u128.
    let rem = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % m);
    rem as usize
}
