//! Deterministic settlement digests.
//!
//! The engine is a pure function, so independent callers computing the
//! same expense history must agree on the result. The digest is a
//! SHA-256 over the result at cent precision — balance maps are hashed
//! in sorted name order so the digest is independent of map iteration
//! order, while debts and transactions are hashed in emission order.
//! It doubles as a memoization key for by-value caching.

use opensplit_types::{Participant, SettlementResult, money};
use sha2::{Digest, Sha256};

fn hash_participant(hasher: &mut Sha256, person: &Participant) {
    hasher.update((person.as_str().len() as u64).to_le_bytes());
    hasher.update(person.as_str().as_bytes());
}

fn hash_entry(hasher: &mut Sha256, from: &Participant, to: &Participant, amount: f64) {
    hash_participant(hasher, from);
    hash_participant(hasher, to);
    hasher.update(money::cents(amount).to_le_bytes());
}

/// Compute the digest of a settlement result.
///
/// The same result (at cent precision) always produces the same digest,
/// regardless of balance map iteration order.
#[must_use]
pub fn settlement_digest(result: &SettlementResult) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"opensplit:settlement:v1:");

    let mut balances: Vec<(&Participant, f64)> = result
        .balances
        .iter()
        .map(|(person, balance)| (person, *balance))
        .collect();
    balances.sort_by(|a, b| a.0.cmp(b.0));

    hasher.update((balances.len() as u64).to_le_bytes());
    for (person, balance) in balances {
        hash_participant(&mut hasher, person);
        hasher.update(money::cents(balance).to_le_bytes());
    }

    hasher.update((result.original_debts.len() as u64).to_le_bytes());
    for debt in &result.original_debts {
        hash_entry(&mut hasher, &debt.from, &debt.to, debt.amount);
    }

    hasher.update((result.transactions.len() as u64).to_le_bytes());
    for tx in &result.transactions {
        hash_entry(&mut hasher, &tx.from, &tx.to, tx.amount);
    }

    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Verify that a result matches an expected digest.
#[must_use]
pub fn verify_settlement_digest(result: &SettlementResult, expected: &[u8; 32]) -> bool {
    settlement_digest(result) == *expected
}

/// Hex rendering of a digest, for logs and cross-implementation checks.
#[must_use]
pub fn digest_hex(digest: &[u8; 32]) -> String {
    hex::encode(digest)
}
