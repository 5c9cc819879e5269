//! Hashing utilities for log and array comparison.
//!
//! Uses FNV-1a for fast, deterministic fingerprints. These hashes are not
//! cryptographically secure; they are used for fast equality checks when
//! comparing logs.

use sortviz_core::{Action, ActionLog, Value};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn fnv1a_values(mut hash: u64, values: &[Value]) -> u64 {
    for &v in values {
        hash = fnv1a_u32(hash, v);
    }
    hash
}

fn kind_tag(action: &Action) -> u8 {
    match action {
        Action::Compare { .. } => 0,
        Action::Swap { .. } => 1,
        Action::Overwrite { .. } => 2,
        Action::SetSorted { .. } => 3,
    }
}

/// Fingerprint of a log's action sequence.
///
/// Folds in the input length, then for each action its kind, indices and
/// snapshot. The algorithm and the cumulative totals are not hashed: two
/// logs with the same actions hash equal.
pub fn log_hash(log: &ActionLog) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, log.input_len() as u64);
    for action in log.actions() {
        hash = fnv1a_byte(hash, kind_tag(action));
        for index in action.indices() {
            hash = fnv1a_u64(hash, index as u64);
        }
        if let Some(snapshot) = action.snapshot() {
            hash = fnv1a_values(hash, snapshot);
        }
    }
    hash
}

/// Fingerprint of an array.
///
/// Returns `FNV_OFFSET` for an empty array.
pub fn values_hash(values: &[Value]) -> u64 {
    fnv1a_values(FNV_OFFSET, values)
}
