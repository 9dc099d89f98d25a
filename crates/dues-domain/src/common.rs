//! Shared traits and helpers for dues primitives.

/// Supplies a common contract for retrieving amounts in minor currency units.
pub trait Amounted {
    fn amount(&self) -> u64;
}

/// Sums the amounts of every item yielded by `items`, saturating at `u64::MAX`.
pub fn total_amount<'a, T, I>(items: I) -> u64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(Amounted::amount)
        .fold(0, u64::saturating_add)
}

/// Signed difference `owed - paid`, widened so large totals cannot wrap.
pub fn signed_difference(owed: u64, paid: u64) -> i64 {
    let diff = i128::from(owed) - i128::from(paid);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Clamps a signed balance to the non-negative amount still owed.
pub fn clamp_owed(balance: i64) -> u64 {
    u64::try_from(balance).unwrap_or(0)
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
