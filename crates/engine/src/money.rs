//! Shared cent rounding and tolerance helpers.
//!
//! Monetary values cross the engine boundary as `f64` major units (the shape
//! the surrounding application stores and displays). Every tolerance
//! comparison in the engine goes through these helpers so the one-cent
//! threshold behaves identically in aggregation and simplification; the
//! simplifier itself works on integer cents to keep its arithmetic exact.
//!
//! # Examples
//!
//! ```rust
//! use engine::money;
//!
//! assert_eq!(money::round_to_cents(12.344), 12.34);
//! assert_eq!(money::to_minor(10.50), 1050);
//! assert!(money::is_settled(0.004));
//! ```

/// One cent: the absolute tolerance below which a balance counts as settled.
pub const CENT: f64 = 0.01;

/// Rounds an amount to 2 decimal places, half away from zero.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Converts a major-unit amount to integer cents, rounding half away from
/// zero.
#[must_use]
pub fn to_minor(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Converts integer cents back to a major-unit amount.
#[must_use]
pub fn from_minor(minor: i64) -> f64 {
    minor as f64 / 100.0
}

/// Returns `true` if the amount rounds to within one cent of zero.
#[must_use]
pub fn is_settled(amount: f64) -> bool {
    round_to_cents(amount).abs() <= CENT
}
