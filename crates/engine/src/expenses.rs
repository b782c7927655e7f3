//! Expense line items: one payer, one or more owed shares.

use serde::{Deserialize, Serialize};

use crate::{MemberId, money};

/// One participant's owed share of a specific expense.
///
/// A member appears at most once in an expense's split set; the payer may or
/// may not also hold a split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub member: MemberId,
    pub share: f64,
}

impl Split {
    #[must_use]
    pub fn new(member: impl Into<MemberId>, share: f64) -> Self {
        Self {
            member: member.into(),
            share,
        }
    }
}

/// A shared cost paid by one member and owed by its split participants.
///
/// Callers are expected to keep the split shares summing to `amount` (minor
/// floating-point drift is tolerated downstream). `payer == None` means the
/// payer account is unknown or was deleted; aggregation skips such expenses
/// entirely so a missing account cannot corrupt the rest of the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub payer: Option<MemberId>,
    pub amount: f64,
    pub splits: Vec<Split>,
}

impl Expense {
    #[must_use]
    pub fn new(payer: Option<MemberId>, amount: f64, splits: Vec<Split>) -> Self {
        Self {
            payer,
            amount,
            splits,
        }
    }
}

/// Splits `total` into `count` equal shares in cents.
///
/// The cent remainder is distributed one cent at a time over the first
/// shares, so the shares always sum back to the cent-rounded total.
/// `count == 0` yields an empty vector.
///
/// ```rust
/// use engine::equal_shares;
///
/// assert_eq!(equal_shares(100.0, 3), vec![33.34, 33.33, 33.33]);
/// ```
#[must_use]
pub fn equal_shares(total: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let total_minor = money::to_minor(total);
    let count = count as i64;
    let base = total_minor.div_euclid(count);
    let remainder = total_minor.rem_euclid(count);

    (0..count)
        .map(|i| money::from_minor(base + i64::from(i < remainder)))
        .collect()
}
