//! Settlement records: direct payments made outside the expense ledger.

use serde::{Deserialize, Serialize};

use crate::MemberId;

/// Money that already changed hands: `from` paid `to` this amount.
///
/// Its effect on the ledger is the mirror image of an expense-share debt:
/// it reduces what `from` owes `to`, or swings the balance the other way if
/// the payment over-corrects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: f64,
}

impl Settlement {
    #[must_use]
    pub fn new(from: impl Into<MemberId>, to: impl Into<MemberId>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}
