//! Balance aggregation: folds expenses and settlements into net balances.

use std::collections::HashMap;

use crate::{Expense, MemberId, Settlement, money};

/// Net amount per member.
///
/// Positive = net creditor (the group owes them), negative = net debtor.
/// The map is sparse: a member missing from it has a zero balance.
pub type NetBalances = HashMap<MemberId, f64>;

/// Folds expenses and settlements into one net balance per member.
///
/// For each expense the payer is credited the full amount up front and every
/// split participant is debited their share, so a payer who also holds a
/// split nets `amount - own_share`. A settlement credits the member who paid
/// (`from`) and debits the receiver (`to`), paying down the debt between
/// them. Expenses without a payer are skipped entirely.
///
/// No rounding or tolerance filtering happens here; that belongs to
/// [`simplify_debts`](crate::simplify_debts) and to presentation code.
pub fn compute_net_balances(expenses: &[Expense], settlements: &[Settlement]) -> NetBalances {
    let mut net = NetBalances::new();

    for expense in expenses {
        let Some(payer) = &expense.payer else { continue };
        *net.entry(payer.clone()).or_insert(0.0) += expense.amount;
        for split in &expense.splits {
            *net.entry(split.member.clone()).or_insert(0.0) -= split.share;
        }
    }

    for settlement in settlements {
        *net.entry(settlement.from.clone()).or_insert(0.0) += settlement.amount;
        *net.entry(settlement.to.clone()).or_insert(0.0) -= settlement.amount;
    }

    tracing::debug!(
        expenses = expenses.len(),
        settlements = settlements.len(),
        members = net.len(),
        "computed net balances"
    );

    net
}

/// Balances relative to one member: how much each *other* member owes
/// `viewer` (positive) or is owed by them (negative).
///
/// Only expense shares linking the viewer to someone else move an entry:
/// shares owed to the viewer as payer count for, shares the viewer owes to
/// another payer count against. Settlements involving the viewer adjust the
/// counterparty's entry in the same way. Entries that end up within one cent
/// of zero are dropped; the rest are rounded to cents for display.
pub fn compute_balances_toward(
    viewer: &MemberId,
    expenses: &[Expense],
    settlements: &[Settlement],
) -> NetBalances {
    let mut net = NetBalances::new();

    for expense in expenses {
        let Some(payer) = &expense.payer else { continue };
        for split in &expense.splits {
            if payer == viewer && split.member != *viewer {
                *net.entry(split.member.clone()).or_insert(0.0) += split.share;
            } else if payer != viewer && split.member == *viewer {
                *net.entry(payer.clone()).or_insert(0.0) -= split.share;
            }
        }
    }

    for settlement in settlements {
        if settlement.from == *viewer {
            // Viewer paid them: reduces what the viewer owes.
            *net.entry(settlement.to.clone()).or_insert(0.0) += settlement.amount;
        } else if settlement.to == *viewer {
            // They paid the viewer: reduces what they owe.
            *net.entry(settlement.from.clone()).or_insert(0.0) -= settlement.amount;
        }
    }

    net.retain(|_, amount| !money::is_settled(*amount));
    for amount in net.values_mut() {
        *amount = money::round_to_cents(*amount);
    }

    net
}
