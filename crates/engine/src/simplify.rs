//! Greedy debt simplification over a net-balance map.

use serde::{Deserialize, Serialize};

use crate::{EngineError, MemberId, NetBalances, ResultEngine, money};

/// One suggested payment that helps settle the group: `from` should pay `to`
/// this amount. Always strictly greater than one cent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: f64,
}

/// Reduces a net-balance map to a small list of transfers that settle it.
///
/// Balances are rounded to cents and partitioned into creditors and debtors;
/// members within one cent of zero are already settled and never appear in
/// the output. Both sides are sorted by magnitude descending (largest-first
/// tends to need fewer transfers) with ties broken by member id, so the
/// result is deterministic even though map iteration order is not. A
/// two-cursor walk then matches the current largest creditor against the
/// current largest debtor, emitting a transfer for `min` of the two
/// remainders whenever that exceeds one cent.
///
/// Executing every returned transfer drives all balances to within one cent
/// of zero, in at most `creditors + debtors - 1` transfers. The greedy
/// matching is not guaranteed to be globally transaction-minimal.
///
/// One-sided input (only creditors or only debtors, a caller-side data
/// inconsistency) produces no transfers for the unmatched side.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteAmount`] if any balance is NaN or
/// infinite. Callers are expected to exclude those upstream; the error keeps
/// bad input from silently turning into nonsense transfers.
pub fn simplify_debts(net_balances: &NetBalances) -> ResultEngine<Vec<Transfer>> {
    if let Some((member, amount)) = net_balances.iter().find(|(_, a)| !a.is_finite()) {
        return Err(EngineError::NonFiniteAmount(format!(
            "balance for {member} is {amount}"
        )));
    }

    // Remaining amounts in integer cents, positive magnitudes on both sides.
    let mut creditors: Vec<(&MemberId, i64)> = Vec::new();
    let mut debtors: Vec<(&MemberId, i64)> = Vec::new();

    for (member, balance) in net_balances {
        let minor = money::to_minor(*balance);
        if minor > 1 {
            creditors.push((member, minor));
        } else if minor < -1 {
            debtors.push((member, -minor));
        }
    }

    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut transfers = Vec::new();
    let mut ci = 0;
    let mut di = 0;

    while ci < creditors.len() && di < debtors.len() {
        let amount = creditors[ci].1.min(debtors[di].1);

        if amount > 1 {
            transfers.push(Transfer {
                from: debtors[di].0.clone(),
                to: creditors[ci].0.clone(),
                amount: money::from_minor(amount),
            });
        }

        creditors[ci].1 -= amount;
        debtors[di].1 -= amount;

        if creditors[ci].1 < 1 {
            ci += 1;
        }
        if debtors[di].1 < 1 {
            di += 1;
        }
    }

    tracing::debug!(
        members = net_balances.len(),
        transfers = transfers.len(),
        "simplified debts"
    );

    Ok(transfers)
}
