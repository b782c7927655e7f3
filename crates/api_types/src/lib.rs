//! Wire-facing request/response shapes for the ledger engine.
//!
//! The surrounding application (HTTP handlers, bots, background jobs) speaks
//! these DTOs; `engine` only knows its own value types. The conversions live
//! here so every caller maps the same way.

use serde::{Deserialize, Serialize};

pub mod ledger {
    use super::*;

    /// One participant's owed share of an expense, as stored by the caller.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SplitInput {
        pub member_id: String,
        pub share: f64,
    }

    /// An expense line item as supplied by the persistence layer.
    ///
    /// `payer_id` is `None` when the payer account was deleted; the engine
    /// skips such expenses instead of failing.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseInput {
        pub payer_id: Option<String>,
        pub amount: f64,
        pub splits: Vec<SplitInput>,
    }

    /// A direct payment between two members recorded outside the expense
    /// ledger.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementInput {
        pub from_member: String,
        pub to_member: String,
        pub amount: f64,
    }

    impl From<SplitInput> for engine::Split {
        fn from(value: SplitInput) -> Self {
            engine::Split::new(value.member_id, value.share)
        }
    }

    impl From<ExpenseInput> for engine::Expense {
        fn from(value: ExpenseInput) -> Self {
            engine::Expense::new(
                value.payer_id.map(engine::MemberId::from),
                value.amount,
                value.splits.into_iter().map(Into::into).collect(),
            )
        }
    }

    impl From<SettlementInput> for engine::Settlement {
        fn from(value: SettlementInput) -> Self {
            engine::Settlement::new(value.from_member, value.to_member, value.amount)
        }
    }
}

pub mod balance {
    use std::collections::BTreeMap;

    use super::*;

    /// Net balance per member id. Sparse: an absent member owes nothing and
    /// is owed nothing. Keyed by a `BTreeMap` so the JSON output is stable.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct BalancesResponse {
        pub balances: BTreeMap<String, f64>,
    }

    impl From<engine::NetBalances> for BalancesResponse {
        fn from(net: engine::NetBalances) -> Self {
            Self {
                balances: net
                    .into_iter()
                    .map(|(member, amount)| (member.into(), amount))
                    .collect(),
            }
        }
    }

    /// One suggested payment: `from` should pay `to` this amount.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransferView {
        pub from: String,
        pub to: String,
        pub amount: f64,
    }

    /// The transfer list that settles a group, in emission order.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct SettleUpResponse {
        pub transfers: Vec<TransferView>,
    }

    impl From<engine::Transfer> for TransferView {
        fn from(value: engine::Transfer) -> Self {
            Self {
                from: value.from.into(),
                to: value.to.into(),
                amount: value.amount,
            }
        }
    }

    impl From<Vec<engine::Transfer>> for SettleUpResponse {
        fn from(transfers: Vec<engine::Transfer>) -> Self {
            Self {
                transfers: transfers.into_iter().map(Into::into).collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::balance::{BalancesResponse, SettleUpResponse};
    use super::ledger::{ExpenseInput, SettlementInput, SplitInput};

    #[test]
    fn expense_input_deserializes_with_null_payer() {
        let json = r#"{
            "payer_id": null,
            "amount": 100.0,
            "splits": [{ "member_id": "a", "share": 100.0 }]
        }"#;
        let input: ExpenseInput = serde_json::from_str(json).unwrap();
        let expense: engine::Expense = input.into();
        assert!(expense.payer.is_none());
        assert_eq!(expense.splits.len(), 1);
    }

    #[test]
    fn inputs_flow_through_the_engine_into_responses() {
        let expenses: Vec<engine::Expense> = vec![
            ExpenseInput {
                payer_id: Some("a".to_string()),
                amount: 100.0,
                splits: vec![
                    SplitInput {
                        member_id: "a".to_string(),
                        share: 50.0,
                    },
                    SplitInput {
                        member_id: "b".to_string(),
                        share: 50.0,
                    },
                ],
            }
            .into(),
        ];
        let settlements: Vec<engine::Settlement> = vec![
            SettlementInput {
                from_member: "b".to_string(),
                to_member: "a".to_string(),
                amount: 20.0,
            }
            .into(),
        ];

        let net = engine::compute_net_balances(&expenses, &settlements);
        let transfers = engine::simplify_debts(&net).unwrap();

        let balances = BalancesResponse::from(net);
        assert_eq!(balances.balances["a"], 30.0);
        assert_eq!(balances.balances["b"], -30.0);

        let settle_up = SettleUpResponse::from(transfers);
        assert_eq!(settle_up.transfers.len(), 1);
        assert_eq!(settle_up.transfers[0].from, "b");
        assert_eq!(settle_up.transfers[0].to, "a");
        assert_eq!(settle_up.transfers[0].amount, 30.0);
    }

    #[test]
    fn balances_response_serializes_with_stable_key_order() {
        let mut net = engine::NetBalances::new();
        net.insert(engine::MemberId::from("zoe"), -5.0);
        net.insert(engine::MemberId::from("amy"), 5.0);

        let response = BalancesResponse::from(net);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"balances":{"amy":5.0,"zoe":-5.0}}"#);
    }
}
