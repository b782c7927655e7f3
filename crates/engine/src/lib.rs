//! Pure balance and debt-simplification engine for shared group ledgers.
//!
//! The engine consumes plain expense line items ([`Expense`]) and settlement
//! records ([`Settlement`]) supplied by a persistence layer, folds them into
//! one net balance per member ([`compute_net_balances`]), and reduces a
//! net-balance map into a small list of pairwise transfers that settle the
//! group ([`simplify_debts`]).
//!
//! Both operations are synchronous, side-effect-free functions over borrowed
//! input: no I/O, no shared state, safe to call concurrently. Storage, HTTP
//! and presentation belong to the surrounding application, not here.

pub use balances::{NetBalances, compute_balances_toward, compute_net_balances};
pub use error::EngineError;
pub use expenses::{Expense, Split, equal_shares};
pub use members::MemberId;
pub use settlements::Settlement;
pub use simplify::{Transfer, simplify_debts};

mod balances;
mod error;
mod expenses;
mod members;
pub mod money;
mod settlements;
mod simplify;

pub type ResultEngine<T> = Result<T, EngineError>;
