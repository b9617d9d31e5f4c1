//! Movement validation and ledger aggregation.
//!
//! The engine owns the two pieces with real invariants: constructing a valid
//! [`Movement`] (or failing with a specific [`EngineError`]) and keeping an
//! append-only [`Ledger`] whose balance is derived on demand. Everything
//! around it (collecting input, rendering) lives in the application crate.

pub use currency::Currency;
pub use error::EngineError;
pub use ledger::{Ledger, LedgerStatistics};
pub use money::Money;
pub use movement::{Movement, MovementKind};

mod currency;
mod error;
mod ledger;
mod money;
mod movement;

type ResultEngine<T> = Result<T, EngineError>;
