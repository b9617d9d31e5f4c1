//! The append-only movement store and its derived balance.

use crate::{Money, Movement, MovementKind};

/// An ordered, append-only sequence of movements.
///
/// The ledger owns its movements exclusively: there is no way to remove or
/// edit a stored movement, and the only view handed out is read-only.
/// Insertion order is preserved for display; the balance is not stored but
/// recomputed from the full sequence on demand.
///
/// One ledger lives for one session. It starts empty and is dropped with the
/// process; nothing is persisted.
#[derive(Debug, Default)]
pub struct Ledger {
    movements: Vec<Movement>,
}

/// Totals derived from a ledger snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerStatistics {
    pub balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
    pub movements: usize,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            movements: Vec::new(),
        }
    }

    /// Appends a movement to the end of the sequence.
    ///
    /// Always succeeds: validity is a precondition enforced by the
    /// [`Movement`] constructors. Subsequent [`balance`](Self::balance)
    /// queries reflect the new entry.
    pub fn append(&mut self, movement: Movement) -> &Movement {
        self.movements.push(movement);
        &self.movements[self.movements.len() - 1]
    }

    /// The derived balance: income total minus expense total.
    ///
    /// Pure function of the current contents, O(n), `Money::ZERO` for an
    /// empty ledger. Addition over signed amounts is commutative, so the
    /// result does not depend on summation order.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.movements
            .iter()
            .map(Movement::signed_amount)
            .fold(Money::ZERO, |total, amount| total + amount)
    }

    /// Read-only view of the stored movements, in insertion order.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Returns session totals: balance, income total, expense total and the
    /// number of stored movements.
    #[must_use]
    pub fn statistics(&self) -> LedgerStatistics {
        let mut total_income = Money::ZERO;
        let mut total_expense = Money::ZERO;

        for movement in &self.movements {
            match movement.kind() {
                MovementKind::Income => total_income += movement.amount(),
                MovementKind::Expense => total_expense += movement.amount(),
            }
        }

        LedgerStatistics {
            balance: total_income - total_expense,
            total_income,
            total_expense,
            movements: self.movements.len(),
        }
    }
}
