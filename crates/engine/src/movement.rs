//! Movement construction and validation.
//!
//! A [`Movement`] is an immutable record of a single financial event. It only
//! ever comes out of the validating constructors, so every movement that
//! exists satisfies the invariants: a known kind, a strictly positive amount
//! and a non-empty trimmed description.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, EngineError, Money, ResultEngine};

/// The category of a movement. The wire/domain literals are the Spanish
/// labels the application was born with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Income,
    Expense,
}

impl MovementKind {
    /// Canonical domain literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "ingreso",
            Self::Expense => "egreso",
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = EngineError;

    /// Matches the two domain literals exactly (case-sensitive).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ingreso" => Ok(Self::Income),
            "egreso" => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

/// An immutable movement: one income or expense.
///
/// Fields are private on purpose. A movement is a value, not an entity that
/// gets edited; reads go through the accessors and nothing can mutate a field
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    id: Uuid,
    kind: MovementKind,
    amount: Money,
    description: String,
    currency: Currency,
    created_at: DateTime<Utc>,
}

impl Movement {
    /// Builds a movement from already-typed parts.
    ///
    /// Checks, in order:
    /// 1. `amount` strictly positive, otherwise [`EngineError::InvalidAmount`]
    /// 2. `description` non-empty after trimming, otherwise
    ///    [`EngineError::EmptyDescription`]
    ///
    /// On success the description is stored trimmed and `created_at` is the
    /// current instant. There is no partial construction: the first failing
    /// check wins and nothing is built.
    pub fn new(kind: MovementKind, amount: Money, description: &str) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::EmptyDescription);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description: description.to_string(),
            currency: Currency::default(),
            created_at: Utc::now(),
        })
    }

    /// Builds a movement from the three raw values an input collector
    /// gathers.
    ///
    /// Validation order, first failing check wins:
    /// 1. `kind` must be `"ingreso"` or `"egreso"` exactly →
    ///    [`EngineError::InvalidKind`]
    /// 2. `amount` must parse as a number and be strictly positive →
    ///    [`EngineError::InvalidAmount`]
    /// 3. `description` must be non-empty after trimming →
    ///    [`EngineError::EmptyDescription`]
    pub fn from_raw(kind: &str, amount: &str, description: &str) -> ResultEngine<Self> {
        let kind = MovementKind::try_from(kind)?;
        let amount: Money = amount.parse()?;
        Self::new(kind, amount, description)
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    /// The recorded amount. Always strictly positive; the direction lives in
    /// the kind.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The amount as a signed value: positive for income, negative for
    /// expense. This is what balance folds consume.
    #[must_use]
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense => -self.amount,
        }
    }

    /// Renders the amount with its direction sign and the currency prefix:
    /// `+S/500.00` for an income, `-S/120.50` for an expense.
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        let sign = match self.kind {
            MovementKind::Income => '+',
            MovementKind::Expense => '-',
        };
        format!("{sign}{}", self.amount.format(self.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_income() {
        let movement =
            Movement::new(MovementKind::Income, Money::new(50_000), "Salario").unwrap();

        assert_eq!(movement.kind(), MovementKind::Income);
        assert_eq!(movement.amount(), Money::new(50_000));
        assert_eq!(movement.description(), "Salario");
        assert_eq!(movement.signed_amount(), Money::new(50_000));
    }

    #[test]
    fn new_trims_description() {
        let movement =
            Movement::new(MovementKind::Expense, Money::new(1200), "  Almuerzo  ").unwrap();

        assert_eq!(movement.description(), "Almuerzo");
        assert_eq!(movement.signed_amount(), Money::new(-1200));
    }

    #[test]
    fn from_raw_parses_all_three_values() {
        let movement = Movement::from_raw("egreso", "120.50", "Compras").unwrap();

        assert_eq!(movement.kind(), MovementKind::Expense);
        assert_eq!(movement.amount(), Money::new(12_050));
        assert_eq!(movement.description(), "Compras");
    }

    #[test]
    fn kind_literals_are_case_sensitive() {
        assert_eq!(
            MovementKind::try_from("Ingreso").unwrap_err(),
            EngineError::InvalidKind("Ingreso".to_string())
        );
        assert_eq!(
            MovementKind::try_from("EGRESO").unwrap_err(),
            EngineError::InvalidKind("EGRESO".to_string())
        );
        assert_eq!(MovementKind::try_from("ingreso").unwrap(), MovementKind::Income);
        assert_eq!(MovementKind::try_from("egreso").unwrap(), MovementKind::Expense);
    }

    #[test]
    fn from_raw_rejects_unknown_kind_first() {
        // A bad kind wins even when the other two values are also bad.
        let err = Movement::from_raw("transferencia", "abc", "  ").unwrap_err();
        assert_eq!(err, EngineError::InvalidKind("transferencia".to_string()));
    }

    #[test]
    fn from_raw_rejects_non_numeric_amount() {
        let err = Movement::from_raw("ingreso", "abc", "Salario").unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    #[test]
    fn from_raw_rejects_non_positive_amount() {
        for raw in ["0", "-5", "-0.01"] {
            let err = Movement::from_raw("ingreso", raw, "Salario").unwrap_err();
            assert!(matches!(err, EngineError::InvalidAmount(_)), "{raw}");
        }
    }

    #[test]
    fn from_raw_rejects_blank_description() {
        for raw in ["", "   ", "\t\n"] {
            let err = Movement::from_raw("egreso", "10", raw).unwrap_err();
            assert_eq!(err, EngineError::EmptyDescription);
        }
    }

    #[test]
    fn formatted_amount_signs_by_kind() {
        let income = Movement::new(MovementKind::Income, Money::new(10_000), "Venta").unwrap();
        let expense = Movement::new(MovementKind::Expense, Money::new(4000), "Taxi").unwrap();

        assert_eq!(income.formatted_amount(), "+S/100.00");
        assert_eq!(expense.formatted_amount(), "-S/40.00");
    }
}
