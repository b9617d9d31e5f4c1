//! Console rendering for stored movements, balances and validation errors.
//!
//! User-facing strings are Spanish, matching the domain literals; everything
//! the engine reports is mapped here before it reaches the user.

use engine::{Currency, EngineError, LedgerStatistics, Money, Movement};

/// One line per stored movement: date, kind label, signed amount,
/// description.
pub(crate) fn movement_line(movement: &Movement) -> String {
    format!(
        "{} • {} • {} • {}",
        movement.created_at().format("%d/%m/%Y"),
        movement.kind().as_str().to_uppercase(),
        movement.formatted_amount(),
        movement.description()
    )
}

pub(crate) fn balance_line(balance: Money) -> String {
    format!("Balance total: {}", balance.format(Currency::Pen))
}

/// End-of-session totals.
pub(crate) fn summary(stats: &LedgerStatistics) -> String {
    format!(
        "Resumen de la sesión\nMovimientos: {}\nTotal ingresos: {}\nTotal egresos: {}\nBalance: {}",
        stats.movements,
        stats.total_income.format(Currency::Pen),
        stats.total_expense.format(Currency::Pen),
        stats.balance.format(Currency::Pen),
    )
}

/// Maps a validation failure to the message shown to the user.
pub(crate) fn error_line(err: &EngineError) -> String {
    let message = match err {
        EngineError::InvalidKind(_) => {
            "Tipo de movimiento inválido. Use \"ingreso\" o \"egreso\""
        }
        EngineError::InvalidAmount(_) => "El monto debe ser un número positivo",
        EngineError::EmptyDescription => "La descripción no puede estar vacía",
    };
    format!("Error: {message}")
}

#[cfg(test)]
mod tests {
    use engine::{Money, Movement, MovementKind};

    use super::*;

    #[test]
    fn movement_line_shows_label_amount_and_description() {
        let movement =
            Movement::new(MovementKind::Income, Money::new(50_000), "Salario").unwrap();
        let line = movement_line(&movement);

        assert!(line.contains("INGRESO"));
        assert!(line.contains("+S/500.00"));
        assert!(line.ends_with("Salario"));
    }

    #[test]
    fn expense_line_is_negative() {
        let movement =
            Movement::new(MovementKind::Expense, Money::new(12_050), "Compras").unwrap();
        let line = movement_line(&movement);

        assert!(line.contains("EGRESO"));
        assert!(line.contains("-S/120.50"));
    }

    #[test]
    fn balance_line_uses_the_currency_prefix() {
        assert_eq!(balance_line(Money::new(37_950)), "Balance total: S/379.50");
        assert_eq!(balance_line(Money::new(-500)), "Balance total: -S/5.00");
    }

    #[test]
    fn error_lines_match_each_kind() {
        let kind = EngineError::InvalidKind("retiro".to_string());
        let amount = EngineError::InvalidAmount("invalid amount".to_string());

        assert!(error_line(&kind).contains("Tipo de movimiento inválido"));
        assert!(error_line(&amount).contains("número positivo"));
        assert!(error_line(&EngineError::EmptyDescription).contains("descripción"));
    }

    #[test]
    fn summary_lists_totals() {
        let stats = LedgerStatistics {
            balance: Money::new(35_950),
            total_income: Money::new(50_000),
            total_expense: Money::new(14_050),
            movements: 3,
        };
        let text = summary(&stats);

        assert!(text.contains("Movimientos: 3"));
        assert!(text.contains("Total ingresos: S/500.00"));
        assert!(text.contains("Total egresos: S/140.50"));
        assert!(text.contains("Balance: S/359.50"));
    }
}
