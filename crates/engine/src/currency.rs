use serde::{Deserialize, Serialize};

/// ISO-like currency code used by movements and money values.
///
/// Monedero is mono-currency (the original ledger only ever records soles),
/// but the engine models currency explicitly to keep the data model
/// future-proof.
///
/// ## Minor units
///
/// The engine stores monetary values as an `i64` number of **minor units**
/// (see [`Money`](crate::Money)). `minor_units()` returns how many decimal
/// digits are used when converting between:
/// - major units (human input/output, e.g. `10.50 PEN`)
/// - minor units (stored integers, e.g. `1050`)
///
/// Example: PEN has 2 minor units, so `10.50 PEN` ⇄ `1050`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Pen,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Pen => "PEN",
        }
    }

    /// Display prefix used when formatting amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Pen => "S/",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    ///
    /// Example: PEN uses 2 fraction digits (céntimos).
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Pen => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
