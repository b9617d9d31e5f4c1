//! Line-oriented input collection for the interactive session.
//!
//! This module only gathers raw strings; validation belongs to the engine.

use std::io::{self, BufRead, Write};

/// Keyword that ends the session when typed at the kind prompt.
pub(crate) const QUIT: &str = "salir";

/// The three raw values of a movement, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawMovement {
    pub kind: String,
    pub amount: String,
    pub description: String,
}

/// Prompts for one movement.
///
/// Returns `None` when the user ends the session, either with the quit
/// keyword at the kind prompt or with end-of-input at any prompt.
pub(crate) fn collect_movement() -> io::Result<Option<RawMovement>> {
    let Some(kind) = read_line("¿Es un ingreso o egreso? (ingreso/egreso): ")? else {
        return Ok(None);
    };
    if kind.trim() == QUIT {
        return Ok(None);
    }

    let Some(amount) = read_line("Ingrese el monto: ")? else {
        return Ok(None);
    };

    let Some(description) = read_line("Ingrese una descripción: ")? else {
        return Ok(None);
    };

    Ok(Some(RawMovement {
        kind,
        amount,
        description,
    }))
}

/// Writes the prompt, reads one line and strips the trailing newline.
///
/// Returns `None` on end-of-input. The value itself is not trimmed; the
/// engine decides what whitespace means.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let mut out = io::stdout();
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        out.write_all(b"\n")?;
        return Ok(None);
    }

    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}
