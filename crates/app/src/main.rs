use std::error::Error;

use clap::Parser;
use engine::{Ledger, Movement};

mod prompt;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "monedero")]
#[command(about = "Registro interactivo de ingresos y egresos")]
struct Cli {
    /// Configuration file (TOML), also read from `MONEDERO_CONFIG`.
    #[arg(long, env = "MONEDERO_CONFIG", default_value = "settings")]
    config: String,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "monedero={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    run_session()
}

/// The interactive capture loop: collect raw values, let the engine validate
/// and construct, append on success, report on failure.
///
/// The renderer only sees movements that were stored; a rejected input never
/// touches the ledger and the user is simply re-prompted.
fn run_session() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut ledger = Ledger::new();

    println!("Monedero. Escriba \"{}\" para terminar.", prompt::QUIT);

    while let Some(raw) = prompt::collect_movement()? {
        match Movement::from_raw(&raw.kind, &raw.amount, &raw.description) {
            Ok(movement) => {
                let stored = ledger.append(movement);
                tracing::info!(
                    kind = stored.kind().as_str(),
                    amount = stored.amount().minor(),
                    "movement stored"
                );
                println!("{}", render::movement_line(stored));
                println!("{}", render::balance_line(ledger.balance()));
            }
            Err(err) => {
                tracing::warn!("movement rejected: {err}");
                eprintln!("{}", render::error_line(&err));
            }
        }
    }

    if !ledger.is_empty() {
        println!("{}", render::summary(&ledger.statistics()));
    }

    Ok(())
}
