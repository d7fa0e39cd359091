// Pattern 1: Closure Capture Modes
//
// Expected output:
//   Object erstellt
//   Objekt kopiert
//   Hello world
//   5
//   Hello object
//   Hello object
//   Objekt zerstoert
//   Objekt zerstoert

use lambda_lifecycle::{demo, logging, Journal, Settings};
use std::process;

fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(err.exit_code());
        }
    };
    logging::init(&settings.log_filter);

    let journal = Journal::stdout();
    demo::run(&journal, &settings);

    if let Err(err) = demo::verify(&journal) {
        tracing::error!(%err, "lifecycle check failed");
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}
