// Pattern 2: Passing Arguments by Value vs by Reference
use lambda_lifecycle::{logging, passing, Journal, LifecycleError};
use std::process;

fn main() {
    logging::init("warn");

    let journal = Journal::stdout();
    passing::run(&journal);

    let actual = journal.counts();
    if actual != passing::EXPECTED_COUNTS {
        let err = LifecycleError::Unbalanced {
            expected: passing::EXPECTED_COUNTS,
            actual,
        };
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}
