//! otledger main entrypoint.

use otledger::run;
use otledger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
