//! resto-logs entrypoint.

use restotools::run_logs;
use restotools::ui::messages::error;

fn main() {
    if let Err(e) = run_logs() {
        error(e);
        std::process::exit(1);
    }
}
