//! resto-replay entrypoint.

use restotools::run_replay;
use restotools::ui::messages::error;

fn main() {
    if let Err(e) = run_replay() {
        error(e);
        std::process::exit(1);
    }
}
