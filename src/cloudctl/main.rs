//! The `cloudctl` binary. All behavior lives in the library; this only runs
//! the CLI and turns a failure into an exit code.

use cloudui::{Ui, STANDARD_THEME};

mod cli;

fn main() {
    let mut ui = Ui::new(STANDARD_THEME.clone());
    if let Err(e) = cli::run(&mut ui) {
        ui.display_error(&e);
        std::process::exit(1);
    }
}
