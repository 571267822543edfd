//! Quickly move i3 workspaces to a specified output.

use i3ws::cli::{self, MoveArgs};
use i3ws::i3::wm::I3Wm;
use i3ws::mover;
use log::error;

fn main() {
    cli::init_logging();

    let options = match cli::parse_args::<MoveArgs>().into_options() {
        Ok(options) => options,
        Err(e) => {
            error!("invalid workspace list: {}", e);
            std::process::exit(1);
        }
    };

    let wm = I3Wm::new();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = mover::move_workspaces(&wm, &options, &mut stdout) {
        error!("{}", e);
        std::process::exit(1);
    }
}
