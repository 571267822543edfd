//! Change to a new i3 workspace.

use i3ws::allocator;
use i3ws::cli::{self, NewArgs};
use i3ws::config::Config;
use i3ws::i3::wm::I3Wm;
use log::{error, info};

fn main() {
    cli::init_logging();

    let args = cli::parse_args::<NewArgs>();
    let config = Config::load_default();
    let options = args.into_options(&config.new);

    let wm = I3Wm::new();
    match allocator::new_workspace(&wm, &options) {
        Ok(number) => info!("switched to workspace {}", number),
        Err(e) => {
            error!("could not create new workspace: {}", e);
            std::process::exit(1);
        }
    }
}
