//! Show an input prompt and rename the focused i3 workspace.

use i3ws::cli::{self, RenameArgs};
use i3ws::config::Config;
use i3ws::i3::wm::I3Wm;
use i3ws::renamer;
use log::error;

fn main() {
    cli::init_logging();

    let args = cli::parse_args::<RenameArgs>();
    let config = Config::load_default();
    let options = args.into_options(&config.rename);

    let wm = I3Wm::new();
    if let Err(e) = renamer::rename_workspace(&wm, &options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
