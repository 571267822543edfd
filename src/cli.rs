//! Command-line surfaces of the three tools.
//!
//! Each binary parses its arguments here, merges them with the
//! [`Config`](crate::config::Config) defaults and hands an immutable options
//! value to its pipeline.

use crate::allocator::NewOptions;
use crate::config::{NewConfig, RenameConfig};
use crate::model::WorkspaceNum;
use crate::mover::MoveOptions;
use crate::renamer::RenameOptions;
use crate::workspaces::{ParseError, WorkspaceSet};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "move-i3-workspaces", version)]
#[command(about = "Quickly move i3 workspaces to a specified output", long_about = None)]
pub struct MoveArgs {
    /// Dry run; don't move anything, just print what would be moved
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Select all workspaces
    #[arg(long)]
    pub all: bool,

    /// Exclude workspaces, for use in combination with --all
    #[arg(long, value_name = "LIST")]
    pub except: Option<WorkspaceSet>,

    /// Comma-separated workspaces to move, or the output when given alone
    #[arg(value_name = "WORKSPACES")]
    pub first: Option<String>,

    /// Target output
    #[arg(value_name = "OUTPUT")]
    pub second: Option<String>,
}

impl MoveArgs {
    /// With two positionals the first is the workspace list; the last one
    /// is always the output.
    pub fn into_options(self) -> Result<MoveOptions, ParseError> {
        let (workspaces, output) = match (self.first, self.second) {
            (Some(list), Some(output)) => (list.parse()?, output),
            (Some(output), None) | (None, Some(output)) => (WorkspaceSet::new(), output),
            (None, None) => (WorkspaceSet::new(), String::new()),
        };
        Ok(MoveOptions {
            dry_run: self.dry_run,
            all: self.all,
            except: self.except.unwrap_or_default(),
            workspaces,
            output,
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "new-i3-workspace", version)]
#[command(about = "Change to a new i3 workspace", long_about = None)]
pub struct NewArgs {
    /// Maximum workspace number to consider [default: 20]
    #[arg(long, value_name = "NUMBER")]
    pub max: Option<WorkspaceNum>,

    /// List of reserved workspace numbers
    #[arg(long, value_name = "LIST")]
    pub reserved: Option<WorkspaceSet>,

    /// Name to use for new workspace
    #[arg(long)]
    pub name: Option<String>,
}

impl NewArgs {
    pub fn into_options(self, config: &NewConfig) -> NewOptions {
        NewOptions {
            reserved: self.reserved.unwrap_or_else(|| config.reserved.clone()),
            max: self.max.unwrap_or(config.max),
            name: self.name.filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rename-i3-workspace", version)]
#[command(
    about = "Show an input prompt and rename the current i3 workspace",
    long_about = None
)]
pub struct RenameArgs {
    /// Runs the given command to get user input. The special strings
    /// {prompt}, {prefix} and {i3cmd} are replaced with their actual values
    /// [default: i3-input -F {i3cmd} -P {prompt}{prefix}]
    #[arg(long, value_name = "TEMPLATE")]
    pub input_cmd: Option<String>,

    /// Send the rename workspace command to i3 after requesting input. Use
    /// this when the input command does not rename the workspace itself
    #[arg(short = 'x', long = "send")]
    pub send_to_wm: bool,
}

impl RenameArgs {
    pub fn into_options(self, config: &RenameConfig) -> RenameOptions {
        RenameOptions {
            input_cmd: self.input_cmd.unwrap_or_else(|| config.input_cmd.clone()),
            send_to_wm: self.send_to_wm || config.send_to_wm,
        }
    }
}

/// Parse the process arguments, exiting with status 1 on usage errors and
/// 0 after printing help or version.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Log to stderr, at `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::DEFAULT_MAX;
    use crate::renamer::DEFAULT_INPUT_CMD;

    #[test]
    fn move_with_list_and_output() {
        let args = MoveArgs::try_parse_from(["move", "-n", "3,1,3", "DP-1"]).unwrap();
        let opts = args.into_options().unwrap();
        assert!(opts.dry_run);
        assert!(!opts.all);
        assert_eq!(opts.workspaces.to_vec(), vec![1, 3]);
        assert_eq!(opts.output, "DP-1");
    }

    #[test]
    fn move_all_with_except() {
        let args =
            MoveArgs::try_parse_from(["move", "--all", "--except", "2, 4", "HDMI-1"]).unwrap();
        let opts = args.into_options().unwrap();
        assert!(opts.all);
        assert_eq!(opts.except.to_vec(), vec![2, 4]);
        assert!(opts.workspaces.is_empty());
        assert_eq!(opts.output, "HDMI-1");
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn move_without_output_fails_validation() {
        let opts = MoveArgs::try_parse_from(["move", "--all"])
            .unwrap()
            .into_options()
            .unwrap();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn move_rejects_bad_lists() {
        assert!(MoveArgs::try_parse_from(["move", "--except", "x", "DP-1"]).is_err());
        let args = MoveArgs::try_parse_from(["move", "1,two", "DP-1"]).unwrap();
        assert_eq!(args.into_options().unwrap_err().token, "two");
    }

    #[test]
    fn new_flags_override_config() {
        let config = NewConfig {
            max: 8,
            reserved: "1".parse().unwrap(),
        };
        let opts = NewArgs::try_parse_from(["new"]).unwrap().into_options(&config);
        assert_eq!(opts.max, 8);
        assert_eq!(opts.reserved.to_vec(), vec![1]);
        assert_eq!(opts.name, None);

        let opts = NewArgs::try_parse_from(["new", "--max", "4", "--reserved", "2,3", "--name", "web"])
            .unwrap()
            .into_options(&config);
        assert_eq!(opts.max, 4);
        assert_eq!(opts.reserved.to_vec(), vec![2, 3]);
        assert_eq!(opts.name.as_deref(), Some("web"));
    }

    #[test]
    fn new_defaults() {
        let opts = NewArgs::try_parse_from(["new", "--name", ""])
            .unwrap()
            .into_options(&NewConfig::default());
        assert_eq!(opts.max, DEFAULT_MAX);
        assert!(opts.reserved.is_empty());
        assert_eq!(opts.name, None);
    }

    #[test]
    fn rename_flags() {
        let opts = RenameArgs::try_parse_from(["rename"])
            .unwrap()
            .into_options(&RenameConfig::default());
        assert_eq!(opts.input_cmd, DEFAULT_INPUT_CMD);
        assert!(!opts.send_to_wm);

        let opts = RenameArgs::try_parse_from(["rename", "-x", "--input-cmd", "rofi -dmenu"])
            .unwrap()
            .into_options(&RenameConfig::default());
        assert_eq!(opts.input_cmd, "rofi -dmenu");
        assert!(opts.send_to_wm);
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = MoveArgs::try_parse_from(["move", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
        let err = MoveArgs::try_parse_from(["move", "a", "b", "c"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
