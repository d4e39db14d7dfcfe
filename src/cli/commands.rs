//! Command selection

use super::Args;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Check peer dependencies of a package tree
    Check(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Check(args)
    }
}
