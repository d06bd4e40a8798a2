use crate::cli::Cli;

/// Run-wide settings, passed by reference to everything that needs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// keep source files after they have been converted
    pub keep: bool,
    pub verbose: bool,
    /// convert already-canonical files instead of skipping them
    pub force: bool,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Options {
            keep: cli.keep,
            verbose: cli.verbose,
            force: cli.force,
        }
    }
}
