use std::path::PathBuf;

/// Address the server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

/// Position of the served-files directory in the argument vector
/// (`courier --directory <dir>`).
const DIRECTORY_ARG_INDEX: usize = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Base directory for `/files/` routes. `None` when the server was
    /// started without one.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from the process arguments, program name included.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let directory = args
            .into_iter()
            .nth(DIRECTORY_ARG_INDEX)
            .map(PathBuf::from);

        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory,
        }
    }

    pub fn load() -> Self {
        Self::from_args(std::env::args())
    }

    /// Config on the default address serving files from `directory`.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: Some(directory.into()),
        }
    }
}
