use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todofile", version = get_version())]
#[command(about = "Interactive to-do list kept in a plain text file", long_about = None)]
pub struct Cli {
    /// Todo file to load and rewrite (default: todos.txt)
    #[arg(short, long, env = "TODOFILE_PATH")]
    pub file: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, env = "TODOFILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the cosmetic pauses after deleting and before exiting
    #[arg(long)]
    pub no_pause: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
