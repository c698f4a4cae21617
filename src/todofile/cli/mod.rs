mod args;
mod logging;
mod menu;
mod print;

use args::Cli;
use clap::Parser;
use menu::{Menu, Pauses, Screen};
use todofile::api::TodoApi;
use todofile::config::TodoConfig;
use todofile::error::Result;
use todofile::store::fs_backend::FsBackend;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = resolve_config(&cli)?;
    debug!(file = %config.file.display(), "starting todofile");

    let screen = Screen::detect();
    if matches!(screen, Screen::Plain) {
        colored::control::set_override(false);
    }

    let (api, loaded) = TodoApi::open(FsBackend::new(&config.file));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print::print_messages(&mut out, &loaded.messages)?;

    let pauses = Pauses {
        after_delete: config.delete_pause(),
        before_exit: config.exit_pause(),
    };
    let stdin = std::io::stdin();
    let exit = Menu::new(api, stdin.lock(), out, screen, pauses).run()?;
    debug!(?exit, "menu closed");
    Ok(())
}

/// Config file first, then flags on top.
fn resolve_config(cli: &Cli) -> Result<TodoConfig> {
    let mut config = match &cli.config {
        Some(path) => TodoConfig::load(path)?,
        None => TodoConfig::default(),
    };
    if let Some(file) = &cli.file {
        config = config.with_file(file)?;
    }
    if cli.no_pause {
        config = config.without_pauses();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_override_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todofile.json");
        std::fs::write(&path, r#"{ "file": "from-config.txt", "delete_pause_ms": 5 }"#).unwrap();

        let cli = Cli::try_parse_from([
            "todofile",
            "--config",
            path.to_str().unwrap(),
            "--file",
            "from-flag.txt",
            "--no-pause",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.file, PathBuf::from("from-flag.txt"));
        assert_eq!(config.delete_pause_ms, 0);
        assert_eq!(config.exit_pause_ms, 0);
    }

    #[test]
    fn config_file_used_when_no_flags() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todofile.json");
        std::fs::write(&path, r#"{ "file": "from-config.txt" }"#).unwrap();

        let cli = Cli::try_parse_from(["todofile", "-c", path.to_str().unwrap()]).unwrap();
        let config = resolve_config(&cli).unwrap();
        if std::env::var_os("TODOFILE_PATH").is_none() {
            assert_eq!(config.file, PathBuf::from("from-config.txt"));
        }
        assert_eq!(config.delete_pause_ms, 1500);
    }
}
