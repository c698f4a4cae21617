//! # Todofile CLI
//!
//! The binary is intentionally thin: everything user-facing lives in `cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/todofile/cli/)                              │
//! │  - clap flags + config resolution (args.rs, mod.rs)         │
//! │  - tracing subscriber on stderr (logging.rs)                │
//! │  - numeric menu loop with retry prompts (menu.rs)           │
//! │  - colored message and list printing (print.rs)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                 todofile library (api.rs inward)
//! ```
//!
//! Exit status is 0 after option 5 or end of input, 1 when startup or terminal
//! I/O fails.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
