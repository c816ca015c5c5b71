mod app;
mod cli;

use std::fs::OpenOptions;
use std::sync::Mutex;

/// Debug logging goes to a file so it never fights the TUI for the terminal.
/// Enabled by setting BDASH_LOG (any value).
fn init_logging() {
    if std::env::var_os("BDASH_LOG").is_none() {
        return;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("bdash.log");

    match file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Warning: could not open bdash.log: {}", e);
        }
    }
}

fn main() {
    init_logging();

    let cli = cli::parse();
    app::run(cli);
}
