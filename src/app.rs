use crate::cli::{Cli, Commands};
use bdash::{config, engine, ui};
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::CheckBd => handle_check_bd(cli.bd),
            Commands::Dump => handle_dump(cli.bd),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    // Determine runtime settings from CLI flags and config
    let config = config::Config::load().unwrap_or_default();

    let command = cli.bd.unwrap_or_else(|| config.source.command.clone());
    let refresh_secs = cli.refresh.unwrap_or(config.startup.refresh_secs);

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui(&command, refresh_secs) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn resolve_command(cli_override: Option<String>) -> String {
    cli_override.unwrap_or_else(|| {
        config::Config::load()
            .map(|c| c.source.command)
            .unwrap_or_else(|_| "bd".to_string())
    })
}

fn handle_check_bd(cli_override: Option<String>) {
    let command = resolve_command(cli_override);

    match engine::bd_version(&command) {
        Ok(version) => {
            println!("{} found: {}", command, version);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_dump(cli_override: Option<String>) {
    let command = resolve_command(cli_override);
    let groups = engine::fetch_grouped(&command);

    let forests = serde_json::json!({
        "open": groups.open,
        "in_progress": groups.in_progress,
        "closed": groups.closed,
    });

    match serde_json::to_string_pretty(&forests) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing issues: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    match config::Config::config_path() {
        Ok(path) if path.exists() => match config::Config::load() {
            Ok(cfg) => {
                println!("Config loaded successfully from {}", path.display());
                println!("{:#?}", cfg);
            }
            Err(e) => {
                eprintln!("Config file at {} is invalid: {:#}", path.display(), e);
                process::exit(1);
            }
        },
        Ok(path) => {
            println!("No config found, creating default...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            }
            println!("Default config saved to {}", path.display());
        }
        Err(e) => {
            eprintln!("Could not determine config path: {:#}", e);
            process::exit(1);
        }
    }
}
