use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext, dump::DumpOptions};
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => expand_tilde(path),
        None => Config::default_path()?,
    };

    // `config init --force` must be able to replace a broken file.
    let config = match &cli.command {
        Commands::Config {
            command: ConfigCommand::Init { force: true },
        } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    let mut ctx = HandlerContext::new(&cli, config_path, config)?;
    ctx.log
        .debug(format_args!("using config {}", ctx.config_path.display()));

    match cli.command {
        Commands::Dump {
            file,
            width,
            hex,
            unsigned,
            signed,
            character,
            swap,
            offset,
            length,
        } => handlers::dump::handle(
            &mut ctx,
            &file,
            DumpOptions {
                width,
                hex,
                unsigned,
                signed,
                character,
                swap,
                offset,
                length,
            },
        ),

        Commands::Json { file } => handlers::json::handle(&mut ctx, &file),

        Commands::Compare { left, right } => handlers::compare::handle(&mut ctx, &left, &right),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&mut ctx, force),
            ConfigCommand::Show => handlers::config::show(&mut ctx),
        },
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
