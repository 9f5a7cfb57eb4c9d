#![allow(clippy::module_inception)]
use clap::Parser;
use std::path::PathBuf;

use crate::cli::cli::{Cli, Commands};
use crate::cli::commands::{AddOptions, App};
use crate::config::config::Config;

pub mod cli;
pub mod commands;
pub mod menu;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            path,
            account,
            user,
            password,
            generate,
            length,
            no_upper,
            no_digits,
            no_special,
        } => {
            let config = Config::create(path.map(PathBuf::from));
            let app = App::create(&config);
            let opts = AddOptions {
                account,
                user,
                password,
                generate,
                length,
                no_upper,
                no_digits,
                no_special,
            };
            app.handle_add(opts)?;
        }
        Commands::Show {
            account,
            path,
            reveal,
        } => {
            let config = Config::create(path.map(PathBuf::from));
            let app = App::create(&config);
            app.handle_show(&account, reveal)?;
        }
        Commands::List { path, json } => {
            let config = Config::create(path.map(PathBuf::from));
            let app = App::create(&config);
            app.handle_list(json)?;
        }
        Commands::Update {
            account,
            path,
            old_password,
            new_password,
        } => {
            let config = Config::create(path.map(PathBuf::from));
            let app = App::create(&config);
            app.handle_update(&account, old_password, new_password)?;
        }
        Commands::Delete { account, path, yes } => {
            let config = Config::create(path.map(PathBuf::from));
            let app = App::create(&config);
            app.handle_delete(&account, yes)?;
        }
        Commands::Menu { path } => {
            let config = Config::create(path.map(PathBuf::from));
            menu::run(&config)?;
        }
    }

    Ok(())
}
