pub mod init;
pub mod login;
pub mod migrations;
pub mod task;
pub mod user;

use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in as a user")]
    Login(login::LoginArgs),
    #[command(about = "End the current session")]
    Logout,
    #[command(about = "Manage users")]
    User(user::UserArgs),
    #[command(about = "Manage the shared task list")]
    Task(task::TaskArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => {
                if Session::read()?.is_none() {
                    msg_info!(Message::NotLoggedIn);
                    return Ok(());
                }
                Session::clear()?;
                msg_success!(Message::LoggedOut);
                Ok(())
            }
            Commands::User(args) => user::cmd(args),
            Commands::Task(args) => task::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
