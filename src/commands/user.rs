use crate::{
    db::users::Users,
    libs::{messages::Message, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Register a new user
    Add {
        /// Login name
        name: String,
    },
    /// List all registered users
    List,
}

pub fn cmd(args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Add { name } => handle_add(name),
        UserCommand::List => handle_list(),
    }
}

fn handle_add(name: String) -> Result<()> {
    let mut users = Users::new()?;

    if users.get_by_name(&name)?.is_some() {
        msg_bail_anyhow!(Message::UserAlreadyExists(name));
    }

    users.create(&name)?;
    msg_success!(Message::UserCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut users = Users::new()?;
    let users = users.list()?;

    if users.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    msg_print!(Message::UsersHeader, true);
    View::users(&users)?;
    Ok(())
}
