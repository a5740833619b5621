//! Login command: selects the identity the next commands act as.
//!
//! Resolves the given name against the user table and persists the result as
//! the active session. Unknown names can be registered on the spot after a
//! confirmation prompt.

use crate::{
    db::users::Users,
    libs::{messages::Message, session::Session},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(required = true)]
    name: String,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let mut users = Users::new()?;

    let user_id = match users.get_by_name(&login_args.name)? {
        Some(user) => user.id.ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(login_args.name.clone())))?,
        None => {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmCreateUser(login_args.name.clone()).to_string())
                .default(true)
                .interact()?;

            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            let id = users.create(&login_args.name)?;
            msg_success!(Message::UserCreated(login_args.name.clone()));
            id
        }
    };

    Session {
        user_id,
        username: login_args.name.clone(),
    }
    .save()?;
    msg_success!(Message::LoggedIn(login_args.name));

    Ok(())
}
