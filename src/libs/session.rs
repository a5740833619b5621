//! Local login session.
//!
//! The CLI plays the role of the transport layer: it decides which identity a
//! call is attributed to. `login` persists that identity in a session file
//! under the data directory; [`resolve_caller`] reads it back, falling back
//! to the configured default user, and finally to anonymous.

use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::service::Caller;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const SESSION_FILE_NAME: &str = "session.json";

/// The identity the next commands act as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

impl Session {
    pub fn read() -> Result<Option<Session>> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;

        if !session_file_path.exists() {
            return Ok(None);
        }

        let session_str = fs::read_to_string(session_file_path)?;
        let session: Session = serde_json::from_str(&session_str)?;
        Ok(Some(session))
    }

    pub fn save(&self) -> Result<()> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;

        let session_file = File::create(session_file_path)?;
        serde_json::to_writer_pretty(&session_file, &self)?;
        Ok(())
    }

    pub fn clear() -> Result<()> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;

        if session_file_path.exists() {
            fs::remove_file(session_file_path)?;
        }
        Ok(())
    }
}

/// Resolves the caller identity for the current invocation.
///
/// Order: active session, then the configured default user (when that name
/// resolves to an existing user), then anonymous.
pub fn resolve_caller() -> Result<Caller> {
    if let Some(session) = Session::read()? {
        return Ok(Caller::authenticated(session.user_id));
    }

    if let Some(user_config) = Config::read()?.user {
        if let Some(user) = Users::new()?.get_by_name(&user_config.name)? {
            if let Some(id) = user.id {
                return Ok(Caller::authenticated(id));
            }
        }
    }

    Ok(Caller::anonymous())
}
