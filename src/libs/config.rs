//! Configuration management for the taskhub application.
//!
//! Settings live in a JSON file in the platform data directory. Every module
//! is optional; a missing file means defaults. The `init` command runs the
//! interactive wizard below to fill in the modules the user selects.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module, as presented by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Default identity used when no session is active.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    /// Login name resolved against the user table at call time.
    pub name: String,
}

/// Task list rendering options.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub show_owner: bool,
    pub show_created: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            show_owner: true,
            show_created: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard
    /// updates settings in place.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "user".to_string(),
                name: "Default user".to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: "Task list view".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "user" => {
                    let default = config.user.clone().map(|user| user.name).unwrap_or_default();
                    msg_print!(Message::ConfigModuleUser);
                    config.user = Some(UserConfig {
                        name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultUser.to_string())
                            .default(default)
                            .interact_text()?,
                    });
                }
                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        show_owner: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowOwner.to_string())
                            .default(default.show_owner)
                            .interact()?,
                        show_created: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowCreated.to_string())
                            .default(default.show_created)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
