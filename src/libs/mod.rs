//! Core library modules for the taskhub application.
//!
//! - **Service core**: caller identity, authorization rules and the typed
//!   call surface ([`service`], [`rpc`])
//! - **Infrastructure**: configuration, data storage paths, sessions,
//!   messaging
//! - **Presentation**: table rendering for tasks and users

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod rpc;
pub mod service;
pub mod session;
pub mod task;
pub mod view;
