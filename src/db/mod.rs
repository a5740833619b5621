//! Database layer for the taskhub application.
//!
//! SQLite-backed persistence for the two application entities, plus the
//! connection and migration infrastructure they share. Each repository owns
//! its own connection; atomicity is whatever SQLite guarantees per statement,
//! nothing above that.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// Task records: creation, single-field updates, deletion and filtered reads.
pub mod tasks;

/// User identities used for login and task ownership.
pub mod users;
