// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Deployment Settings
//!
//! Settings are resolved in two layers:
//!
//! 1. [`BaseSettings`] - `BASE_DIR` and the path-joining helper
//! 2. a deployment overlay ([`GceOverlay`]) - overrides base fields from the
//!    environment and prepares the directories the application needs
//!
//! The result is a single immutable [`Settings`] value, built once at
//! startup and handed to whatever needs it.
//!
//! ## GCE Layout
//!
//! ```text
//! <LOCAL_SETUP_DIR>/           # default <BASE_DIR>/test_setup_local
//!   psi_database.db3           # SQLite database until an external db exists
//! /psi_volume/staticfiles/static/   # collected static files, served by nginx
//! ```

pub mod base;
pub mod gce;
pub mod hosts;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use base::BaseSettings;
pub use gce::{resolve, GceOverlay};
pub use hosts::AllowedHosts;

/// Database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseEngine {
    /// Single-file SQLite database.
    Sqlite3,
}

/// Connection settings of one database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub engine: DatabaseEngine,
    /// Database name; for SQLite, the path of the database file.
    pub name: PathBuf,
}

/// Configured databases, keyed by alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Databases {
    pub default: DatabaseConfig,
}

/// Fully resolved settings for one process.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub(crate) base_dir: PathBuf,
    pub(crate) debug: bool,
    #[serde(skip_serializing)]
    pub(crate) secret_key: String,
    pub(crate) allowed_hosts: AllowedHosts,
    pub(crate) use_x_forwarded_host: bool,
    pub(crate) local_setup_dir: PathBuf,
    pub(crate) databases: Databases,
    pub(crate) static_root: PathBuf,
    pub(crate) session_cookie_name: String,
    pub(crate) csrf_cookie_name: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_dir", &self.base_dir)
            .field("debug", &self.debug)
            .field("secret_key", &"[REDACTED]")
            .field("allowed_hosts", &self.allowed_hosts)
            .field("use_x_forwarded_host", &self.use_x_forwarded_host)
            .field("local_setup_dir", &self.local_setup_dir)
            .field("databases", &self.databases)
            .field("static_root", &self.static_root)
            .field("session_cookie_name", &self.session_cookie_name)
            .field("csrf_cookie_name", &self.csrf_cookie_name)
            .finish()
    }
}

impl Settings {
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn allowed_hosts(&self) -> &AllowedHosts {
        &self.allowed_hosts
    }

    /// Whether the `X-Forwarded-Host` header from the reverse proxy is trusted.
    pub fn use_x_forwarded_host(&self) -> bool {
        self.use_x_forwarded_host
    }

    pub fn local_setup_dir(&self) -> &Path {
        &self.local_setup_dir
    }

    pub fn databases(&self) -> &Databases {
        &self.databases
    }

    /// Path of the default database file.
    pub fn database_path(&self) -> &Path {
        &self.databases.default.name
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    pub fn csrf_cookie_name(&self) -> &str {
        &self.csrf_cookie_name
    }
}
