// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! PSI Settings - GCE Deployment Settings
//!
//! Resolves the settings of the PSI web application for the GCE (cloud VM)
//! deployment target from the process environment, on top of a base
//! settings layer.
//!
//! ## Modules
//!
//! - `config` - Environment variable names and defaults
//! - `env` - Environment access and boolean parsing
//! - `settings` - Base layer, GCE overlay and resolved settings
//! - `storage` - Local setup directory layout and directory preparation
//! - `telemetry` - Log subscriber setup

pub mod config;
pub mod env;
pub mod error;
pub mod settings;
pub mod storage;
pub mod telemetry;

pub use error::{SettingsError, SettingsResult};
pub use settings::{resolve, BaseSettings, GceOverlay, Settings};
