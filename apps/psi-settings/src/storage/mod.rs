// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Local Storage Layout
//!
//! Filesystem locations the application expects before it starts serving:
//! the local setup directory (holding the SQLite database) and the static
//! files root.
//!
//! ## Important Notes
//!
//! - Directories are created on demand, never removed
//! - The database file itself is left to the application's migrations

pub mod dirs;
pub mod paths;

pub use dirs::{ensure_dir, DirStatus};
pub use paths::{default_static_root, SetupPaths};
