// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path layout of the local setup directory.

use std::path::{Path, PathBuf};

use crate::config::{DATABASE_FILE_NAME, STATIC_ROOT_COMPONENTS};

/// Local setup directory layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    root: PathBuf,
}

impl SetupPaths {
    /// Create a new SetupPaths rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root of the local setup directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the SQLite database file.
    pub fn database_file(&self) -> PathBuf {
        self.root.join(DATABASE_FILE_NAME)
    }
}

/// Static files root served by nginx (`/psi_volume/staticfiles/static`).
pub fn default_static_root() -> PathBuf {
    STATIC_ROOT_COMPONENTS.iter().collect()
}
