// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Base settings shared by every deployment target.

use std::path::{Path, PathBuf};

/// The configuration layer deployment overlays extend.
///
/// Carries `BASE_DIR`, the project root every relative default is derived
/// from. Deployment overlays set every other field themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSettings {
    pub base_dir: PathBuf,
}

impl BaseSettings {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Join path components onto `base_dir`.
    pub fn join<I, P>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut path = self.base_dir.clone();
        for part in parts {
            path.push(part);
        }
        path
    }
}
