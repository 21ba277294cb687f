// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Idempotent directory preparation.
//!
//! Several workers may start at the same time and race to create the same
//! directory. Losing that race is not an error; any other failure is.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{SettingsError, SettingsResult};

/// Outcome of [`ensure_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory was already present.
    Existing,
    /// The directory (and possibly some parents) was created by this call.
    Created,
}

/// Make sure `path` exists as a directory, creating missing parents.
pub fn ensure_dir(path: impl AsRef<Path>) -> SettingsResult<DirStatus> {
    let path = path.as_ref();

    // `create_dir_all("")` succeeds without creating anything.
    if path.as_os_str().is_empty() {
        return Err(SettingsError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty directory path"),
        });
    }

    if path.is_dir() {
        tracing::debug!(path = %path.display(), "directory already present");
        return Ok(DirStatus::Existing);
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "created directory");
            Ok(DirStatus::Created)
        }
        // Another process created it between the check and the create.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(DirStatus::Existing)
        }
        Err(source) => Err(SettingsError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}
