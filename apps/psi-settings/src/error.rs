// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::io;
use std::path::PathBuf;

/// Errors that abort settings resolution.
///
/// Every variant is fatal to startup: the application must not serve any
/// request with an unresolved configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid boolean literal for {variable}: {value:?}")]
    InvalidBooleanLiteral { variable: String, value: String },

    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
