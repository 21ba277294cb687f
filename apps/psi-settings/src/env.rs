// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment variable access.
//!
//! Settings resolution reads variables through [`Environment`] so that the
//! process environment can be swapped for a fixed map in tests.
//!
//! A variable set to the empty string is treated as unset everywhere.
//! Values are read as raw `OsString`s: a non-UTF-8 value is never
//! mistaken for an unset one.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{SettingsError, SettingsResult};

/// A read-only mapping from variable name to value.
pub trait Environment {
    /// Raw value of a variable, `None` when unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Raw value of a variable that is set to something non-empty.
    fn non_empty_var_os(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|v| !v.is_empty())
    }

    /// Path value of a non-empty variable, byte for byte.
    fn path_var(&self, key: &str) -> Option<PathBuf> {
        self.non_empty_var_os(key).map(PathBuf::from)
    }

    /// Text value of a non-empty variable, falling back to `default`.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD and logged.
    fn var_or(&self, key: &str, default: &str) -> String {
        match self.non_empty_var_os(key) {
            Some(raw) => raw.into_string().unwrap_or_else(|raw| {
                tracing::warn!(variable = key, "non-UTF-8 value, invalid bytes replaced");
                raw.to_string_lossy().into_owned()
            }),
            None => default.to_string(),
        }
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl Environment for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

impl Environment for HashMap<&str, &str> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

impl Environment for HashMap<&str, OsString> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).cloned()
    }
}

/// Parse a permissive boolean literal.
///
/// Accepts `y`, `yes`, `t`, `true`, `on`, `1` and `n`, `no`, `f`, `false`,
/// `off`, `0`, ignoring ASCII case. Whitespace is not stripped.
pub fn parse_bool(variable: &str, raw: &str) -> SettingsResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Ok(false),
        _ => Err(SettingsError::InvalidBooleanLiteral {
            variable: variable.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Read a boolean variable, using `default` when it is unset or empty.
pub fn bool_var(env: &impl Environment, key: &str, default: bool) -> SettingsResult<bool> {
    let Some(raw) = env.non_empty_var_os(key) else {
        return Ok(default);
    };
    match raw.to_str() {
        Some(text) => parse_bool(key, text),
        None => Err(SettingsError::InvalidBooleanLiteral {
            variable: key.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
