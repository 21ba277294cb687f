// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! GCE (cloud VM) deployment overlay.
//!
//! Uses a local SQLite database under `LOCAL_SETUP_DIR` until an external
//! SQL database is provisioned, and expects nginx to serve static files
//! from the shared `/psi_volume`.

use std::path::{Path, PathBuf};

use super::{AllowedHosts, BaseSettings, DatabaseConfig, DatabaseEngine, Databases, Settings};
use crate::config::{
    CSRF_COOKIE_NAME, DEBUG_ENV, DEFAULT_LOCAL_SETUP_DIR_NAME, DEFAULT_SESSION_COOKIE_NAME,
    GCE_ALLOWED_HOSTS, LOCAL_SETUP_DIR_ENV, PLACEHOLDER_SECRET_KEY, SESSION_COOKIE_NAME_ENV,
};
use crate::env::{bool_var, Environment};
use crate::error::SettingsResult;
use crate::storage::{default_static_root, ensure_dir, SetupPaths};

/// Overlay applying the GCE deployment settings on top of [`BaseSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GceOverlay {
    static_root: PathBuf,
}

impl Default for GceOverlay {
    fn default() -> Self {
        Self::with_static_root(default_static_root())
    }
}

impl GceOverlay {
    /// Create an overlay with a custom static root (useful for testing).
    pub fn with_static_root(static_root: impl AsRef<Path>) -> Self {
        Self {
            static_root: static_root.as_ref().to_path_buf(),
        }
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Resolve the final settings.
    ///
    /// Creates the local setup directory and the static root if they are
    /// missing. Safe to call multiple times (idempotent).
    pub fn apply(&self, base: BaseSettings, env: &impl Environment) -> SettingsResult<Settings> {
        let debug = bool_var(env, DEBUG_ENV, false)?;

        let local_setup_dir = env
            .path_var(LOCAL_SETUP_DIR_ENV)
            .unwrap_or_else(|| base.join([DEFAULT_LOCAL_SETUP_DIR_NAME]));
        let setup = SetupPaths::new(&local_setup_dir);

        ensure_dir(setup.root())?;
        ensure_dir(&self.static_root)?;

        let secret_key = PLACEHOLDER_SECRET_KEY.to_string();
        if !debug {
            tracing::warn!(
                "placeholder SECRET_KEY in use; replace it before serving production traffic"
            );
        }

        let settings = Settings {
            debug,
            secret_key,
            allowed_hosts: AllowedHosts::new(GCE_ALLOWED_HOSTS.iter().copied()),
            use_x_forwarded_host: true,
            databases: Databases {
                default: DatabaseConfig {
                    engine: DatabaseEngine::Sqlite3,
                    name: setup.database_file(),
                },
            },
            local_setup_dir,
            static_root: self.static_root.clone(),
            session_cookie_name: env.var_or(SESSION_COOKIE_NAME_ENV, DEFAULT_SESSION_COOKIE_NAME),
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
            base_dir: base.base_dir,
        };

        tracing::debug!(settings = ?settings, "resolved GCE settings");
        Ok(settings)
    }
}

/// Resolve GCE settings with the standard static root.
pub fn resolve(base: BaseSettings, env: &impl Environment) -> SettingsResult<Settings> {
    GceOverlay::default().apply(base, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        overlay: GceOverlay,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let overlay =
                GceOverlay::with_static_root(temp.path().join("psi_volume/staticfiles/static"));
            Self { temp, overlay }
        }

        fn base(&self) -> BaseSettings {
            BaseSettings::new(self.temp.path().join("project"))
        }

        fn resolve(&self, env: &HashMap<&str, &str>) -> SettingsResult<Settings> {
            self.overlay.apply(self.base(), env)
        }
    }

    #[test]
    fn defaults_apply_with_empty_environment() {
        let fx = Fixture::new();
        let settings = fx.resolve(&HashMap::new()).unwrap();

        let expected_setup = fx.temp.path().join("project").join("test_setup_local");
        assert!(!settings.debug());
        assert_eq!(settings.secret_key(), PLACEHOLDER_SECRET_KEY);
        assert!(settings.allowed_hosts().contains("*"));
        assert!(settings.use_x_forwarded_host());
        assert_eq!(settings.local_setup_dir(), expected_setup);
        assert_eq!(settings.session_cookie_name(), "psiprivacy_gce");
        assert_eq!(settings.csrf_cookie_name(), "psiprivacy_gce_csrf");
        assert_eq!(settings.base_dir(), fx.temp.path().join("project"));
    }

    #[test]
    fn default_directories_exist_after_resolution() {
        let fx = Fixture::new();
        let settings = fx.resolve(&HashMap::new()).unwrap();

        assert!(settings.local_setup_dir().is_dir());
        assert!(settings.static_root().is_dir());
        assert_eq!(settings.static_root(), fx.overlay.static_root());
    }

    #[test]
    fn debug_follows_environment() {
        let fx = Fixture::new();
        let cases = [
            ("1", true),
            ("True", true),
            ("yes", true),
            ("0", false),
            ("False", false),
            ("no", false),
        ];
        for (raw, expected) in cases {
            let env = HashMap::from([("DEBUG", raw)]);
            assert_eq!(fx.resolve(&env).unwrap().debug(), expected, "DEBUG={raw}");
        }
    }

    #[test]
    fn invalid_debug_fails_before_touching_filesystem() {
        let fx = Fixture::new();
        let env = HashMap::from([("DEBUG", "maybe")]);

        match fx.resolve(&env) {
            Err(SettingsError::InvalidBooleanLiteral { variable, value }) => {
                assert_eq!(variable, "DEBUG");
                assert_eq!(value, "maybe");
            }
            other => panic!("expected InvalidBooleanLiteral, got {other:?}"),
        }
        assert!(!fx.temp.path().join("project").exists());
        assert!(!fx.overlay.static_root().exists());
    }

    #[test]
    fn local_setup_dir_override_creates_nested_path() {
        let fx = Fixture::new();
        let custom = fx.temp.path().join("var").join("lib").join("psi");
        let custom_str = custom.to_str().unwrap();
        let env = HashMap::from([("LOCAL_SETUP_DIR", custom_str)]);

        let settings = fx.resolve(&env).unwrap();
        assert_eq!(settings.local_setup_dir(), custom);
        assert!(custom.is_dir());
        assert!(!fx.temp.path().join("project").join("test_setup_local").exists());
    }

    #[test]
    fn empty_local_setup_dir_uses_default() {
        let fx = Fixture::new();
        let env = HashMap::from([("LOCAL_SETUP_DIR", "")]);

        let settings = fx.resolve(&env).unwrap();
        assert_eq!(
            settings.local_setup_dir(),
            fx.temp.path().join("project").join("test_setup_local")
        );
    }

    #[test]
    fn database_path_is_nested_under_local_setup_dir() {
        let fx = Fixture::new();
        let default = fx.resolve(&HashMap::new()).unwrap();
        assert_eq!(
            default.database_path(),
            default.local_setup_dir().join("psi_database.db3")
        );
        assert_eq!(default.databases().default.engine, DatabaseEngine::Sqlite3);

        let custom = fx.temp.path().join("override");
        let custom_str = custom.to_str().unwrap();
        let env = HashMap::from([("LOCAL_SETUP_DIR", custom_str)]);
        let overridden = fx.resolve(&env).unwrap();
        assert_eq!(overridden.database_path(), custom.join("psi_database.db3"));
    }

    #[test]
    fn database_file_is_not_created() {
        let fx = Fixture::new();
        let settings = fx.resolve(&HashMap::new()).unwrap();
        assert!(!settings.database_path().exists());
    }

    #[test]
    fn session_cookie_name_override() {
        let fx = Fixture::new();
        let env = HashMap::from([("PSI_SESSION_COOKIE_NAME", "psi_staging")]);

        let settings = fx.resolve(&env).unwrap();
        assert_eq!(settings.session_cookie_name(), "psi_staging");
        assert_eq!(settings.csrf_cookie_name(), "psiprivacy_gce_csrf");
    }

    #[test]
    fn resolution_is_idempotent() {
        let fx = Fixture::new();
        let env = HashMap::from([("DEBUG", "true"), ("PSI_SESSION_COOKIE_NAME", "psi")]);

        let first = fx.resolve(&env).unwrap();
        let second = fx.resolve(&env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn file_in_place_of_local_setup_dir_is_fatal() {
        let fx = Fixture::new();
        let blocker = fx.temp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let blocker_str = blocker.to_str().unwrap();
        let env = HashMap::from([("LOCAL_SETUP_DIR", blocker_str)]);

        match fx.resolve(&env) {
            Err(SettingsError::DirectoryCreationFailed { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected DirectoryCreationFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_session_cookie_name_uses_default() {
        let fx = Fixture::new();
        let env = HashMap::from([("PSI_SESSION_COOKIE_NAME", "")]);

        let settings = fx.resolve(&env).unwrap();
        assert_eq!(settings.session_cookie_name(), "psiprivacy_gce");
    }

    #[test]
    fn whitespace_debug_is_rejected() {
        let fx = Fixture::new();
        let env = HashMap::from([("DEBUG", "   ")]);

        assert!(matches!(
            fx.resolve(&env),
            Err(SettingsError::InvalidBooleanLiteral { .. })
        ));
        assert!(!fx.overlay.static_root().exists());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_debug_is_rejected() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let fx = Fixture::new();
        let env: HashMap<&str, OsString> =
            HashMap::from([("DEBUG", OsStr::from_bytes(b"m\xffy").to_os_string())]);

        assert!(matches!(
            fx.overlay.apply(fx.base(), &env),
            Err(SettingsError::InvalidBooleanLiteral { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_local_setup_dir_is_used_verbatim() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let fx = Fixture::new();
        let mut raw = fx.temp.path().as_os_str().as_bytes().to_vec();
        raw.extend_from_slice(b"/setup_\xff");
        let custom = PathBuf::from(OsStr::from_bytes(&raw));
        let env: HashMap<&str, OsString> =
            HashMap::from([("LOCAL_SETUP_DIR", custom.clone().into_os_string())]);

        let settings = fx.overlay.apply(fx.base(), &env).unwrap();
        assert_eq!(settings.local_setup_dir(), custom);
        assert!(custom.is_dir());
        assert_eq!(settings.database_path(), custom.join("psi_database.db3"));
        assert!(!fx.temp.path().join("project").join("test_setup_local").exists());
    }

    #[test]
    fn secret_key_is_redacted_in_output() {
        let fx = Fixture::new();
        let settings = fx.resolve(&HashMap::new()).unwrap();

        let debug = format!("{settings:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(PLACEHOLDER_SECRET_KEY));

        let json = serde_json::to_value(&settings).unwrap();
        assert!(json.get("secret_key").is_none());
        assert_eq!(json["session_cookie_name"], "psiprivacy_gce");
        assert_eq!(json["databases"]["default"]["engine"], "sqlite3");
        assert_eq!(json["allowed_hosts"], serde_json::json!(["*"]));
    }
}
