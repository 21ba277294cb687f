// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! by the GCE deployment settings. Configuration is resolved from the
//! environment once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DEBUG` | Enables debug mode (`true`/`false`, `yes`/`no`, `1`/`0`, ...) | `false` |
//! | `LOCAL_SETUP_DIR` | Local working directory holding the SQLite database | `<BASE_DIR>/test_setup_local` |
//! | `PSI_SESSION_COOKIE_NAME` | Name of the session cookie | `psiprivacy_gce` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

/// Environment variable name for the debug flag.
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable name for the local setup directory.
///
/// Holds local persistent state until an external SQL database is
/// provisioned.
pub const LOCAL_SETUP_DIR_ENV: &str = "LOCAL_SETUP_DIR";

/// Environment variable name for the session cookie name.
pub const SESSION_COOKIE_NAME_ENV: &str = "PSI_SESSION_COOKIE_NAME";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Environment variable name for the log filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ========== GCE Defaults ==========

/// Directory name of the local setup directory under `BASE_DIR`.
pub const DEFAULT_LOCAL_SETUP_DIR_NAME: &str = "test_setup_local";

/// File name of the SQLite database inside the local setup directory.
pub const DATABASE_FILE_NAME: &str = "psi_database.db3";

/// Path components of the static files root (served by nginx).
pub const STATIC_ROOT_COMPONENTS: [&str; 3] = ["/psi_volume", "staticfiles", "static"];

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "psiprivacy_gce";

/// CSRF cookie name.
pub const CSRF_COOKIE_NAME: &str = "psiprivacy_gce_csrf";

/// Placeholder secret key shipped with the GCE settings.
///
/// Must be replaced before a production deployment.
pub const PLACEHOLDER_SECRET_KEY: &str = "psix(*d87_-#a-na-change-th!s-for-prod_j6n@d&xi395h!6dwah";

/// Host patterns accepted by the GCE deployment.
pub const GCE_ALLOWED_HOSTS: &[&str] = &["*"];
