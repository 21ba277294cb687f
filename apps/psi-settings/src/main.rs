// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;
use std::process::ExitCode;

use psi_settings::env::ProcessEnv;
use psi_settings::{resolve, telemetry, BaseSettings};

fn main() -> ExitCode {
    let env = ProcessEnv;
    telemetry::init(&env);

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base = BaseSettings::new(&base_dir);

    match resolve(base, &env) {
        Ok(settings) => {
            match serde_json::to_string(&settings) {
                Ok(summary) => tracing::info!(settings = %summary, "GCE settings resolved"),
                Err(e) => tracing::warn!(error = %e, "failed to serialize settings summary"),
            }
            tracing::info!(
                database = %settings.database_path().display(),
                static_root = %settings.static_root().display(),
                debug = settings.debug(),
                "ready to start application"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "settings resolution failed, aborting startup");
            ExitCode::FAILURE
        }
    }
}
