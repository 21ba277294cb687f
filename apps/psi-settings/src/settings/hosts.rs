// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Allowed host patterns.

use std::collections::BTreeSet;

use serde::Serialize;

/// Set of host patterns a deployment answers for.
///
/// A pattern is either `*` (any host), a leading-dot domain such as
/// `.psiprivacy.org` (the domain and all of its subdomains), or an exact
/// host name. Matching ignores ASCII case and a `:port` suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedHosts(BTreeSet<String>);

impl AllowedHosts {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            patterns
                .into_iter()
                .map(|p| p.into().to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(&pattern.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether a request `Host` value matches any pattern.
    pub fn permits(&self, host: &str) -> bool {
        let host = strip_port(host.trim()).trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }
        self.0.iter().any(|pattern| matches_pattern(pattern, &host))
    }
}

fn matches_pattern(pattern: &str, host: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_prefix('.') {
        Some(domain) => host == domain || host.ends_with(pattern),
        None => host == pattern,
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal, e.g. `[::1]:8000`.
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, _port)) => name,
        None => host,
    }
}
