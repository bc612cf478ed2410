//! Two-stage secret resolution.
//!
//! A secret (API key, token) is looked up in the process environment first and,
//! only when it is absent there, in a dotenv-style fallback file. The fallback
//! file is parsed without touching the process environment, so resolution has
//! no side effects and is safe to call from concurrent tasks.
//!
//! When neither source provides a value the caller gets a
//! [`ConfigError::Unresolved`] naming both places that were searched. A
//! malformed fallback file is reported as [`ConfigError::Fallback`] instead of
//! being treated as "not found".

use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::env::get_env_var;

/// Default fallback file, resolved relative to the working directory.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither the environment nor the fallback file provides the value.
    #[error("`{name}` is not set in the environment and not present in {}", .fallback.display())]
    Unresolved {
        /// Variable that was looked up.
        name: String,
        /// Fallback file that was searched.
        fallback: PathBuf,
    },

    /// The fallback file exists but could not be read or parsed.
    #[error("failed to read fallback file {}", .path.display())]
    Fallback {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying dotenv error.
        #[source]
        source: dotenvy::Error,
    },
}

/// Where a resolved secret came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretOrigin {
    /// The process environment.
    Environment,
    /// A dotenv-style file.
    File(PathBuf),
}

/// A secret value plus its origin. `Debug` never prints the value.
#[derive(Clone)]
pub struct ResolvedSecret {
    /// Raw secret value.
    pub value: String,
    /// Which source supplied it.
    pub origin: SecretOrigin,
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Resolve `name` from the environment, falling back to [`DEFAULT_DOTENV_FILE`].
pub fn resolve_secret(name: &str) -> Result<ResolvedSecret, ConfigError> {
    resolve_secret_with_fallback(name, DEFAULT_DOTENV_FILE)
}

/// Resolve `name` from the environment, falling back to the given dotenv file.
///
/// Errors:
/// - [`ConfigError::Unresolved`] if both sources lack a non-blank value
/// - [`ConfigError::Fallback`] if the fallback file exists but is malformed
pub fn resolve_secret_with_fallback(
    name: &str,
    fallback: impl AsRef<Path>,
) -> Result<ResolvedSecret, ConfigError> {
    if let Ok(value) = get_env_var(name) {
        debug!(name, "secret resolved from environment");
        return Ok(ResolvedSecret {
            value,
            origin: SecretOrigin::Environment,
        });
    }

    let path = fallback.as_ref();
    let unresolved = || ConfigError::Unresolved {
        name: name.to_string(),
        fallback: path.to_path_buf(),
    };
    if !path.is_file() {
        return Err(unresolved());
    }

    let fallback_err = |source| ConfigError::Fallback {
        path: path.to_path_buf(),
        source,
    };
    for item in dotenvy::from_path_iter(path).map_err(fallback_err)? {
        let (key, value) = item.map_err(fallback_err)?;
        if key == name && !value.trim().is_empty() {
            debug!(name, file = %path.display(), "secret resolved from fallback file");
            return Ok(ResolvedSecret {
                value,
                origin: SecretOrigin::File(path.to_path_buf()),
            });
        }
    }
    Err(unresolved())
}
