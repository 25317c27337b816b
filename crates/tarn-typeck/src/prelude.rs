//! Builtin environments loaded from configuration.
//!
//! A prelude is a TOML document mapping value names to signatures:
//!
//! ```toml
//! [values]
//! id = "forall a. a -> a"
//! add = "Int -> Int -> Int"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::env::TypeEnv;
use crate::sig::{parse_scheme, SignatureError};

/// Failure to load or interpret a prelude.
#[derive(Debug, Error)]
pub enum PreludeError {
    #[error("failed to read prelude `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid prelude: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid signature for `{name}`: {source}")]
    Signature {
        name: String,
        #[source]
        source: SignatureError,
    },
}

/// Builtin value signatures, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Prelude {
    #[serde(default)]
    pub values: IndexMap<String, String>,
}

impl Prelude {
    pub fn from_toml_str(src: &str) -> Result<Self, PreludeError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreludeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| PreludeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let prelude = Self::from_toml_str(&src)?;
        debug!(path = %path.display(), values = prelude.values.len(), "loaded prelude");
        Ok(prelude)
    }

    /// An environment holding exactly the prelude's values.
    pub fn to_env(&self) -> Result<TypeEnv, PreludeError> {
        self.extend_env(&TypeEnv::new())
    }

    /// `env` extended with the prelude's values. Prelude entries shadow
    /// existing bindings of the same name.
    pub fn extend_env(&self, env: &TypeEnv) -> Result<TypeEnv, PreludeError> {
        self.values.iter().try_fold(env.clone(), |env, (name, sig)| {
            let scheme = parse_scheme(sig).map_err(|source| PreludeError::Signature {
                name: name.clone(),
                source,
            })?;
            Ok(env.extend(name.clone(), scheme))
        })
    }
}
