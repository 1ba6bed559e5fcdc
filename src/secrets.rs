//! Secret resolution
//!
//! Credentials come from an ordered chain of providers; the first one holding
//! a value wins. The default chain tries an optional JSON secrets file, then
//! the process environment. A key no provider holds simply stays absent;
//! whether that is fatal is decided at the point of use.

use std::collections::HashMap;
use std::path::Path;

/// Environment variable naming the secrets file; defaults to `secrets.json`
/// in the working directory.
pub const SECRETS_FILE_VAR: &str = "MOODREEL_SECRETS_FILE";

const DEFAULT_SECRETS_FILE: &str = "secrets.json";

pub trait SecretProvider: Send + Sync {
    fn fetch(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment. Empty values count as absent.
pub struct EnvSecrets;

impl SecretProvider for EnvSecrets {
    fn fetch(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Secrets from a flat JSON object file, loaded once.
pub struct FileSecrets {
    values: HashMap<String, String>,
}

impl FileSecrets {
    /// Loads the file if it exists and parses as a string map. A missing or
    /// malformed file yields no provider; the chain falls through to the
    /// environment.
    pub fn load(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(values) => Some(Self { values }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed secrets file");
                None
            }
        }
    }

    #[cfg(test)]
    fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SecretProvider for FileSecrets {
    fn fetch(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Ordered list of secret providers tried in sequence.
pub struct SecretChain {
    providers: Vec<Box<dyn SecretProvider>>,
}

impl SecretChain {
    pub fn new(providers: Vec<Box<dyn SecretProvider>>) -> Self {
        Self { providers }
    }

    /// The default chain: secrets file first, environment second.
    pub fn from_environment() -> Self {
        let path = std::env::var(SECRETS_FILE_VAR)
            .unwrap_or_else(|_| DEFAULT_SECRETS_FILE.to_string());

        let mut providers: Vec<Box<dyn SecretProvider>> = Vec::new();
        if let Some(file) = FileSecrets::load(Path::new(&path)) {
            providers.push(Box::new(file));
        }
        providers.push(Box::new(EnvSecrets));

        Self::new(providers)
    }

    /// First present value wins.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.providers.iter().find_map(|p| p.fetch(name))
    }
}
