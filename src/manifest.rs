//! YAML manifest of modules and their variables.
//!
//! Libraries declare their variables in code; the `envexist` binary reads
//! the same declarations from a manifest so shell scripts and CI jobs can
//! check an environment before starting anything.
//!
//! ```yaml
//! modules:
//!   - name: db
//!     need:
//!       - name: host
//!         description: database host
//!         example: localhost
//!     may:
//!       - { name: port, description: listen port, example: "5432" }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EnvexistError, Result};
use crate::registry::{Delivery, Registry};

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "envexist.yml";

/// Root of the manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Modules in registration order.
    pub modules: Vec<ModuleManifest>,
}

/// One module and its declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub name: String,

    /// Required variables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub need: Vec<VarManifest>,

    /// Optional variables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub want: Vec<VarManifest>,

    /// Optional variables falling back to their example.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub may: Vec<VarManifest>,
}

/// One declared variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarManifest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub example: String,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file doesn't exist and
    /// `ManifestParse` for invalid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnvexistError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvexistError::Io(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let manifest: Self =
            serde_yaml::from_str(content).map_err(|e| EnvexistError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            modules = manifest.modules.len(),
            "Parsed manifest"
        );
        Ok(manifest)
    }

    /// Register every module on `registry`.
    ///
    /// Each module is registered through [`Registry::main`]; the returned
    /// deliveries pair the normalized module name with its data slot.
    ///
    /// Declarations are applied `need`, then `want`, then `may`, so a name
    /// listed twice keeps its last kind.
    pub fn register(&self, registry: &mut Registry) -> Vec<(String, Delivery)> {
        let mut deliveries = Vec::with_capacity(self.modules.len());

        for module in &self.modules {
            let (mut handle, delivery) = registry.main(&module.name);
            for var in &module.need {
                handle.need(&var.name, &var.description, &var.example);
            }
            for var in &module.want {
                handle.want(&var.name, &var.description, &var.example);
            }
            for var in &module.may {
                handle.may(&var.name, &var.description, &var.example);
            }
            deliveries.push((handle.module().name().to_string(), delivery));
        }

        deliveries
    }
}
