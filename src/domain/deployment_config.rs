use serde::Serialize;

use super::AppError;

/// API version stamped into every generated deployment config.
pub const SPEC_API_VERSION: &str = "fission.io/v1";

const DEPLOYMENT_CONFIG_KIND: &str = "DeploymentConfig";

const GENERATED_BANNER: &str = "# This file is generated by the 'fspec init' command.\n\
# See the README in this directory for background and usage information.\n\
# Do not edit the UID below: that will break 'fspec apply'\n";

/// The persisted deployment configuration for a spec directory.
///
/// All resources created under the spec directory are annotated with the UID.
/// This allows apply-style tooling to be idempotent, as well as to delete
/// resources when their specs are removed.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentConfig {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
}

impl DeploymentConfig {
    /// Build a config with the fixed apiVersion/kind pair.
    pub fn new(name: String, uid: String) -> Self {
        Self {
            api_version: SPEC_API_VERSION.to_string(),
            kind: DEPLOYMENT_CONFIG_KIND.to_string(),
            name,
            uid,
        }
    }

    /// Render the config as YAML, prefixed with the generated-file banner.
    pub fn render(&self) -> Result<String, AppError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{}{}", GENERATED_BANNER, yaml))
    }
}
