mod deployment_config;
mod error;
mod name;
mod paths;

pub use deployment_config::{DeploymentConfig, SPEC_API_VERSION};
pub use error::AppError;
pub use name::kubify_name;
pub use paths::{DEFAULT_SPEC_DIR, DEPLOYMENT_CONFIG_FILE, README_FILE};
