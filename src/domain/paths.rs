/// Default spec directory, relative to the current working directory.
pub const DEFAULT_SPEC_DIR: &str = "specs";

/// Documentation file written into every spec directory.
pub const README_FILE: &str = "README";

/// Deployment config file written into every spec directory.
pub const DEPLOYMENT_CONFIG_FILE: &str = "fission-deployment-config.yaml";
