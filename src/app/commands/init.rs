use uuid::Uuid;

use crate::domain::{AppError, DeploymentConfig, kubify_name};
use crate::ports::SpecStore;

const SPEC_README: &str = "\
Deployment Specs
================

This directory holds a set of declarative specifications for a deployment.
Each YAML file here describes a resource to be created on the cluster.

How to use these specs
----------------------

These specs are handled with the 'fspec' command.  See 'fspec --help'.

'fspec init' created this directory along with fission-deployment-config.yaml,
which records a unique deployment identifier (UID).  Apply-style tooling
stamps every resource it creates with this UID, so it can reconcile the
directory against the cluster idempotently and safely delete resources whose
specs have been removed.

Do not edit the UID in fission-deployment-config.yaml by hand.
";

/// Options for the init command.
///
/// Empty strings are treated as absent, matching how the flags arrive from
/// the CLI layer.
#[derive(Debug, Default)]
pub struct InitOptions {
    /// Deployment name; derived from the current directory when absent.
    pub name: Option<String>,
    /// Deployment UID; generated when absent.
    pub deploy_id: Option<String>,
}

/// Result of a successful init.
#[derive(Debug)]
pub struct InitOutcome {
    pub name: String,
    pub uid: String,
}

/// Execute the init command.
///
/// Creates the spec directory and writes the README and deployment config
/// into it. Refuses to touch a directory that already holds a config.
pub fn execute<S: SpecStore>(store: &S, options: InitOptions) -> Result<InitOutcome, AppError> {
    let name = match options.name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => current_dir_name()?,
    };

    let uid = match options.deploy_id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => Uuid::new_v4().to_string(),
    };

    store.create_dir()?;

    if store.config_exists() {
        return Err(AppError::ConfigExists { dir: store.spec_path().display().to_string() });
    }

    store.write_readme(SPEC_README)?;

    let config = DeploymentConfig::new(name.clone(), uid.clone());
    store.write_config(&config.render()?)?;

    Ok(InitOutcome { name, uid })
}

/// Normalized base name of the current working directory.
fn current_dir_name() -> Result<String, AppError> {
    let cwd = std::env::current_dir()?;
    let basename = cwd.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    Ok(kubify_name(&basename))
}
