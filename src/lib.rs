//! fspec: initialize declarative spec directories for deployments.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::init::{self, InitOptions};
use ports::SpecStore;
use services::FilesystemSpecStore;

pub use app::commands::init::InitOutcome;
pub use domain::AppError;

/// Initialize a spec directory with a README and a generated deployment config.
///
/// `spec_dir` is resolved relative to the current working directory. An empty
/// or absent `name` falls back to the normalized base name of the current
/// directory; an empty or absent `deploy_id` gets a fresh UUID.
pub fn init(
    spec_dir: &str,
    name: Option<&str>,
    deploy_id: Option<&str>,
) -> Result<InitOutcome, AppError> {
    let store = FilesystemSpecStore::current(spec_dir)?;

    println!("Creating spec directory '{}'", store.spec_path().display());

    let options = InitOptions {
        name: name.map(str::to_string),
        deploy_id: deploy_id.map(str::to_string),
    };
    init::execute(&store, options)
}
