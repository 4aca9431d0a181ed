use clap::{Parser, Subcommand};
use fspec::AppError;
use fspec::domain::DEFAULT_SPEC_DIR;

#[derive(Parser)]
#[command(name = "fspec")]
#[command(version)]
#[command(
    about = "Manage declarative deployment spec directories",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a spec directory with a README and a generated deployment config
    #[clap(visible_alias = "i")]
    Init {
        /// Directory to store specs in
        #[arg(long, default_value = DEFAULT_SPEC_DIR)]
        specdir: String,
        /// Name for the deployment; defaults to the current directory name
        #[arg(long)]
        name: Option<String>,
        /// Deployment UID to record instead of generating one
        #[arg(long)]
        deployid: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { specdir, name, deployid } => {
            fspec::init(&specdir, name.as_deref(), deployid.as_deref()).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
