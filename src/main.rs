use std::path::PathBuf;
use std::process;

use peercheck::{
    cli::{Args, Command},
    config::{self, CliArgs, DEFAULT_CONFIG_FILE},
    core::{CheckOptions, PeerDependencyChecker},
    error::{ErrorSeverity, PeerCheckError, Result, ResultExt},
    models::config::Settings,
    output::{create_formatter, create_writer},
    NAME, VERSION,
};

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);

    let exit_code = run_command(command);

    process::exit(exit_code);
}

fn init_logger(settings: &Settings) {
    let default_filter = if settings.debug { "warn,peercheck=debug" } else { "warn" };
    // A logger may already be installed when running embedded; keep it
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).try_init();
}

/// Run the command and map the outcome to an exit code
fn run_command(command: Command) -> i32 {
    match execute_command(command) {
        Ok(has_problems) => i32::from(has_problems),
        Err(err) => {
            eprintln!("Error: {}", err.user_message());

            match &err {
                PeerCheckError::InvalidPath { .. } => {
                    eprintln!("Suggestion: Check that the path exists and is accessible");
                }
                PeerCheckError::ConfigNotFound { .. } => {
                    eprintln!(
                        "Suggestion: Run `{} --init` to create a {} file or point --config at an existing one",
                        NAME, DEFAULT_CONFIG_FILE
                    );
                }
                PeerCheckError::MissingManifest { .. } => {
                    eprintln!("Suggestion: Run {} from a package directory or pass --path", NAME);
                }
                PeerCheckError::UnresolvedDependency { .. } => {
                    eprintln!("Suggestion: Install dependencies first, the package tree is incomplete");
                }
                _ => {}
            }

            // No report was produced, so even a warning fails the run
            match err.severity() {
                ErrorSeverity::Warning | ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}

/// Execute the command, returning whether the report found problems
fn execute_command(command: Command) -> Result<bool> {
    match command {
        Command::Init => {
            let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

            if config_path.exists() {
                println!("Configuration file already exists at: {}", config_path.display());
                println!("To overwrite it, delete the file first and run this command again.");
                return Ok(false);
            }

            config::create_default_config(&config_path)?;

            println!("Created default configuration file at: {}", config_path.display());
            println!("Every setting is commented out; uncomment the ones you want to change.");

            Ok(false)
        }
        Command::Check(args) => {
            let settings = config::load_config(CliArgs::from(&args))?;
            init_logger(&settings);

            log::info!("{} v{} checking {}", NAME, VERSION, settings.root_path.display());

            let checker = PeerDependencyChecker::new(CheckOptions::from_settings(&settings))?;
            let report = checker.check(&settings.root_path)?;

            let formatter = create_formatter(
                settings.output_format,
                settings.use_colors && settings.output_file.is_none(),
                settings.verbose,
                settings.quiet,
            );
            let content = formatter
                .format(&report)
                .with_context(|| "Failed to format the peer dependency report")?;

            create_writer(settings.output_file.as_ref()).write(&content)?;

            if let Some(output_file) = &settings.output_file {
                if !settings.quiet {
                    eprintln!("Report written to {}", output_file.display());
                }
            }

            Ok(report.has_problems())
        }
    }
}
