use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use install_config::config::{InputsFile, INSTALL_CONFIG_FILENAME};
use install_config::{DirectoryFetcher, InstallConfig, InstallConfigAsset};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Compose, load and validate cluster install configs
#[derive(Parser, Debug)]
#[command(name = "install-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose an install config from an inputs file
    Generate {
        /// Inputs file (defaults to $INSTALL_CONFIG_INPUTS, then the user config dir)
        #[arg(short, long)]
        inputs: Option<PathBuf>,

        /// Write install-config.yml into this directory instead of printing it
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Load and validate a persisted install config
    Load {
        /// Directory containing install-config.yml
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },

    /// Load the persisted install config, generating and writing one if absent
    Ensure {
        /// Directory containing install-config.yml
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Inputs file used when generating
        #[arg(short, long)]
        inputs: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).with_ansi(false).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn generate(asset: &mut InstallConfigAsset, inputs: Option<&Path>) -> Result<()> {
    let (path, inputs) = InputsFile::discover(inputs)?;
    info!("Using inputs from {}", path.display());

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let dependencies = inputs
        .resolve(base_dir)
        .with_context(|| format!("Failed to resolve inputs from {}", path.display()))?;

    asset
        .generate(&dependencies)
        .context("Failed to generate install config")?;
    Ok(())
}

fn print(config: &InstallConfig, format: Format) -> Result<()> {
    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(config)?,
        Format::Json => serde_json::to_string_pretty(config)? + "\n",
    };
    print!("{}", rendered);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    let mut asset = InstallConfigAsset::new();

    match args.command {
        Command::Generate { inputs, dir } => {
            generate(&mut asset, inputs.as_deref())?;
            match dir {
                Some(dir) => {
                    asset.persist(&dir)?;
                }
                None => {
                    for file in asset.files()? {
                        print!("{}", String::from_utf8_lossy(&file.data));
                    }
                }
            }
        }
        Command::Load { dir, format } => {
            let found = asset
                .load(&DirectoryFetcher::new(&dir))
                .with_context(|| {
                    format!(
                        "Failed to load {}",
                        dir.join(INSTALL_CONFIG_FILENAME).display()
                    )
                })?;
            if !found {
                bail!("{} not found in {}", INSTALL_CONFIG_FILENAME, dir.display());
            }
            if let Some(config) = asset.config() {
                print(config, format)?;
            }
        }
        Command::Ensure { dir, inputs } => {
            let found = asset
                .load(&DirectoryFetcher::new(&dir))
                .with_context(|| {
                    format!(
                        "Failed to load {}",
                        dir.join(INSTALL_CONFIG_FILENAME).display()
                    )
                })?;
            if found {
                info!("Using existing {}", INSTALL_CONFIG_FILENAME);
            } else {
                info!("No {} found, generating one", INSTALL_CONFIG_FILENAME);
                generate(&mut asset, inputs.as_deref())?;
                asset.persist(&dir)?;
            }
        }
    }

    Ok(())
}
