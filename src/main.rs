use anyhow::Context;
use clap::Parser;
use farmplan::cli::{Cli, Commands};
use farmplan::config::{Config, OutputFormat};
use farmplan::form::prompt_farm_input;
use farmplan::logic::{Catalog, PlanSelector};
use farmplan::models::FarmInput;
use farmplan::render::{render_assessment, render_catalog, render_plan};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // `init` writes the config, so it must not require one
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_ref())?,
    };

    init_logging(cli.verbose, &config.logging.level);

    let format = cli.format.unwrap_or(config.output.format);
    let catalog_path = cli.catalog.as_ref().or(config.catalog.path.as_ref());

    match cli.command {
        Commands::Plan { ref input } => {
            let input = read_input(input.as_deref())?;
            let selector = PlanSelector::new(load_catalog(catalog_path)?);
            let plan = selector.select(&input)?;
            println!("{}", render_plan(&plan, format)?);
        }
        Commands::Score { ref input } => {
            let input = read_input(input.as_deref())?;
            let selector = PlanSelector::new(load_catalog(catalog_path)?);
            let assessment = selector.assess(&input)?;
            println!("{}", render_assessment(&assessment, format)?);
        }
        Commands::Form { ref save } => {
            let selector = PlanSelector::new(load_catalog(catalog_path)?);
            let input = prompt_farm_input(&FarmInput::default())?;
            if let Some(path) = save {
                std::fs::write(path, serde_yaml::to_string(&input)?)
                    .with_context(|| format!("Failed to save farm input to {:?}", path))?;
                tracing::info!("Saved farm input to {:?}", path);
            }
            let plan = selector.select(&input)?;
            println!("{}", render_plan(&plan, format)?);
        }
        Commands::Catalog => {
            let catalog = load_catalog(catalog_path)?;
            println!("{}", render_catalog(&catalog, format)?);
        }
        Commands::Init => {
            Config::setup_interactive(cli.config.as_ref())?;
        }
        Commands::Check => check(&cli, &config, catalog_path, format)?,
    }

    Ok(())
}

fn init_logging(verbose: u8, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::try_new(configured_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    Catalog::load(path.map(PathBuf::as_path))
        .with_context(|| format!("Failed to load plan catalog from {:?}", path))
}

/// Read a farm input from a file, or stdin when no path (or "-") is given.
/// JSON files are parsed as JSON, everything else as YAML.
fn read_input(path: Option<&Path>) -> anyhow::Result<FarmInput> {
    match path {
        Some(p) if p != Path::new("-") => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read farm input {:?}", p))?;
            let is_json = p
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            let input = if is_json {
                FarmInput::from_json(&content)
            } else {
                FarmInput::from_yaml(&content)
            };
            input.with_context(|| format!("Invalid farm input {:?}", p))
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read farm input from stdin")?;
            // YAML parsing also accepts JSON documents
            FarmInput::from_yaml(&content).context("Invalid farm input on stdin")
        }
    }
}

fn check(
    cli: &Cli,
    config: &Config,
    catalog_path: Option<&PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("Checking configuration...");
    println!();

    if Config::exists(cli.config.as_ref()) {
        println!("  Config:  OK");
    } else {
        println!("  Config:  not found, using defaults");
    }
    println!("  Output:  {}", format);
    println!("  Logging: {}", config.logging.level);

    match catalog_path {
        Some(p) => println!("  Catalog: {}", p.display()),
        None => println!("  Catalog: built-in"),
    }

    let catalog = load_catalog(catalog_path)?;
    match catalog.len() {
        0 => println!("  Plans:   EMPTY (plan selection will fail)"),
        1 => println!("  Plans:   1 (every input maps to the same plan)"),
        n => println!("  Plans:   {} OK", n),
    }

    Ok(())
}
