use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filterer::models::{AppConfig, FilterSelection, FilterSpec};
use filterer::services::{FilterPlan, FilterService};
use rgba_filter::Preset;

#[derive(Parser)]
#[command(name = "filterer")]
#[command(about = "Filterer - composable RGBA image filters for PNG files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply filters to a PNG file
    Apply {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Named preset, e.g. SEPIA_50 (repeatable)
        #[arg(short, long = "preset")]
        preset: Vec<Preset>,

        /// Custom filter, e.g. "grey:20", "sharpen:60", "clear:red" (repeatable)
        #[arg(short, long = "filter")]
        filter: Vec<FilterSpec>,

        /// Quick toggle: SHARPEN_80
        #[arg(long)]
        sharpen: bool,

        /// Quick toggle: SEPIA_50
        #[arg(long)]
        sepia: bool,

        /// Quick toggle: GREY_SCALE_50
        #[arg(long)]
        grey: bool,

        /// Quick toggle: INVERT_50
        #[arg(long)]
        invert: bool,

        /// Config file (overrides FILTERER_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the built-in presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filterer=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Apply {
            input,
            output,
            preset,
            filter,
            sharpen,
            sepia,
            grey,
            invert,
            config,
        }) => {
            let plan = FilterPlan {
                selection: FilterSelection {
                    sharpen,
                    sepia,
                    grey_scale: grey,
                    invert,
                },
                presets: preset,
                custom: filter,
            };
            run_apply_command(&input, &output, &plan, config)
        }
        Some(Commands::Presets { json }) => run_presets_command(json),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Filter one PNG file into another
fn run_apply_command(
    input: &Path,
    output: &Path,
    plan: &FilterPlan,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config_path = config.or_else(|| std::env::var("FILTERER_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    if plan.is_empty() {
        tracing::warn!("No filters selected, image will be re-encoded unchanged");
    }

    let service = FilterService::new(&config);
    let written = service.apply_file(input, output, plan)?;
    println!("Filtered {} ({written} bytes)", output.display());

    Ok(())
}

/// Print the preset catalogue
fn run_presets_command(json: bool) -> anyhow::Result<()> {
    if json {
        let presets: Vec<serde_json::Value> = Preset::ALL
            .iter()
            .map(|preset| {
                serde_json::json!({
                    "name": preset.name(),
                    "filter": preset.filter().name(),
                    "description": preset.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    let width = Preset::ALL
        .iter()
        .map(|preset| preset.name().len())
        .max()
        .unwrap_or(0);
    for preset in Preset::ALL {
        println!("  {:width$}  {}", preset.name(), preset.description());
    }
    Ok(())
}

/// Print version, environment and usage hints
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("FILTERER_CONFIG").ok();
    let config = AppConfig::load(config_file.as_deref().map(Path::new));

    println!("Filterer v{VERSION}");
    println!("Composable RGBA image filters for PNG files\n");

    println!("Environment Variables:");
    println!(
        "  FILTERER_CONFIG = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG        = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("filterer=info (default)")
    );

    println!("\nConfiguration:");
    println!("  Compression: {:?}", config.output.compression);
    println!("  Max pixels:  {}", config.limits.max_pixels);

    println!("\nPresets: {} built in (run `filterer presets`)", Preset::ALL.len());

    println!("\nUsage:");
    println!("  filterer apply -i in.png -o out.png --sepia --sharpen");
    println!("  filterer apply -i in.png -o out.png --preset INVERT_20 --filter grey:10");
    println!("  filterer --help");
}
