//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;

use castpress_catalog::{
    load_catalog, merge_descriptions, restore_descriptions, write_data_script, write_json,
};
use castpress_markup::ExtendedHeadingPolicy;
use castpress_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// castpress — keep a podcast catalog and its static site in sync.
#[derive(Parser)]
#[command(
    name = "castpress",
    version,
    about = "Reconcile podcast episode data and emit static-site files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Merge manually edited descriptions into the canonical catalog.
    Merge {
        /// Canonical catalog JSON (the clean backup).
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Overlay JSON with manually edited descriptions.
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Output path for the merged catalog JSON.
        #[arg(long)]
        out_json: Option<PathBuf>,

        /// Output path for the embeddable data script.
        #[arg(long)]
        out_data: Option<PathBuf>,
    },

    /// Label trailing summary paragraphs across the whole catalog.
    Restore {
        /// Catalog JSON to process.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output path for the processed catalog JSON.
        #[arg(long)]
        out_json: Option<PathBuf>,

        /// Output path for the embeddable data script.
        #[arg(long)]
        out_data: Option<PathBuf>,

        /// Qualifying rule for the heading heuristic: strict or relaxed.
        #[arg(long)]
        policy: Option<String>,
    },

    /// Render the episode card grid as a static HTML fragment.
    Render {
        /// Catalog JSON to render.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file for the grid fragment.
        #[arg(long, default_value = "episodes_grid.html")]
        out: PathBuf,

        /// Maximum number of cards (defaults to the configured home limit).
        #[arg(long)]
        limit: Option<usize>,

        /// Render every episode (archive page).
        #[arg(long)]
        all: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "castpress=info",
        1 => "castpress=debug",
        _ => "castpress=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge {
            catalog,
            overlay,
            out_json,
            out_data,
        } => cmd_merge(
            catalog.as_deref(),
            overlay.as_deref(),
            out_json.as_deref(),
            out_data.as_deref(),
        ),
        Command::Restore {
            catalog,
            out_json,
            out_data,
            policy,
        } => cmd_restore(
            catalog.as_deref(),
            out_json.as_deref(),
            out_data.as_deref(),
            policy.as_deref(),
        ),
        Command::Render {
            catalog,
            out,
            limit,
            all,
        } => cmd_render(catalog.as_deref(), &out, limit, all),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_merge(
    catalog: Option<&Path>,
    overlay: Option<&Path>,
    out_json: Option<&Path>,
    out_data: Option<&Path>,
) -> Result<()> {
    let config = load_config()?;

    let catalog_path = resolve(catalog, &config.paths.catalog_file);
    let overlay_path = resolve(overlay, &config.paths.overlay_file);
    let json_out = resolve(out_json, &config.paths.json_out);
    let data_out = resolve(out_data, &config.paths.data_script_out);

    info!(
        catalog = %catalog_path.display(),
        overlay = %overlay_path.display(),
        "merging overlay into catalog"
    );

    let mut canonical = load_catalog(&catalog_path)?;
    let edits = load_catalog(&overlay_path)?;

    let report = merge_descriptions(&mut canonical, &edits);

    write_json(&canonical, &json_out)?;
    write_data_script(&canonical, &data_out)?;

    println!("Updated {} episodes from manual overlay.", report.updated);
    println!(
        "Saved merged catalog to {} and {}.",
        json_out.display(),
        data_out.display()
    );

    Ok(())
}

fn cmd_restore(
    catalog: Option<&Path>,
    out_json: Option<&Path>,
    out_data: Option<&Path>,
    policy: Option<&str>,
) -> Result<()> {
    let config = load_config()?;

    let catalog_path = resolve(catalog, &config.paths.catalog_file);
    let json_out = resolve(out_json, &config.paths.json_out);
    let data_out = resolve(out_data, &config.paths.data_script_out);

    let policy: ExtendedHeadingPolicy = policy
        .unwrap_or(&config.restore.extended_policy)
        .parse()?;

    info!(catalog = %catalog_path.display(), %policy, "restoring extended descriptions");

    let mut loaded = load_catalog(&catalog_path)?;
    let report = restore_descriptions(&mut loaded, policy);

    write_json(&loaded, &json_out)?;
    write_data_script(&loaded, &data_out)?;

    println!(
        "Successfully processed {} episodes ({} updated).",
        report.processed, report.changed
    );

    Ok(())
}

fn cmd_render(
    catalog: Option<&Path>,
    out: &Path,
    limit: Option<usize>,
    all: bool,
) -> Result<()> {
    let config = load_config()?;

    let catalog_path = resolve(catalog, &config.paths.catalog_file);
    let loaded = load_catalog(&catalog_path)?;

    let limit = if all {
        loaded.len()
    } else {
        limit.unwrap_or(config.site.home_limit)
    };

    info!(catalog = %catalog_path.display(), limit, "rendering episode grid");

    let grid = castpress_site::render_grid(&loaded, limit);
    std::fs::write(out, grid)
        .map_err(|e| castpress_shared::CastpressError::io(out, e))?;

    println!(
        "Rendered {} of {} episode cards to {}.",
        limit.min(loaded.len()),
        loaded.len(),
        out.display()
    );

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

/// CLI flag wins over the configured default.
fn resolve(flag: Option<&Path>, configured: &str) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(configured))
}
