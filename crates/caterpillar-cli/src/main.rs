//! CLI entry point for caterpillar-report.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `caterpillar-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use caterpillar_app::{
    RunInput, render_html, render_markdown, run_apis, run_report, serialize_report,
};
use caterpillar_settings::Overrides;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "caterpillar-report",
    version,
    about = "Conversion reports for Chrome Apps converted to web apps"
)]
struct Cli {
    /// Path to caterpillar config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "caterpillar.toml")]
    config: Utf8PathBuf,

    /// Log debug output (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a converted app and write its conversion report.
    Report {
        /// Converted web app directory.
        output_dir: Utf8PathBuf,

        /// Directory holding `<api>.manifest.json` polyfill manifests.
        #[arg(long)]
        polyfills: Utf8PathBuf,

        /// Original Chrome App directory (for its manifest.json).
        #[arg(long)]
        app_dir: Option<Utf8PathBuf>,

        /// Boilerplate directory inside the output directory; never scanned.
        #[arg(long)]
        boilerplate_dir: Option<String>,

        /// Lines of context either side of each usage.
        #[arg(long)]
        context_size: Option<u32>,

        /// Where to write the HTML report (default: <output-dir>/report.html).
        #[arg(long)]
        html_out: Option<Utf8PathBuf>,

        /// Also write the report as JSON.
        #[arg(long)]
        json_out: Option<Utf8PathBuf>,

        /// Print a Markdown summary to stdout.
        #[arg(long)]
        markdown: bool,
    },

    /// Print the Chrome APIs a directory uses, comma-separated.
    Apis {
        /// Directory to scan.
        dir: Utf8PathBuf,
    },

    /// Print the JSON schema of the config file.
    Schema,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("caterpillar-report error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Commands::Report {
            ref output_dir,
            ref polyfills,
            ref app_dir,
            ref boilerplate_dir,
            context_size,
            ref html_out,
            ref json_out,
            markdown,
        } => {
            let overrides = Overrides {
                boilerplate_dir: boilerplate_dir.clone(),
                context_size,
            };
            cmd_report(
                &cli.config,
                output_dir,
                polyfills,
                app_dir.as_deref(),
                overrides,
                html_out.clone(),
                json_out.as_deref(),
                markdown,
            )
        }
        Commands::Apis { ref dir } => cmd_apis(&cli.config, dir),
        Commands::Schema => {
            println!("{}", caterpillar_settings::config_schema_json()?);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_report(
    config: &Utf8Path,
    output_dir: &Utf8Path,
    polyfills: &Utf8Path,
    app_dir: Option<&Utf8Path>,
    overrides: Overrides,
    html_out: Option<Utf8PathBuf>,
    json_out: Option<&Utf8Path>,
    markdown: bool,
) -> anyhow::Result<()> {
    if !output_dir.is_dir() {
        anyhow::bail!("output directory does not exist: {output_dir}");
    }
    let config_text = read_config(config)?;

    let report = run_report(RunInput {
        output_dir,
        polyfill_dir: polyfills,
        app_dir,
        config_text: &config_text,
        overrides,
    })?;

    let html_out = html_out.unwrap_or_else(|| output_dir.join("report.html"));
    write_text_file(&html_out, &render_html(&report)).context("write html report")?;
    tracing::info!(path = %html_out, "wrote report");

    if let Some(path) = json_out {
        let data = serialize_report(&report)?;
        create_parent(path)?;
        std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    }

    if markdown {
        print!("{}", render_markdown(&report));
    }
    Ok(())
}

fn cmd_apis(config: &Utf8Path, dir: &Utf8Path) -> anyhow::Result<()> {
    let config_text = read_config(config)?;
    let apis = run_apis(dir, &config_text, Overrides::default())?;
    println!("{}", apis.join(", "));
    Ok(())
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn create_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    create_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
