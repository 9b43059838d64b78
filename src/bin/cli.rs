// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! partscad CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use partscad::cli::Reporter;
use partscad::{models, Config, ScadRenderer};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "partscad")]
#[command(about = "Parametric parts with anchor-based positioning, rendered to OpenSCAD", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available models
    List,

    /// Render a model to a .scad file
    Render {
        /// Model name
        model: String,

        /// Output file (default: <output_dir>/<model>.scad)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (default: partscad.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fixed number of fragments ($fn)
        #[arg(long = "fn")]
        fn_: Option<u32>,

        /// Minimum fragment angle ($fa)
        #[arg(long)]
        fa: Option<f64>,

        /// Minimum fragment size ($fs)
        #[arg(long)]
        fs: Option<f64>,
    },

    /// Print the anchors of a model or of one of its parts
    Anchors {
        /// Model name
        model: String,

        /// Dotted part path, e.g. `head` or `holes.2`
        #[arg(short, long)]
        part: Option<String>,
    },

    /// Dump the solid tree of a model as JSON
    Dump {
        /// Model name
        model: String,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List => {
            Reporter::report_models(models::catalog());
            Ok(())
        }
        Commands::Render {
            model,
            output,
            config,
            fn_,
            fa,
            fs,
        } => render_command(&model, output, config.as_deref(), fn_, fa, fs),
        Commands::Anchors { model, part } => anchors_command(&model, part.as_deref()),
        Commands::Dump { model, output } => dump_command(&model, output.as_deref()),
        Commands::Version => {
            println!("partscad v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(err) = &result {
        Reporter::report_error(&format!("{err:#}"));
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => Config::load(),
    }
}

fn render_command(
    name: &str,
    output: Option<PathBuf>,
    config: Option<&Path>,
    fn_: Option<u32>,
    fa: Option<f64>,
    fs: Option<f64>,
) -> Result<()> {
    let mut config = load_config(config)?;
    if fn_.is_some() {
        config.render.fn_ = fn_;
    }
    if fa.is_some() {
        config.render.fa = fa;
    }
    if fs.is_some() {
        config.render.fs = fs;
    }

    let model = models::find(name)?;
    let start = std::time::Instant::now();
    let object = model
        .build()
        .with_context(|| format!("Failed to build model `{name}`"))?;

    let path = output.unwrap_or_else(|| config.output_dir.join(format!("{name}.scad")));
    let renderer = ScadRenderer::new(&config);
    for library in renderer.unresolved_libraries(object.solid()) {
        Reporter::report_warning(&format!(
            "`{library}` is not in any configured library path, leaving it to OpenSCAD"
        ));
    }
    renderer.render_to_file(&object, &path)?;
    let bytes = std::fs::metadata(&path).map(|m| m.len() as usize).unwrap_or(0);

    Reporter::report_render(name, &path, bytes, start.elapsed());
    Ok(())
}

fn anchors_command(name: &str, part: Option<&str>) -> Result<()> {
    let object = models::find(name)?
        .build()
        .with_context(|| format!("Failed to build model `{name}`"))?;

    let (title, target) = match part {
        Some(path) => (format!("{name}.{path}"), object.find(path)?),
        None => (name.to_string(), &object),
    };
    Reporter::report_anchors(&title, target.anchors());

    let parts: Vec<_> = target.part_names().collect();
    if !parts.is_empty() {
        println!("{} {}", "Parts:".bold(), parts.join(", "));
    }
    Ok(())
}

fn dump_command(name: &str, output: Option<&Path>) -> Result<()> {
    let object = models::find(name)?
        .build()
        .with_context(|| format!("Failed to build model `{name}`"))?;
    let json = serde_json::to_string_pretty(object.solid())?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write JSON file: {:?}", output_path))?;
        Reporter::success(&format!("Solid tree written to {}", output_path.display()));
    } else {
        println!("{}", json);
    }
    Ok(())
}
