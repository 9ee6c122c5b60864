//! Quickdraw CLI.
//!
//! Spielt aufgezeichnete Zeiger-Striche durch eine Zeichensitzung und gibt
//! die gefitteten Pfade als JSON-Records oder SVG-Dokument aus.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use quickdraw::app::replay::{parse_recording, replay_strokes};
use quickdraw::{DrawController, DrawOptions, DrawState, PathRecord};
use std::path::PathBuf;

/// Ausgabeformat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Svg,
}

/// Freihand-Striche fitten und ausgeben
#[derive(Parser, Debug)]
#[command(name = "quickdraw")]
#[command(about = "Fittet aufgezeichnete Freihand-Striche zu kubischen Bézier-Pfaden")]
#[command(version)]
struct Args {
    /// JSON-Aufzeichnung (`[{ "samples": [{ "x", "y", "t" }] }]`)
    input: PathBuf,

    /// Ausgabeformat
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Optionen-Datei (Standard: quickdraw.toml neben der Binary)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fit-Toleranz überschreiben (quadrierter Abstand)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Basis-Schwelle der Ausdünnung überschreiben
    #[arg(long)]
    threshold: Option<f64>,

    /// SVG-Breite
    #[arg(long, default_value = "1024")]
    width: f64,

    /// SVG-Höhe
    #[arg(long, default_value = "768")]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Quickdraw v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().unwrap_or_else(DrawOptions::config_path);
    let mut options = DrawOptions::load_from_file(&config_path);
    if let Some(tolerance) = args.tolerance {
        options.fit_tolerance = tolerance;
    }
    if let Some(threshold) = args.threshold {
        options.base_threshold = threshold;
    }
    options.validate().context("Ungültige Kommandozeilen-Optionen")?;

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Aufzeichnung nicht lesbar: {}", args.input.display()))?;
    let strokes = parse_recording(&json)?;

    let mut state = DrawState::with_options(options);
    let mut controller = DrawController::new();
    replay_strokes(&mut controller, &mut state, &strokes)?;
    log::info!("{} Strich(e) verarbeitet", strokes.len());

    let output = match args.format {
        OutputFormat::Json => {
            let records: Vec<PathRecord> = state.visible_paths().map(|p| p.serialize()).collect();
            serde_json::to_string_pretty(&records)?
        }
        OutputFormat::Svg => {
            quickdraw::render::svg_document(state.visible_paths(), args.width, args.height)
        }
    };
    println!("{}", output);
    Ok(())
}
