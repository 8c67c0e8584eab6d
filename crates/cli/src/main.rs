#![deny(unsafe_code)]
//! CLI binary for the strata noise compositor.
//!
//! Subcommands:
//! - `render <layers.json>` — composite a layer stack, write PNG
//! - `heights <layers.json>` — composite a height field, write JSON
//! - `preset` — print the starter layer stack as JSON

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use strata_compose::{compose_heights, compose_rgb, snapshot};
use strata_core::{CompositionSettings, LayerDescriptor};

#[derive(Parser)]
#[command(name = "strata", about = "Layered fractal noise compositor CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Composite a layer stack into a PNG image.
    Render {
        /// Path to a JSON array of layers. Omit to use the starter stack.
        layers: Option<PathBuf>,

        /// Composition settings as a JSON file (resolution, tinting, ranges).
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Output edge length in pixels (overrides settings).
        #[arg(short, long)]
        resolution: Option<usize>,

        /// Disable hypsometric tinting and render grayscale.
        #[arg(long)]
        no_tint: bool,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Composite a layer stack into a height field and write it as JSON.
    Heights {
        /// Path to a JSON array of layers. Omit to use the starter stack.
        layers: Option<PathBuf>,

        /// Grid edge length in samples.
        #[arg(short, long, default_value_t = 50)]
        grid: usize,

        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the starter layer stack as JSON.
    Preset,
}

/// Loads a layer stack from a bare JSON array, or the starter stack when no
/// path is given.
fn load_layers(path: Option<&Path>) -> Result<Vec<LayerDescriptor>, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid layer JSON: {e}")))
        }
        None => Ok(vec![LayerDescriptor::default()]),
    }
}

fn load_settings(path: Option<&Path>) -> Result<CompositionSettings, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid settings JSON: {e}")))
        }
        None => Ok(CompositionSettings::default()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            layers,
            settings,
            resolution,
            no_tint,
            output,
        } => {
            let stack = load_layers(layers.as_deref())?;
            let mut settings = load_settings(settings.as_deref())?;
            if let Some(resolution) = resolution {
                settings.resolution = resolution;
            }
            if no_tint {
                settings.hypsometric_tinting = false;
            }

            let raster = compose_rgb(&stack, &settings)?;
            snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "layers": stack.len(),
                    "resolution": settings.resolution,
                    "tinting": settings.hypsometric_tinting,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} layer(s) at {res}x{res} -> {out}",
                    stack.len(),
                    res = settings.resolution,
                    out = output.display()
                );
            }
        }
        Command::Heights {
            layers,
            grid,
            output,
        } => {
            let stack = load_layers(layers.as_deref())?;
            let heights = compose_heights(&stack, grid)?;

            let doc = serde_json::json!({
                "grid_size": heights.grid_size(),
                "heights": heights.data(),
            });
            let text = serde_json::to_string_pretty(&doc)?;
            match &output {
                Some(path) => {
                    fs::write(path, text)
                        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                    if !cli.json {
                        eprintln!(
                            "composed {} layer(s) into a {grid}x{grid} height field -> {}",
                            stack.len(),
                            path.display()
                        );
                    }
                }
                None => println!("{text}"),
            }
            if cli.json {
                let info = serde_json::json!({
                    "layers": stack.len(),
                    "grid_size": grid,
                    "output": output.map(|p| p.display().to_string()),
                });
                eprintln!("{}", serde_json::to_string_pretty(&info)?);
            }
        }
        Command::Preset => {
            let stack = vec![LayerDescriptor::default()];
            println!("{}", serde_json::to_string_pretty(&stack)?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_layers_defaults_to_starter_stack() {
        let stack = load_layers(None).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].name, "Base Layer");
    }

    #[test]
    fn load_layers_reads_bare_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "a", "seed": 7}}, {{"name": "b", "visible": false}}]"#
        )
        .unwrap();
        let stack = load_layers(Some(file.path())).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack[0].noise.seed, 7);
        assert!(!stack[1].visible);
    }

    #[test]
    fn load_layers_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_layers(Some(file.path())).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn load_layers_missing_file_is_io_error() {
        let err = load_layers(Some(Path::new("/nonexistent/layers.json"))).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn load_settings_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.resolution, 400);
        assert!(settings.hypsometric_tinting);
    }

    #[test]
    fn load_settings_reads_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resolution": 64, "hypsometric_tinting": false}}"#).unwrap();
        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.resolution, 64);
        assert!(!settings.hypsometric_tinting);
        assert!(!settings.ranges.is_empty());
    }

    #[test]
    fn cli_parses_render_defaults() {
        let cli = Cli::try_parse_from(["strata", "render"]).unwrap();
        match cli.command {
            Command::Render {
                layers,
                resolution,
                no_tint,
                output,
                ..
            } => {
                assert!(layers.is_none());
                assert!(resolution.is_none());
                assert!(!no_tint);
                assert_eq!(output, PathBuf::from("output.png"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn cli_parses_heights_grid() {
        let cli = Cli::try_parse_from(["strata", "heights", "--grid", "32"]).unwrap();
        match cli.command {
            Command::Heights { grid, .. } => assert_eq!(grid, 32),
            _ => panic!("expected heights"),
        }
    }

    #[test]
    fn preset_round_trips_through_serde() {
        let stack = vec![LayerDescriptor::default()];
        let text = serde_json::to_string_pretty(&stack).unwrap();
        let back: Vec<LayerDescriptor> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, stack);
    }
}
