//! Shape Raster driver
//!
//! Loads a scene (or builds the demo one), draws it and writes the
//! screenshot next to the requested name.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use shape_raster::rasterizer::{screenshot_path, Color, Framebuffer, Screen};
use shape_raster::scene::{load_scene, save_scene, Scene};
use shape_raster::VERSION;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a RON scene file
    Render {
        scene: PathBuf,
        /// Screenshot name (".ppm" is appended); overrides the scene's own
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report shapes that fail to draw and continue with the rest
        #[arg(short, long, default_value_t = false)]
        keep_going: bool,
    },
    /// Draw the built-in demo scene
    Demo {
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write the demo scene as RON to this path
        #[arg(short, long)]
        save_scene: Option<PathBuf>,
    },
    /// Print the color table, or one entry of it
    Colors {
        /// Color name, e.g. "orange"
        name: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { scene, output, keep_going } => {
            let loaded = load_scene(&scene)
                .with_context(|| format!("Failed to load scene {}", scene.display()))?;
            println!(
                "Loaded scene {} ({}x{}, {} shapes)",
                scene.display(),
                loaded.width,
                loaded.height,
                loaded.shapes.len()
            );
            render(&loaded, output, keep_going)
        }
        Commands::Demo { output, save_scene: dump } => {
            let scene = Scene::demo();
            if let Some(path) = dump {
                save_scene(&scene, &path)
                    .with_context(|| format!("Failed to save scene {}", path.display()))?;
                println!("Saved demo scene to {}", path.display());
            }
            render(&scene, output, false)
        }
        Commands::Colors { name } => {
            let colors = match name {
                Some(name) => vec![name.parse::<Color>()?],
                None => Color::ALL.to_vec(),
            };
            for color in colors {
                match color.lookup() {
                    Some(rgb) => println!("{:<8} {:>3} {:>3} {:>3}", color, rgb.r, rgb.g, rgb.b),
                    None => bail!("color table has no entry for {}", color),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn render(scene: &Scene, output: Option<PathBuf>, keep_going: bool) -> Result<ExitCode> {
    println!("=== Shape Raster v{} ===", VERSION);
    let mut fb = Framebuffer::default();
    let mut failed = 0;

    if keep_going {
        for outcome in scene.draw_all(&mut fb).context("Failed to set up screen")? {
            if let Err(e) = outcome.result {
                eprintln!("Skipping shape #{} ({}): {}", outcome.index, outcome.kind, e);
                failed += 1;
            }
        }
    } else {
        scene.draw(&mut fb).context("Failed to draw scene")?;
    }

    let name = output.unwrap_or_else(|| PathBuf::from(&scene.output));
    fb.screen_shot(&name)
        .with_context(|| format!("Failed to write screenshot {}", screenshot_path(&name).display()))?;

    let (max_x, max_y) = fb.max_xy();
    println!(
        "Wrote {} ({}x{}, {} of {} shapes drawn)",
        screenshot_path(&name).display(),
        max_x,
        max_y,
        scene.shapes.len() - failed,
        scene.shapes.len()
    );

    Ok(if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
