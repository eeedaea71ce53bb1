use clap::{Parser, Subcommand};
use picture_frame::breakpoints::{BreakpointName, BreakpointTable};
use picture_frame::image_set::ImageSet;
use picture_frame::render::{self, Capabilities};
use picture_frame::{config, output, resolve};
use std::path::PathBuf;

/// How the active breakpoint is chosen.
#[derive(clap::Args, Clone)]
struct ViewportArgs {
    /// Active breakpoint (xs, sm, md, lg, xl, xxl)
    #[arg(long, conflicts_with = "viewport")]
    breakpoint: Option<BreakpointName>,

    /// Viewport width in CSS pixels, mapped through the breakpoint table
    #[arg(long)]
    viewport: Option<u32>,
}

impl ViewportArgs {
    /// Neither flag means an unknown viewport.
    fn active(&self, table: &BreakpointTable) -> Option<BreakpointName> {
        self.breakpoint
            .or_else(|| self.viewport.and_then(|px| table.breakpoint_for_width(px)))
    }
}

#[derive(Parser)]
#[command(name = "picture-frame")]
#[command(about = "Responsive <picture> resolution across viewport breakpoints")]
#[command(long_about = "\
Responsive <picture> resolution across viewport breakpoints

An image set is a JSON file with one optional image per breakpoint. Only xs
is required; every other breakpoint falls back to the nearest smaller one.

  {
    \"alt\": \"Harbour at dusk\",
    \"xs\": { \"url\": \"/img/harbour-400.jpg\", \"width\": 400, \"height\": 300 },
    \"md\": { \"url\": \"/img/harbour-800.jpg\", \"width\": 800, \"height\": 600 }
  }

Breakpoint thresholds come from config.toml in --config-dir.
Run 'picture-frame gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the intrinsic size at the active breakpoint
    Resolve {
        /// Image set JSON file
        image: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List <source> candidates, largest breakpoint first
    Sources {
        /// Image set JSON file
        image: PathBuf,
        /// Browser supports WebP
        #[arg(long)]
        webp: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the <picture> markup
    Render {
        /// Image set JSON file
        image: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        /// Browser supports WebP
        #[arg(long)]
        webp: bool,
    },
    /// Validate an image set against the config
    Check {
        /// Image set JSON file
        image: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let load_config = || config::load_config(&cli.config_dir);

    match cli.command {
        Command::Resolve {
            image,
            viewport,
            json,
        } => {
            let config = load_config()?;
            let table = &config.breakpoints;
            let set = ImageSet::load(&image)?;
            let active = viewport.active(table);
            let dims = resolve::resolve_dimensions(active, &set.entries(table))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dims)?);
            } else {
                // Zero width is still a valid resolution; only padding fails.
                let padding = resolve::compute_aspect_padding(dims).ok();
                output::print_resolution(active, dims, padding.as_deref());
            }
        }
        Command::Sources { image, webp, json } => {
            let config = load_config()?;
            let table = &config.breakpoints;
            let set = ImageSet::load(&image)?;
            let candidates = resolve::build_source_candidates(&set.entries(table), webp)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                output::print_sources(&candidates);
            }
        }
        Command::Render {
            image,
            viewport,
            webp,
        } => {
            let config = load_config()?;
            let table = &config.breakpoints;
            let set = ImageSet::load(&image)?;
            let caps = Capabilities {
                breakpoint: viewport.active(table),
                webp,
            };
            let markup = render::render_picture(&set, caps, &config)?;
            println!("{}", markup.into_string());
        }
        Command::Check { image } => {
            let config = load_config()?;
            let table = &config.breakpoints;
            let set = ImageSet::load(&image)?;
            let entries = set.entries(table);
            println!("==> Checking {}", image.display());
            output::print_check(&entries);
            resolve::resolve_dimensions(None, &entries)?;
            println!("==> Image set is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
