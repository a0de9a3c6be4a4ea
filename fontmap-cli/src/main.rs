use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ps_fontmap::{font_map_for, font_name_list_for, FontMap, FontMapKey, FontRequest};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "psfontmap",
    about = "Resolve PostScript font names and build font maps",
    version,
    author
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the PostScript names of the four styles of a family
    Names {
        /// Family name, spelled as it should appear in PostScript
        family: String,
    },

    /// Print the font map for requests, or the default map
    Map {
        /// Requests as FAMILY:PITCH[,PITCH...] (e.g. "DejaVu Sans:10,12")
        requests: Vec<FontRequest>,

        /// Emit JSON instead of text
        #[arg(short, long)]
        json: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether a font is mapped and print its substitution
    Query {
        /// Font as "FAMILY PITCH [bold] [italic]" (braces around spaced families)
        font: FontMapKey,

        /// Requests to build the map from (defaults to the default map)
        requests: Vec<FontRequest>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ps_fontmap=debug,psfontmap=debug"
    } else {
        "ps_fontmap=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render_map(map: &FontMap, json: bool) -> Result<String> {
    if json {
        let mut rendered = serde_json::to_string_pretty(map)?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(map.to_postscript_fontmap())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Names { family } => {
            for (style, name) in font_name_list_for(&family).iter() {
                println!("{style}: {}", name.unwrap_or("-"));
            }
        }

        Commands::Map {
            requests,
            json,
            output,
        } => {
            let map = font_map_for(&requests)?;
            debug!(requests = requests.len(), entries = map.len(), "built font map");
            let rendered = render_map(&map, json)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} entries to {}", map.len(), path.display());
                }
                None => print!("{rendered}"),
            }
        }

        Commands::Query { font, requests } => {
            let map = font_map_for(&requests)?;
            match map.get(&font) {
                Some(value) => println!("{font} -> {value}"),
                None => {
                    eprintln!("Not mapped: {font}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
