use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hollywood::graph::{load_tgf, load_tgf_lenient};
use hollywood::{Config, Hollywood};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tgf")]
#[command(about = "Export the actor/movie graph to TGF, or inspect a TGF file")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the graph from the configured data files and save it as TGF
    Export {
        /// Output file (defaults to data.tgf_output in config.toml)
        out: Option<PathBuf>,
    },
    /// Load a TGF file and report its size
    Inspect {
        file: PathBuf,
        /// Keep going past a malformed arc section instead of failing
        #[arg(short, long)]
        lenient: bool,
        /// Print every vertex and its arcs
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.logging.log_level.as_str())
    ).init();
    log::info!("Configuration: {}", config.source_description());

    let args = Args::parse();

    match args.command {
        Command::Export { out } => {
            let out = out.unwrap_or_else(|| config.data.tgf_output.clone());
            let hollywood = Hollywood::load(config.cast_file(), config.results_file());
            hollywood
                .save_tgf(&out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            log::info!(
                "Wrote {} vertices and {} arcs to {}",
                hollywood.graph().num_vertices(),
                hollywood.graph().num_arcs(),
                out.display()
            );
        }
        Command::Inspect {
            file,
            lenient,
            verbose,
        } => {
            let graph = if lenient {
                load_tgf_lenient(&file)
            } else {
                load_tgf(&file).with_context(|| format!("Failed to load {}", file.display()))?
            };
            println!("Vertices: {}", graph.num_vertices());
            println!("Arcs: {}", graph.num_arcs());
            if verbose {
                println!("{}", graph);
            }
        }
    }

    Ok(())
}
