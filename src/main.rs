use anyhow::Result;
use clap::{Parser, Subcommand};
use hollywood::{Config, DiversityThresholds, Hollywood};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hollywood")]
#[command(about = "Query the actor/movie graph: casts, filmographies, separation, diversity")]
struct Args {
    /// Cast file (overrides data.cast_file in config.toml)
    #[arg(long, global = true)]
    cast: Option<PathBuf>,

    /// Test-results file (overrides data.results_file in config.toml)
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the movies an actor played in
    MoviesWith { name: String },
    /// List the cast of a movie
    Cast { title: String },
    /// Degree of movie separation between two actors
    Separation { first: String, second: String },
    /// Movies passing both the criteria count and female-percentage thresholds
    Diversity {
        /// Minimum number of criteria passed
        #[arg(long)]
        min_passed: usize,
        /// Female share of the cast (percent) that must be exceeded
        #[arg(long)]
        min_female_percent: f64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every actor and movie
    Summary,
}

fn main() -> Result<()> {
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.logging.log_level.as_str())
    ).init();
    log::info!("Configuration: {}", config.source_description());

    let args = Args::parse();

    let cast_file = args.cast.unwrap_or_else(|| config.cast_file().to_path_buf());
    let results_file = args.results.unwrap_or_else(|| config.results_file().to_path_buf());
    log::info!("Cast file: {}", cast_file.display());
    log::info!("Results file: {}", results_file.display());

    let hollywood = Hollywood::load(&cast_file, &results_file);

    match args.command {
        Command::MoviesWith { name } => match hollywood.describe_person(&name) {
            Some(line) => println!("{}", line),
            None => println!("Actor does not exist in the data file."),
        },
        Command::Cast { title } => match hollywood.describe_work(&title) {
            Some(line) => println!("{}", line),
            None => println!("Movie does not exist in the data file."),
        },
        Command::Separation { first, second } => {
            let degree = hollywood.degree_of_separation(&first, &second);
            println!(
                "The degree of separation between {} and {} is: {}",
                first, second, degree
            );
        }
        Command::Diversity {
            min_passed,
            min_female_percent,
            json,
        } => {
            let thresholds =
                DiversityThresholds::new(min_passed, min_female_percent, config.diversity.criteria)?;
            let report = hollywood.diversity_test(&thresholds);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "\nThere are {} out of {} movies that pass {} of the tests:",
                    report.passed_tests.len(),
                    report.total,
                    min_passed
                );
                println!("{:?}", report.passed_tests);
                println!(
                    "\nThere are {} out of {} movies with a cast of more than {}% women:",
                    report.passed_gender.len(),
                    report.total,
                    min_female_percent
                );
                println!("{:?}", report.passed_gender);
                println!(
                    "\nThere are {} out of {} movies total that pass the full diversity test:",
                    report.passed_both.len(),
                    report.total
                );
                println!("{:?}", report.passed_both);
            }
        }
        Command::Summary => print!("{}", hollywood),
    }

    Ok(())
}
