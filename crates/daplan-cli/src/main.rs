mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daplan",
    version,
    about = "Extract development application records from council PDF register page dumps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the extraction pipeline over a JSON page dump
    Extract {
        /// Path to a page dump (decoder operators + text runs as JSON)
        input_file: PathBuf,

        /// Directory holding streetnames.txt, streetsuffixes.txt and
        /// suburbnames.txt
        #[arg(short, long, value_name = "DIR")]
        gazetteer: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Normalize a single address against the gazetteer
    Normalize {
        /// Raw address string, e.g. "12 MAIN ST, PENOLA"
        address: String,

        /// Directory holding the gazetteer files
        #[arg(short, long, value_name = "DIR")]
        gazetteer: PathBuf,
    },
    /// Load the gazetteer and print entry counts (doubles as validation)
    Gazetteer {
        /// Directory holding the gazetteer files
        #[arg(short, long, value_name = "DIR")]
        gazetteer: PathBuf,
    },
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            gazetteer,
            output,
            out,
        } => commands::extract::run(input_file, gazetteer, &output, out),
        Commands::Normalize { address, gazetteer } => {
            commands::normalize::run(&address, gazetteer)
        }
        Commands::Gazetteer { gazetteer } => commands::gazetteer::run(gazetteer),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
