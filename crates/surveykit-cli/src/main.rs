//! The `surveykit` command line: take, score, and validate surveys from fixture files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use surveykit_core::config::{load_config_from, SurveykitConfig};

mod commands;

#[derive(Parser)]
#[command(name = "surveykit", version, about = "Survey answer reconciliation and scoring")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a survey: load answers, apply responses, finish and score
    Take {
        /// Survey fixture (.json or .toml); the built-in demo if omitted
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Response script (.json or .toml) to apply before finishing
        #[arg(long)]
        responses: Option<PathBuf>,

        /// Survey id to report (default: the fixture's id)
        #[arg(long)]
        survey_id: Option<u32>,

        /// Write the completion report JSON into this directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save the completion report into the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Score an answered list (JSON array or fixture with "answers")
    Score {
        /// Path to the answers JSON file
        #[arg(long)]
        answers: PathBuf,
    },

    /// Validate survey fixture files
    Validate {
        /// Path to fixture file or directory
        #[arg(long)]
        fixture: PathBuf,
    },

    /// Change a question's type, resetting its options and reference answer
    Retype {
        /// Path to fixture file
        #[arg(long)]
        fixture: PathBuf,

        /// 1-based question id
        #[arg(long)]
        question: u32,

        /// New type (e.g. OneChoice, MultipleChoice, ShortTextField, DetailedTextField, Matchmaking)
        #[arg(long = "type")]
        kind: String,

        /// Write the updated fixture back instead of printing the question
        #[arg(long)]
        write: bool,
    },

    /// Create starter config and demo fixture
    Init,
}

fn init_tracing(config: &SurveykitConfig) {
    let default_directive = config
        .log_filter
        .parse::<Directive>()
        .or_else(|_| "surveykit=info".parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = default_directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };
    init_tracing(&config);

    let result = match cli.command {
        Commands::Take {
            fixture,
            responses,
            survey_id,
            output,
            save,
        } => {
            let output = output.or_else(|| save.then(|| config.output_dir.clone()));
            commands::take::execute(&config, fixture, responses, survey_id, output)
        }
        Commands::Score { answers } => commands::score::execute(answers),
        Commands::Validate { fixture } => commands::validate::execute(fixture),
        Commands::Retype {
            fixture,
            question,
            kind,
            write,
        } => commands::retype::execute(fixture, question, kind, write),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
