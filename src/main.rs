mod cli;

use clap::Parser;
use placement::engine::{self, recommend};
use placement::report::{self, OutputFormat};
use placement::{config, PlacementError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const INVALID_PROFILE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<(), PlacementError> {
    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let cwd = std::env::current_dir()?;
            let cfg = config::load_config(&cwd, cli.config.as_deref())?;
            let profile = cmd.profile.resolve()?.into_profile()?;
            info!("evaluating profile");

            let mut placement_report = engine::evaluate(&profile)?;
            if !(cmd.breakdown || cfg.report.show_breakdown) {
                placement_report.breakdown = None;
            }

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => OutputFormat::Json,
                Some(cli::ReportFormat::Md) => OutputFormat::Md,
                None => cfg.output_format(),
            };
            debug!(?output_format, "rendering report");
            let rendered = report::render(&placement_report, output_format)?;
            println!("{rendered}");
            Ok(())
        }
        cli::Commands::Score(args) => {
            let profile = args.resolve()?.into_profile()?;
            let result = engine::compute_score(&profile)?;
            info!(score = result.score, "scored profile");

            println!("score: {}% ({:.2})", result.percent(), result.score);
            println!("tier: {}", result.tier.label());
            Ok(())
        }
        cli::Commands::Recommend(args) => {
            let profile = args.resolve()?.into_profile()?;
            let recommendations = engine::generate_recommendations(&profile)?;
            info!(count = recommendations.len(), "generated recommendations");

            println!("recommendations:");
            for (index, recommendation) in recommendations.iter().enumerate() {
                println!("{}. {}", index + 1, recommendation);
            }
            Ok(())
        }
        cli::Commands::Rules => {
            for (index, rule) in recommend::rules().iter().enumerate() {
                println!("{}. {}: {}", index + 1, rule.id, rule.message);
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        let code = match e {
            PlacementError::InvalidProfile { .. } => exit_code::INVALID_PROFILE,
            _ => exit_code::RUNTIME_FAILURE,
        };
        std::process::exit(code);
    }
}
