use clap::{Args, Parser, Subcommand, ValueEnum};
use placement::input::load_profile;
use placement::{ProfileInput, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "placement",
    version,
    about = "Placement likelihood scoring and improvement recommendations"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (defaults to ./placement.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile and list recommendations
    Evaluate(EvaluateCommand),
    /// Print the score and risk tier only
    Score(ProfileArgs),
    /// Print the recommendation list only
    Recommend(ProfileArgs),
    /// List the recommendation rules in evaluation order
    Rules,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct EvaluateCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Include the per-term score breakdown
    #[arg(long)]
    pub breakdown: bool,
}

/// Profile document plus per-field overrides.
#[derive(Args)]
pub struct ProfileArgs {
    /// Profile document (.toml or .json)
    pub path: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    pub cgpa: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub communication_score: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub major_projects: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub mini_projects: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub technical_skills_count: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub workshops_attended: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub twelfth_percentage: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub tenth_percentage: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub backlogs: Option<i64>,
    #[arg(long, value_name = "BOOL")]
    pub hackathon: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub internship: Option<bool>,
}

impl ProfileArgs {
    fn overrides(&self) -> ProfileInput {
        ProfileInput {
            cgpa: self.cgpa,
            communication_score: self.communication_score,
            major_projects: self.major_projects,
            mini_projects: self.mini_projects,
            technical_skills_count: self.technical_skills_count,
            workshops_attended: self.workshops_attended,
            twelfth_percentage: self.twelfth_percentage,
            tenth_percentage: self.tenth_percentage,
            backlogs: self.backlogs,
            has_hackathon_experience: self.hackathon,
            has_internship_experience: self.internship,
        }
    }

    /// File values first, flags over them.
    pub fn resolve(&self) -> Result<ProfileInput> {
        let base = match &self.path {
            Some(path) => load_profile(path)?,
            None => ProfileInput::default(),
        };
        Ok(base.overlay(self.overrides()))
    }
}
