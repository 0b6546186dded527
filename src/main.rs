//! Resume ranker: score and rank resumes against a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction, DocumentKind};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::input::InputManager;
use resume_ranker::output::{save_report_to_file, ReportGenerator};
use resume_ranker::processing::analyzer::FailedResume;
use resume_ranker::processing::{JobDescription, ResumeInput, ScreeningEngine};
use resume_ranker::{Result, ResumeRankerError};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, cli.config, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: Option<PathBuf>, config: Config) -> Result<()> {
    match command {
        Commands::Score { resume, job, output, detailed, save } => {
            validate_input(&resume, "Resume file")?;
            validate_input(&job, "Job description file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
            let job = JobDescription::new(input_manager.extract_text(&job).await?)?;
            let resume_text = input_manager.extract_text(&resume).await?;

            let engine = ScreeningEngine::new(&config.extraction);
            let report = engine.score(&resume_text, &job)?;

            let generator = report_generator(&config, detailed);
            let rendered = generator.score_report(&display_name(&resume), &report, format)?;
            emit(&rendered, save.as_deref())
        }

        Commands::Rank { job, resumes, output, detailed, save } => {
            validate_input(&job, "Job description file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
            let job = JobDescription::new(input_manager.extract_text(&job).await?)?;

            let progress = ProgressBar::new(resumes.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            // Unreadable files still take part in the ranking and show up as failures
            let mut inputs = Vec::with_capacity(resumes.len());
            let mut unreadable = Vec::new();
            for path in &resumes {
                let name = display_name(path);
                progress.set_message(name.clone());
                let text = match validate_input(path, "Resume file") {
                    Ok(()) => input_manager.extract_text(path).await,
                    Err(e) => Err(e),
                };
                match text {
                    Ok(text) => inputs.push(ResumeInput::new(name, text)),
                    Err(e) => unreadable.push((name, e.to_string())),
                }
                progress.inc(1);
            }
            progress.finish_and_clear();

            let engine = ScreeningEngine::new(&config.extraction);
            let mut ranking = engine.rank(&inputs, &job)?;
            ranking
                .failed
                .extend(unreadable.into_iter().map(|(name, error)| FailedResume { name, error }));

            let generator = report_generator(&config, detailed);
            let rendered = generator.ranking_report(&ranking, format)?;
            emit(&rendered, save.as_deref())
        }

        Commands::Extract { file, kind } => {
            validate_input(&file, "Input file")?;
            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&file).await?;

            let engine = ScreeningEngine::new(&config.extraction);
            let info = match kind {
                DocumentKind::Resume => engine.extract_resume(&text)?,
                DocumentKind::Job => engine.extract_job(&JobDescription::new(text)?)?,
            };
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    info!("Configuration reset: {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
            Ok(())
        }
    }
}

fn validate_input(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| ResumeRankerError::InvalidInput(format!("{}: {}", label, e)))
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeRankerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn report_generator(config: &Config, detailed: bool) -> ReportGenerator {
    ReportGenerator::with_options(
        config.output.color_output,
        detailed || config.output.detailed,
        true,
    )
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, path)?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
