//! Resume forge: roast an existing resume or build a tailored one

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_forge::cli::{self, Cli, Commands, ConfigAction, ResumeSource};
use resume_forge::config::Config;
use resume_forge::error::{Result, ResumeForgeError};
use resume_forge::generation::{
    document_filename, render_resume_document, ContentGenerator, DocumentKind, PersonalInfo,
    COMPANY_PLACEHOLDER,
};
use resume_forge::input::{require_resume_text, InputManager};
use resume_forge::output::{
    render_cover_letter_preview, save_report_to_file, suggest_filename, ReportGenerator, RoastReport,
};
use resume_forge::processing::ResumeAnalyzer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if cli.no_color || !config.output.color_output {
        config.output.color_output = false;
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Roast {
            input,
            resume,
            text,
            output,
            save,
            detailed,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeForgeError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let source = ResumeSource::resolve(input, resume, text).ok_or_else(|| {
                ResumeForgeError::InvalidInput(resume_forge::input::NO_RESUME_MESSAGE.to_string())
            })?;

            let input_manager = InputManager::new();
            let resume_text = match &source {
                ResumeSource::File(path) => {
                    cli::validate_file_extension(path, cli::RESUME_EXTENSIONS)
                        .map_err(|e| ResumeForgeError::UnsupportedFormat(format!("Resume file: {}", e)))?;
                    input_manager.extract_text(path).await?
                }
                ResumeSource::Text(text) => text.clone(),
                ResumeSource::Stdin => input_manager.read_stdin().await?,
            };
            require_resume_text(&resume_text)?;

            info!("Roasting resume from {}", source.describe());
            simulate_work("Analyzing Resume...", config.analysis.simulated_delay_ms).await?;

            let analyzer = ResumeAnalyzer::new();
            let word_count = analyzer.signals(&resume_text).word_count;
            let feedback = analyzer.analyze(&resume_text);
            info!("Analysis complete: overall score {}/10", feedback.overall_score);

            let report = RoastReport::new(feedback, source.describe(), word_count);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed,
                config.output.pretty_json,
            );
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(output_format, &report.metadata.source, true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Build {
            info: info_path,
            job,
            output_dir,
            preview,
        } => {
            cli::validate_file_extension(&info_path, cli::INFO_EXTENSIONS)
                .map_err(|e| ResumeForgeError::UnsupportedFormat(format!("Personal info file: {}", e)))?;
            cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
                .map_err(|e| ResumeForgeError::UnsupportedFormat(format!("Job description file: {}", e)))?;

            let personal_info = PersonalInfo::load(&info_path)?;
            let job_text = InputManager::new().extract_text(&job).await?;
            personal_info.validate_for_generation(&job_text)?;

            simulate_work("Generating...", config.generation.simulated_delay_ms).await?;

            let generator = ContentGenerator::new();
            let content = generator.generate(&personal_info, &job_text)?;
            let resume_document = render_resume_document(&personal_info, &content.resume);

            let output_dir = output_dir.unwrap_or_else(|| config.generation.output_dir.clone());
            let resume_path = write_document(&output_dir, &personal_info.name, DocumentKind::Resume, &resume_document)?;
            let letter_path = write_document(
                &output_dir,
                &personal_info.name,
                DocumentKind::CoverLetter,
                &content.cover_letter,
            )?;

            let keywords = generator.keywords(&job_text);
            println!("🎯 Tailored for: {}", generator.company_name(&job_text).as_deref().unwrap_or(COMPANY_PLACEHOLDER));
            println!("🔤 Keywords: {}", if keywords.is_empty() { "none".to_string() } else { keywords.join(", ") });
            println!("📄 Resume: {}", resume_path.display());
            println!("💌 Cover letter: {}", letter_path.display());

            if preview {
                println!("\n{}", resume_document);
                println!(
                    "{}",
                    render_cover_letter_preview(&personal_info, &content.cover_letter, chrono::Local::now())
                );
            }
        }

        Commands::Keywords { job } => {
            cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
                .map_err(|e| ResumeForgeError::UnsupportedFormat(format!("Job description file: {}", e)))?;
            let job_text = InputManager::new().extract_text(&job).await?;

            let generator = ContentGenerator::new();
            println!("🏢 Company: {}", generator.company_name(&job_text).as_deref().unwrap_or(COMPANY_PLACEHOLDER));
            println!("🔤 Keywords:");
            for (i, keyword) in generator.keywords(&job_text).iter().enumerate() {
                println!("  {}. {}", i + 1, keyword);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Analysis:");
                println!("  Simulated delay: {}ms", config.analysis.simulated_delay_ms);
                println!("Generation:");
                println!("  Simulated delay: {}ms", config.generation.simulated_delay_ms);
                println!("  Output directory: {}", config.generation.output_dir.display());
                println!("Output:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
                println!("  Pretty JSON: {}", config.output.pretty_json);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// Cosmetic pause with a spinner, skipped entirely when the delay is zero
async fn simulate_work(message: &'static str, delay_ms: u64) -> Result<()> {
    if delay_ms == 0 {
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .map_err(|e| ResumeForgeError::OutputFormatting(e.to_string()))?,
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    spinner.finish_and_clear();
    Ok(())
}

fn write_document(dir: &Path, name: &str, kind: DocumentKind, content: &str) -> Result<PathBuf> {
    let path = dir.join(document_filename(name, kind));
    save_report_to_file(content, &path)?;
    info!("Wrote {}", path.display());
    Ok(path)
}
