//! Command-line entry point for the compliance engine.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use archgauge::adapters::report::{json, markdown, ReportFormat};
use archgauge::application::{AnalysisOrchestrator, EngineError};
use archgauge::config::AppConfig;
use archgauge::domain::analysis::AnalysisResult;
use archgauge::domain::characteristics::CharacteristicsInput;
use archgauge::domain::model::C4Model;
use archgauge::ports::{ApprovalGate, AutoApprove};

/// Score a C4 architecture model against prioritized quality characteristics.
#[derive(Debug, Parser)]
#[command(name = "archgauge", version, about)]
struct Cli {
    /// Path to the C4 model document (JSON)
    #[arg(long)]
    model: PathBuf,

    /// Path to the characteristics input document (JSON or YAML)
    #[arg(long)]
    characteristics: PathBuf,

    /// Directory to write report files into; omit to print to stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report format: json, markdown, or both
    #[arg(long, default_value = "json")]
    format: ReportFormat,

    /// Skip the interactive approval prompt
    #[arg(long, visible_alias = "yes")]
    auto_approve: bool,
}

/// Interactive gate prompting on the terminal.
struct ConsoleApprovalGate;

impl ApprovalGate for ConsoleApprovalGate {
    fn approve(&self, checklist: &[String]) -> bool {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "About to analyze:");
        for item in checklist {
            let _ = writeln!(stderr, "  - {item}");
        }
        let _ = write!(stderr, "Proceed? [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

fn load_model(path: &Path) -> Result<C4Model, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read model file {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("invalid model document: {e}"))
}

fn load_characteristics(path: &Path) -> Result<CharacteristicsInput, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read characteristics file {}: {e}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| format!("invalid characteristics document: {e}"))
    } else {
        serde_json::from_str(&raw).map_err(|e| format!("invalid characteristics document: {e}"))
    }
}

fn emit_reports(
    result: &AnalysisResult,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<(), String> {
    match output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("cannot create output directory {}: {e}", dir.display()))?;
            if matches!(format, ReportFormat::Json | ReportFormat::Both) {
                let path = dir.join("compliance-report.json");
                json::write(result, &path).map_err(|e| e.to_string())?;
                eprintln!("wrote {}", path.display());
            }
            if matches!(format, ReportFormat::Markdown | ReportFormat::Both) {
                let path = dir.join("compliance-report.md");
                markdown::write(result, &path).map_err(|e| e.to_string())?;
                eprintln!("wrote {}", path.display());
            }
            Ok(())
        }
        None => match format {
            ReportFormat::Json => {
                print!("{}", json::render(result).map_err(|e| e.to_string())?);
                Ok(())
            }
            ReportFormat::Markdown => {
                print!("{}", markdown::render(result));
                Ok(())
            }
            ReportFormat::Both => {
                Err("--format both requires --output; stdout takes one format".to_string())
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::from(1);
        }
    };
    if let Err(e) = config.validate() {
        error!("configuration error: {e}");
        return ExitCode::from(1);
    }
    if cli.auto_approve {
        config.orchestrator.auto_approve = true;
    }

    let model = match load_model(&cli.model) {
        Ok(model) => model,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    };
    let input = match load_characteristics(&cli.characteristics) {
        Ok(input) => input,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    };

    // auto_approve selects which gate is injected; the run always passes
    // through one.
    let approval: Arc<dyn ApprovalGate> = if config.orchestrator.auto_approve {
        Arc::new(AutoApprove)
    } else {
        Arc::new(ConsoleApprovalGate)
    };
    let orchestrator = AnalysisOrchestrator::new(
        approval,
        config.orchestrator.clone(),
        config.insight.clone(),
    );

    let result = match orchestrator.run(&model, &input).await {
        Ok(result) => result,
        Err(EngineError::InputValidation(e)) => {
            for violation in &e.violations {
                error!("input violation: {violation}");
            }
            return ExitCode::from(1);
        }
        Err(e) => {
            error!("analysis run failed: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = emit_reports(&result, cli.format, cli.output.as_deref()) {
        error!("{e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
