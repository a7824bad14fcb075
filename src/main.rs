// src/main.rs
mod document;
mod extractors;
mod form;
mod openai;
mod storage;
mod utils;

use clap::Parser;

use document::ReportKind;
use extractors::section::SectionExtractor;
use form::IncidentForm;
use openai::client;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the employee coaching report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the incident form JSON file
    #[arg(short, long)]
    form: String,

    /// Output directory for generated documents
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// OpenAI model used for generation
    #[arg(short, long, default_value = "gpt-4o-mini")]
    model: String,

    /// Read the coaching report text from a file instead of calling the API
    #[arg(long)]
    raw_coaching: Option<String>,

    /// Read the leadership note text from a file instead of calling the API
    #[arg(long)]
    raw_leadership: Option<String>,

    /// Generate only the employee-facing coaching report
    #[arg(long)]
    skip_leadership: bool,

    /// Debug mode - save raw model output next to the rendered documents
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load and validate the incident form
    let form = IncidentForm::from_json_file(&args.form)?;
    form.validate()?;
    tracing::info!(
        "Loaded incident form: employee '{}', department '{}'",
        form.employee_name,
        form.department
    );

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 5. Decide which documents this run produces
    let mut kinds = vec![ReportKind::Coaching];
    if !args.skip_leadership {
        kinds.push(ReportKind::Leadership);
    }

    let created = chrono::Local::now().date_naive();
    let mut success_count = 0;
    let mut failure_count = 0;

    // 6. Generate, parse, render, and save each document
    for kind in kinds {
        tracing::info!("Producing {} document", kind.as_str());

        let raw_text = match obtain_raw_text(kind, &args, &form).await {
            Ok(text) => {
                tracing::info!("Obtained {} bytes of {} text", text.len(), kind.as_str());
                text
            }
            Err(e) => {
                tracing::error!("Failed to obtain {} text: {}", kind.as_str(), e);
                failure_count += 1;
                continue;
            }
        };

        if args.debug {
            if let Err(e) = storage.save_raw_output(&form, kind, &raw_text) {
                tracing::warn!("Failed to save raw {} output: {}", kind.as_str(), e);
            }
        }

        // Split the generated text into the sections the document expects.
        // Missing sections are logged but never fatal; the document simply
        // omits them.
        let extractor = SectionExtractor::new(kind.labels().iter().copied());
        let sections = extractor.parse(&raw_text);
        for label in kind.labels() {
            if !sections.contains_key(*label) {
                tracing::warn!(
                    "Section '{}' missing from generated {} text",
                    label,
                    kind.as_str()
                );
            }
        }
        if sections.is_empty() {
            tracing::warn!(
                "No recognizable sections in generated {} text; document will carry no generated content",
                kind.as_str()
            );
        }

        let rendered = match kind {
            ReportKind::Coaching => document::build_coaching_document(&form, &sections, created),
            ReportKind::Leadership => document::build_leadership_document(&form, &sections),
        };

        match storage.save_document(&form, kind, &rendered) {
            Ok(path) => {
                tracing::info!("Saved {} document to: {}", kind.as_str(), path.display());
                success_count += 1;
            }
            Err(e) => {
                tracing::error!("Failed to save {} document: {}", kind.as_str(), e);
                failure_count += 1;
                continue;
            }
        }

        match storage.save_report_metadata(&form, kind, &sections, rendered.len()) {
            Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save metadata: {}", e),
        }
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 {
        return Err(AppError::Processing(format!(
            "Failed to produce any documents for '{}'",
            form.employee_name
        )));
    }

    Ok(())
}

/// Returns the raw generated text for one report kind, either from a
/// pre-generated file (offline mode) or from the OpenAI API.
async fn obtain_raw_text(
    kind: ReportKind,
    args: &Args,
    form: &IncidentForm,
) -> Result<String, AppError> {
    let override_path = match kind {
        ReportKind::Coaching => &args.raw_coaching,
        ReportKind::Leadership => &args.raw_leadership,
    };

    if let Some(path) = override_path {
        tracing::info!(
            "Reading pre-generated {} text from: {}",
            kind.as_str(),
            path
        );
        return Ok(std::fs::read_to_string(path)?);
    }

    let text = match kind {
        ReportKind::Coaching => client::generate_coaching_report(&args.model, form).await?,
        ReportKind::Leadership => client::generate_leadership_note(&args.model, form).await?,
    };
    Ok(text)
}
