// src/storage/mod.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::ReportKind;
use crate::form::IncidentForm;
use crate::utils::error::StorageError;

// Runs of anything outside [A-Za-z0-9] collapse to a single underscore.
static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Failed to compile SLUG_RE"));

/// Reduces free text from the form to a filesystem-safe name component.
fn slug(value: &str) -> String {
    let collapsed = SLUG_RE.replace_all(value.trim(), "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        "unspecified".to_string()
    } else {
        trimmed.to_string()
    }
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory one incident's documents land in: /base_dir/DEPARTMENT/date/
    fn report_dir(&self, form: &IncidentForm) -> PathBuf {
        self.base_dir
            .join(slug(&form.department).to_uppercase())
            .join(slug(&form.date_of_incident))
    }

    fn document_filename(&self, form: &IncidentForm, kind: ReportKind, suffix: &str) -> String {
        format!(
            "{}_{}_{}{}",
            slug(&form.employee_name),
            slug(&form.date_of_incident),
            kind.as_str(),
            suffix
        )
    }

    /// Saves a rendered document and returns its path.
    pub fn save_document(
        &self,
        form: &IncidentForm,
        kind: ReportKind,
        content: &str,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.report_dir(form);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(self.document_filename(form, kind, ".md"));
        fs::write(&file_path, content).map_err(StorageError::IoError)?;

        tracing::info!("Saved {} document to {}", kind.as_str(), file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about a generated report in JSON format
    pub fn save_report_metadata(
        &self,
        form: &IncidentForm,
        kind: ReportKind,
        sections: &HashMap<String, String>,
        content_length: usize,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.report_dir(form);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(self.document_filename(form, kind, "_meta.json"));

        // Sorted so the file is stable across runs of the same input.
        let mut sections_found: Vec<&str> = sections.keys().map(String::as_str).collect();
        sections_found.sort_unstable();

        let metadata = serde_json::json!({
            "employee_name": form.employee_name,
            "supervisor_name": form.supervisor_name,
            "department": form.department,
            "issue_type": form.issue_type,
            "date_of_incident": form.date_of_incident,
            "report_kind": kind.as_str(),
            "sections_found": sections_found,
            "content_length": content_length,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves the raw model output under debug/ so a parsing miss can be
    /// diagnosed against what the model actually returned.
    pub fn save_raw_output(
        &self,
        form: &IncidentForm,
        kind: ReportKind,
        raw_text: &str,
    ) -> Result<PathBuf, StorageError> {
        let debug_dir = self.report_dir(form).join("debug");
        if !debug_dir.exists() {
            fs::create_dir_all(&debug_dir).map_err(StorageError::IoError)?;
        }

        let file_path = debug_dir.join(format!("{}_raw.txt", kind.as_str()));
        fs::write(&file_path, raw_text).map_err(StorageError::IoError)?;

        tracing::info!("Saved raw {} output to {}", kind.as_str(), file_path.display());

        Ok(file_path)
    }
}
