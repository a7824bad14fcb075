// src/document/mod.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::extractors::section::{COACHING_LABELS, LEADERSHIP_LABELS};
use crate::form::IncidentForm;

/// Placeholder rendered for form fields the supervisor left blank.
pub const MISSING_VALUE: &str = "[Missing]";

const ACKNOWLEDGMENT_TEXT: &str = "I understand that this document serves as a formal record \
    of the counseling provided. I acknowledge that the issue has been discussed with me, and \
    I understand the expectations going forward. My signature below does not necessarily \
    indicate agreement but confirms that I have received and reviewed this documentation.";

/// The two documents one incident produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Coaching,
    Leadership,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Coaching => "coaching",
            ReportKind::Leadership => "leadership",
        }
    }

    /// Section headers this report kind expects from the generator.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Coaching => &COACHING_LABELS,
            ReportKind::Leadership => &LEADERSHIP_LABELS,
        }
    }
}

fn push_bold_field(doc: &mut String, label: &str, value: &str) {
    let value = if value.trim().is_empty() { MISSING_VALUE } else { value };
    doc.push_str(&format!("**{}:** {}\n\n", label, value));
}

fn push_section(doc: &mut String, label: &str, body: &str) {
    doc.push_str(&format!("**{}:**\n\n{}\n\n", label, body));
}

/// Renders the employee coaching and counseling document.
///
/// Section 2 lists the generated sections in their configured order; labels
/// the extractor did not find in the model output are skipped without
/// comment, so a degraded generation still yields a usable document.
pub fn build_coaching_document(
    form: &IncidentForm,
    sections: &HashMap<String, String>,
    created: NaiveDate,
) -> String {
    let mut doc = String::new();

    doc.push_str("# Employee Coaching & Counseling Form\n\n");
    doc.push_str(&format!("(Created {})\n\n", created.format("%m/%d/%y")));

    doc.push_str("## Section 1 – Supervisor Entry\n\n");
    for (label, value) in form.display_fields() {
        push_bold_field(&mut doc, label, value);
    }

    doc.push_str("## Section 2 – AI-Generated Coaching Report\n\n");
    for label in COACHING_LABELS {
        if let Some(body) = sections.get(label) {
            push_section(&mut doc, label, body);
        }
    }

    doc.push_str("Acknowledgment of Receipt:\n\n");
    doc.push_str(ACKNOWLEDGMENT_TEXT);
    doc.push_str("\n\n");
    doc.push_str("Employee Signature: _________________________        Date: ________________\n\n");
    doc.push_str("Supervisor Signature: ________________________        Date: ________________\n");

    doc
}

/// Renders the private leadership-reflection document.
pub fn build_leadership_document(
    form: &IncidentForm,
    sections: &HashMap<String, String>,
) -> String {
    let mut doc = String::new();

    doc.push_str("# Leadership Reflection\n\n");
    for (label, value) in form.identity_fields() {
        push_bold_field(&mut doc, label, value);
    }

    doc.push_str("**AI-Generated Leadership Guidance:**\n\n");
    for label in LEADERSHIP_LABELS {
        if let Some(body) = sections.get(label) {
            push_section(&mut doc, label, body);
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> IncidentForm {
        IncidentForm {
            date_of_incident: "2026-07-30".to_string(),
            department: "Assembly".to_string(),
            employee_name: "Jordan Reyes".to_string(),
            supervisor_name: "Sam Whitfield".to_string(),
            action_taken: "Verbal Coaching".to_string(),
            issue_type: "Attendance".to_string(),
            incident_description: "Arrived 45 minutes late without notice.".to_string(),
            estimated_annual_cost: String::new(),
            language_spoken: "English".to_string(),
            previous_coaching: "None".to_string(),
        }
    }

    fn created() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_coaching_document_layout() {
        let mut sections = HashMap::new();
        sections.insert(
            "Incident Summary".to_string(),
            "Jordan arrived 45 minutes late.".to_string(),
        );
        sections.insert("Severity".to_string(), "Low".to_string());

        let doc = build_coaching_document(&sample_form(), &sections, created());

        assert!(doc.starts_with("# Employee Coaching & Counseling Form"));
        assert!(doc.contains("(Created 08/05/26)"));
        assert!(doc.contains("**Employee Name:** Jordan Reyes"));
        assert!(doc.contains("**Incident Summary:**\n\nJordan arrived 45 minutes late."));
        assert!(doc.contains("Acknowledgment of Receipt:"));
        assert!(doc.contains("Employee Signature:"));
    }

    #[test]
    fn test_coaching_document_skips_absent_sections() {
        let mut sections = HashMap::new();
        sections.insert("Severity".to_string(), "Low".to_string());

        let doc = build_coaching_document(&sample_form(), &sections, created());

        assert!(!doc.contains("**Tags:**"));
        assert!(!doc.contains("**Expectations Going Forward:**"));
        assert!(doc.contains("**Severity:**\n\nLow"));
    }

    #[test]
    fn test_blank_form_field_renders_missing_marker() {
        let doc = build_coaching_document(&sample_form(), &HashMap::new(), created());
        assert!(doc.contains("**Estimated/Annual Cost:** [Missing]"));
    }

    #[test]
    fn test_leadership_document_layout() {
        let mut sections = HashMap::new();
        sections.insert(
            "Tone Guidance".to_string(),
            "Calm and factual.".to_string(),
        );
        sections.insert(
            "Private Reflection".to_string(),
            "Consider scheduling pressures.".to_string(),
        );

        let doc = build_leadership_document(&sample_form(), &sections);

        assert!(doc.starts_with("# Leadership Reflection"));
        assert!(doc.contains("**Supervisor Name:** Sam Whitfield"));
        assert!(doc.contains("**AI-Generated Leadership Guidance:**"));
        // Configured order, not map order: reflection before tone.
        let reflection = doc.find("**Private Reflection:**").unwrap();
        let tone = doc.find("**Tone Guidance:**").unwrap();
        assert!(reflection < tone);
        // The employee-facing acknowledgment block never appears here.
        assert!(!doc.contains("Acknowledgment of Receipt"));
    }

    #[test]
    fn test_report_kind_labels() {
        assert_eq!(ReportKind::Coaching.labels(), &COACHING_LABELS);
        assert_eq!(ReportKind::Leadership.labels(), &LEADERSHIP_LABELS);
        assert_eq!(ReportKind::Coaching.as_str(), "coaching");
    }
}
