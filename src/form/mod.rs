// src/form/mod.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::FormError;

/// One supervisor-filled incident record, as submitted on the intake form.
///
/// Every value is free text. Fields left blank on the form deserialize to
/// empty strings (`#[serde(default)]`) and render as `[Missing]` in the
/// generated documents. The form is an explicit value passed by reference
/// through the pipeline; nothing downstream holds form state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentForm {
    pub date_of_incident: String,
    pub department: String,
    pub employee_name: String,
    pub supervisor_name: String,
    pub action_taken: String,
    pub issue_type: String,
    pub incident_description: String,
    pub estimated_annual_cost: String,
    pub language_spoken: String,
    pub previous_coaching: String,
}

impl IncidentForm {
    /// Loads a form from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FormError> {
        let contents = fs::read_to_string(path)?;
        let form: IncidentForm = serde_json::from_str(&contents)?;
        Ok(form)
    }

    /// Checks the fields the reports cannot be written without.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.employee_name.trim().is_empty() {
            return Err(FormError::MissingField("employee_name"));
        }
        if self.supervisor_name.trim().is_empty() {
            return Err(FormError::MissingField("supervisor_name"));
        }
        if self.incident_description.trim().is_empty() {
            return Err(FormError::MissingField("incident_description"));
        }
        Ok(())
    }

    /// All form fields with their display labels, in the order the
    /// supervisor-entry section of the coaching document lists them.
    pub fn display_fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Date of Incident", self.date_of_incident.as_str()),
            ("Department", self.department.as_str()),
            ("Employee Name", self.employee_name.as_str()),
            ("Supervisor Name", self.supervisor_name.as_str()),
            ("Action Taken", self.action_taken.as_str()),
            ("Issue Type", self.issue_type.as_str()),
            ("Incident Description", self.incident_description.as_str()),
            ("Estimated/Annual Cost", self.estimated_annual_cost.as_str()),
            ("Language Spoken", self.language_spoken.as_str()),
            ("Previous Coaching/Warnings", self.previous_coaching.as_str()),
        ]
    }

    /// The subset of fields the leadership note leads with.
    pub fn identity_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Supervisor Name", self.supervisor_name.as_str()),
            ("Employee Name", self.employee_name.as_str()),
            ("Department", self.department.as_str()),
            ("Issue Type", self.issue_type.as_str()),
            ("Date of Incident", self.date_of_incident.as_str()),
        ]
    }
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
            estimated_annual_cost: "".to_string(),
            language_spoken: "English".to_string(),
            previous_coaching: "None".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty_strings() {
        let form: IncidentForm =
            serde_json::from_str(r#"{"employee_name": "Jordan Reyes"}"#).unwrap();
        assert_eq!(form.employee_name, "Jordan Reyes");
        assert_eq!(form.department, "");
        assert_eq!(form.previous_coaching, "");
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(sample_form().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let mut form = sample_form();
        form.incident_description = "   ".to_string();
        match form.validate() {
            Err(FormError::MissingField(field)) => assert_eq!(field, "incident_description"),
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_fields_order_matches_document_layout() {
        let form = sample_form();
        let fields = form.display_fields();
        assert_eq!(fields[0].0, "Date of Incident");
        assert_eq!(fields[9].0, "Previous Coaching/Warnings");
        assert_eq!(fields[2].1, "Jordan Reyes");
    }
}
