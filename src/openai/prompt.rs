// src/openai/prompt.rs
use crate::extractors::section::{COACHING_LABELS, LEADERSHIP_LABELS};
use crate::form::IncidentForm;

pub const SYSTEM_PROMPT: &str = "You are an HR documentation assistant for a manufacturing \
    company. You write employee coaching records in a professional, neutral, factual tone. \
    You never invent details that are not in the incident data you are given.";

const UNSPECIFIED: &str = "(not provided)";

fn push_form_fields(prompt: &mut String, fields: &[(&str, &str)]) {
    for (label, value) in fields.iter().copied() {
        let value = if value.trim().is_empty() { UNSPECIFIED } else { value };
        prompt.push_str(&format!("{}: {}\n", label, value));
    }
}

// The parser looks for these exact headers, so the instructions spell them
// out verbatim, one per line, colon included.
fn push_header_instruction(prompt: &mut String, labels: &[&str]) {
    prompt.push_str(
        "\nStructure your answer using exactly the following section headers, each on its \
         own line, ending with a colon, with the section text on the lines below it:\n",
    );
    for label in labels {
        prompt.push_str(&format!("{}:\n", label));
    }
    prompt.push_str("\nDo not add any other headers, numbering, or markdown formatting.\n");
}

/// User prompt for the employee-facing coaching report.
pub fn coaching_prompt(form: &IncidentForm) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Write the AI-generated portion of an employee coaching and counseling form based on \
         the incident below.\n\n",
    );
    push_form_fields(&mut prompt, &form.display_fields());
    push_header_instruction(&mut prompt, &COACHING_LABELS);
    prompt.push_str(
        "\nIncident Summary is a factual recap of what happened and its impact. \
         Expectations Going Forward states the concrete behavior expected of the employee. \
         Tags is a short comma-separated list of keywords for this incident. \
         Severity is a single word: Low, Medium, or High.\n",
    );
    prompt
}

/// User prompt for the private leadership-reflection note. This text is for
/// the supervisor only and is never shown to the employee.
pub fn leadership_prompt(form: &IncidentForm) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Write a private leadership reflection to help the supervisor below deliver the \
         coaching conversation well. Address the supervisor directly.\n\n",
    );
    push_form_fields(&mut prompt, &form.identity_fields());
    prompt.push_str(&format!(
        "Incident Description: {}\n",
        if form.incident_description.trim().is_empty() {
            UNSPECIFIED
        } else {
            form.incident_description.as_str()
        }
    ));
    push_header_instruction(&mut prompt, &LEADERSHIP_LABELS);
    prompt.push_str(
        "\nPrivate Reflection invites the supervisor to consider their own part in the \
         situation. Coaching Tips are practical pointers for the conversation. Tone Guidance \
         describes the manner to use. Follow-Up Recommendation names a concrete next step \
         and time frame. Supervisor Accountability Tip is one habit the supervisor should \
         hold themselves to afterwards.\n",
    );
    prompt
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

    #[test]
    fn test_coaching_prompt_lists_every_expected_header() {
        let prompt = coaching_prompt(&sample_form());
        for label in COACHING_LABELS {
            assert!(
                prompt.contains(&format!("{}:\n", label)),
                "Prompt missing header instruction for '{}'",
                label
            );
        }
    }

    #[test]
    fn test_coaching_prompt_carries_form_data() {
        let prompt = coaching_prompt(&sample_form());
        assert!(prompt.contains("Employee Name: Jordan Reyes"));
        assert!(prompt.contains("Arrived 45 minutes late without notice."));
        // Blank fields are marked rather than silently omitted.
        assert!(prompt.contains("Estimated/Annual Cost: (not provided)"));
    }

    #[test]
    fn test_leadership_prompt_lists_every_expected_header() {
        let prompt = leadership_prompt(&sample_form());
        for label in LEADERSHIP_LABELS {
            assert!(
                prompt.contains(&format!("{}:\n", label)),
                "Prompt missing header instruction for '{}'",
                label
            );
        }
        assert!(prompt.contains("Supervisor Name: Sam Whitfield"));
    }
}
