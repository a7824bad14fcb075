// src/extractors/section.rs

use std::collections::HashMap;

// --- Section vocabularies ---
// These are the exact headers the generation prompts ask the model to emit.
// The prompt builder and the document builder both reference them, so the
// three stages can never drift apart on spelling.

/// Headers of the employee-facing coaching report.
pub const COACHING_LABELS: [&str; 4] = [
    "Incident Summary",
    "Expectations Going Forward",
    "Tags",
    "Severity",
];

/// Headers of the private leadership-reflection note.
pub const LEADERSHIP_LABELS: [&str; 5] = [
    "Private Reflection",
    "Coaching Tips",
    "Tone Guidance",
    "Follow-Up Recommendation",
    "Supervisor Accountability Tip",
];

/// Splits a block of model-generated text into labeled sections.
///
/// The generator is asked to introduce each section with `Label:` on its own
/// line. This type scans the text once, line by line, and accumulates the
/// body lines that follow each recognized header. Matching is exact and
/// case-sensitive: a line is a header only if its trimmed text, minus the
/// trailing colon, equals one of the configured labels. Anything the model
/// emits before the first recognized header is dropped, and a header with no
/// body lines before the next header (or end of input) produces no entry.
///
/// There is no failure mode. Text that ignores the header convention simply
/// yields a smaller (possibly empty) map, and the document builder skips
/// whatever is absent. A body line that happens to end with a colon and
/// spell a known label is indistinguishable from a real header; that
/// ambiguity is inherent to line-based sectioning and is left as-is.
pub struct SectionExtractor {
    labels: Vec<String>,
}

impl SectionExtractor {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the matched label if `trimmed` is a header line.
    fn match_header(&self, trimmed: &str) -> Option<&str> {
        let name = trimmed.strip_suffix(':')?;
        self.labels
            .iter()
            .find(|label| label.as_str() == name)
            .map(String::as_str)
    }

    /// Partitions `raw_text` into a label → body map.
    ///
    /// Body lines are trimmed, joined with a single space, and the joined
    /// result trimmed again. A label declared more than once keeps only the
    /// text of its last occurrence.
    pub fn parse(&self, raw_text: &str) -> HashMap<String, String> {
        let mut sections = HashMap::new();
        let mut current: Option<&str> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in raw_text.lines() {
            let line = line.trim();
            if let Some(label) = self.match_header(line) {
                if let Some(open) = current {
                    if !buffer.is_empty() {
                        sections.insert(open.to_string(), buffer.join(" ").trim().to_string());
                        buffer.clear();
                    }
                }
                current = Some(label);
            } else if current.is_some() {
                buffer.push(line);
            }
        }

        if let Some(open) = current {
            if !buffer.is_empty() {
                sections.insert(open.to_string(), buffer.join(" ").trim().to_string());
            }
        }

        sections
    }
}
