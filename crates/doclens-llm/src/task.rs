//! Declarative prompt tasks and the generic runner.
//!
//! Each analysis step is described by a [`PromptTask`]: an instruction, one
//! input field, and named output fields. [`run_task`] turns the descriptor
//! into a system/user prompt pair, invokes the completion client, and parses
//! the free-text reply back into the declared fields. Adding a new analysis
//! step means adding a descriptor, not another client adapter.

use std::collections::HashMap;

use tracing::debug;

use doclens_core::{DoclensError, DoclensResult};

use crate::client::CompletionClient;

/// A named output slot in a prompt task.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// A declarative prompt task: one instruction, one input, named outputs.
#[derive(Debug, Clone, Copy)]
pub struct PromptTask {
    pub name: &'static str,
    pub instruction: &'static str,
    pub input_field: &'static str,
    pub output_fields: &'static [FieldSpec],
}

/// Entity and relationship extraction.
pub const ENTITY_EXTRACTION: PromptTask = PromptTask {
    name: "entity_extraction",
    instruction: "Extract entities and their relationships from the text.",
    input_field: "text",
    output_fields: &[
        FieldSpec {
            name: "entities",
            description: "List of entities and their types",
        },
        FieldSpec {
            name: "relationships",
            description: "Relationships between the entities",
        },
    ],
};

/// Overall sentiment with a confidence score.
pub const SENTIMENT_ANALYSIS: PromptTask = PromptTask {
    name: "sentiment_analysis",
    instruction: "Analyze the sentiment of the text.",
    input_field: "text",
    output_fields: &[
        FieldSpec {
            name: "sentiment",
            description: "The sentiment of the document (positive, negative, or neutral)",
        },
        FieldSpec {
            name: "confidence",
            description: "The confidence score of the sentiment analysis (0-1)",
        },
    ],
};

/// Short document summary.
pub const SUMMARIZATION: PromptTask = PromptTask {
    name: "summarization",
    instruction: "Summarize the document.",
    input_field: "document",
    output_fields: &[FieldSpec {
        name: "summary",
        description: "10 words or less summary",
    }],
};

impl PromptTask {
    /// Build the system prompt: the instruction plus a field-per-line
    /// response format block.
    pub fn system_prompt(&self) -> String {
        let mut prompt = String::from(self.instruction);
        prompt.push_str("\n\nRespond with each field on its own line, in this format:\n");
        for field in self.output_fields {
            prompt.push('\n');
            prompt.push_str(&display_name(field.name));
            prompt.push_str(": ");
            prompt.push_str(field.description);
        }
        prompt
    }

    /// Build the user prompt carrying the document.
    pub fn user_prompt(&self, document: &str) -> String {
        format!("{}: {}", display_name(self.input_field), document)
    }

    /// Parse a completion into the declared output fields.
    ///
    /// A line starting with a declared field name and a colon
    /// (case-insensitive) opens that field; its value is the rest of the
    /// marker line plus any following lines up to the next marker. Text
    /// before the first marker is dropped. A completion with no markers is
    /// assigned wholesale to the first output field; an empty completion is
    /// a normalization error.
    pub fn parse_output(&self, completion: &str) -> DoclensResult<TaskOutput> {
        let trimmed = completion.trim();
        if trimmed.is_empty() {
            return Err(DoclensError::normalization(format!(
                "empty completion for task {}",
                self.name
            )));
        }

        let mut fields: HashMap<&'static str, String> = HashMap::new();
        let mut current: Option<(&'static str, Vec<&str>)> = None;

        for line in trimmed.lines() {
            if let Some((name, rest)) = self.match_marker(line) {
                if let Some((open, lines)) = current.take() {
                    fields.insert(open, lines.join("\n").trim().to_string());
                }
                current = Some((name, vec![rest]));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            }
        }
        if let Some((open, lines)) = current.take() {
            fields.insert(open, lines.join("\n").trim().to_string());
        }

        if fields.is_empty() {
            if let Some(first) = self.output_fields.first() {
                fields.insert(first.name, trimmed.to_string());
            }
        }

        Ok(TaskOutput { fields })
    }

    fn match_marker<'a>(&self, line: &'a str) -> Option<(&'static str, &'a str)> {
        let line = line.trim_start();
        for field in self.output_fields {
            if let Some(rest) = strip_marker(line, field.name) {
                return Some((field.name, rest.trim_start()));
            }
        }
        None
    }
}

/// Match `name` case-insensitively at the start of `line`, followed by a
/// colon; returns the remainder of the line.
fn strip_marker<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let head = line.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    line[name.len()..].strip_prefix(':')
}

fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Completion text parsed into named fields.
#[derive(Debug, Default)]
pub struct TaskOutput {
    fields: HashMap<&'static str, String>,
}

impl TaskOutput {
    /// Value of an output field, if the completion produced one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Run a prompt task against a completion client and parse the reply.
pub async fn run_task(
    client: &dyn CompletionClient,
    task: &PromptTask,
    document: &str,
) -> DoclensResult<TaskOutput> {
    let system = task.system_prompt();
    let user = task.user_prompt(document);
    debug!(task = task.name, "Running prompt task");
    let completion = client.complete(&system, &user).await?;
    task.parse_output(&completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCompletionClient;

    #[test]
    fn test_system_prompt_lists_output_fields() {
        let prompt = ENTITY_EXTRACTION.system_prompt();
        assert!(prompt.starts_with("Extract entities and their relationships from the text."));
        assert!(prompt.contains("Entities: List of entities and their types"));
        assert!(prompt.contains("Relationships: Relationships between the entities"));
    }

    #[test]
    fn test_user_prompt_uses_input_field() {
        assert_eq!(
            ENTITY_EXTRACTION.user_prompt("Alice met Bob."),
            "Text: Alice met Bob."
        );
        assert_eq!(
            SUMMARIZATION.user_prompt("Alice met Bob."),
            "Document: Alice met Bob."
        );
    }

    #[test]
    fn test_parse_labeled_fields() {
        let output = SENTIMENT_ANALYSIS
            .parse_output("Sentiment: positive\nConfidence: 0.95")
            .unwrap();
        assert_eq!(output.field("sentiment"), Some("positive"));
        assert_eq!(output.field("confidence"), Some("0.95"));
    }

    #[test]
    fn test_parse_owned_completion() {
        // Real completions are runtime strings, not literals.
        let completion = format!("Sentiment: {}\nConfidence: {}", "positive", 0.9);
        let output = SENTIMENT_ANALYSIS.parse_output(&completion).unwrap();
        assert_eq!(output.field("sentiment"), Some("positive"));
        assert_eq!(output.field("confidence"), Some("0.9"));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let output = SENTIMENT_ANALYSIS
            .parse_output("SENTIMENT: negative\nconfidence: 0.6")
            .unwrap();
        assert_eq!(output.field("sentiment"), Some("negative"));
        assert_eq!(output.field("confidence"), Some("0.6"));
    }

    #[test]
    fn test_parse_multiline_value() {
        let completion = "Entities:\nAlice (person)\nAcme Corp (organization)\nRelationships: Alice works at Acme Corp";
        let output = ENTITY_EXTRACTION.parse_output(completion).unwrap();
        assert_eq!(
            output.field("entities"),
            Some("Alice (person)\nAcme Corp (organization)")
        );
        assert_eq!(
            output.field("relationships"),
            Some("Alice works at Acme Corp")
        );
    }

    #[test]
    fn test_parse_drops_preamble_before_first_marker() {
        let completion = "Here is the analysis:\nSummary: a short account of events";
        let output = SUMMARIZATION.parse_output(completion).unwrap();
        assert_eq!(output.field("summary"), Some("a short account of events"));
    }

    #[test]
    fn test_parse_unlabeled_falls_back_to_first_field() {
        let output = SUMMARIZATION
            .parse_output("A meeting between Alice and Bob.")
            .unwrap();
        assert_eq!(
            output.field("summary"),
            Some("A meeting between Alice and Bob.")
        );
    }

    #[test]
    fn test_marker_requires_colon() {
        let output = ENTITY_EXTRACTION
            .parse_output("entities found in the text include Alice")
            .unwrap();
        // No marker matched, so the whole text lands in the first field.
        assert_eq!(
            output.field("entities"),
            Some("entities found in the text include Alice")
        );
        assert_eq!(output.field("relationships"), None);
    }

    #[test]
    fn test_parse_empty_completion_errors() {
        let err = SUMMARIZATION.parse_output("   \n  ").unwrap_err();
        assert!(matches!(err, DoclensError::Normalization(_)));
    }

    #[tokio::test]
    async fn test_run_task_parses_scripted_reply() {
        let client = MockCompletionClient::new();
        client.push_reply("Sentiment: positive\nConfidence: 0.9");
        let output = run_task(&client, &SENTIMENT_ANALYSIS, "Such a lovely day today.")
            .await
            .unwrap();
        assert_eq!(output.field("sentiment"), Some("positive"));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_run_task_propagates_client_failure() {
        let client = MockCompletionClient::new();
        client.push_failure("rate limited");
        let err = run_task(&client, &SUMMARIZATION, "Such a lovely day today.")
            .await
            .unwrap_err();
        assert!(matches!(err, DoclensError::ModelInvocation(_)));
    }
}
