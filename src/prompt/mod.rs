//! Deterministic prompt assembly for a single review

mod example;
mod system;

pub use example::WorkedExample;
pub use system::SYSTEM_PROMPT;

/// System and user messages for one review call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Build the prompt pair for a resolution's extracted text
///
/// The system message never varies. The user message embeds the worked
/// example followed by the resolution text, which is inserted unmodified.
pub fn build(example: &WorkedExample, resolution_text: &str) -> Prompt {
    Prompt {
        system: SYSTEM_PROMPT,
        user: user_prompt(example, resolution_text),
    }
}

fn user_prompt(example: &WorkedExample, resolution_text: &str) -> String {
    format!(
        r#"
        Your task is to analyze a draft resolution for compliance with the template and rules. 
        An example of a draft resolution is given below, and the suggested corrections. 
        The incorrect resolution is given below, followed by the updated version of that resolution. 
        The changes that were made and the rules violated are given after the updated version.
        <EXAMPLE START>
        ORIGINAL VERSION:-
        {}
        ----------------
        MODIFIED VERSION:-
        {}
        ----------------
        ORIGINAL VERSION:-
        {}
        ----------------
        <EXAMPLE END>
        
        Based on the template provided, alonside the rules that may or may not be violated, please analyze the following resolution for compliance with the template and rules:
        {}

        Provide a detailed analysis identifying any violations of the template or rules."#,
        example.original, example.modified, example.changes, resolution_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: &str =
        "\n\n        Provide a detailed analysis identifying any violations of the template or rules.";

    #[test]
    fn test_system_prompt_is_identical_across_calls() {
        let a = build(&WorkedExample::default(), "first");
        let b = build(&WorkedExample::default(), "second document");
        assert_eq!(a.system, b.system);
        assert_eq!(a.system, SYSTEM_PROMPT);
    }

    #[test]
    fn test_user_prompt_ends_with_document_text() {
        let text = "WHEREAS, test; and\n\nRESOLVED, Done.";
        let prompt = build(&WorkedExample::default(), text);
        let example_end = prompt.user.find("<EXAMPLE END>").unwrap();
        let text_at = prompt.user.rfind(text).unwrap();
        assert!(text_at > example_end);
        assert!(prompt.user.ends_with(&format!("{}{}", text, FOOTER)));
    }

    #[test]
    fn test_user_prompt_varies_only_by_document_text() {
        let a = build(&WorkedExample::default(), "alpha");
        let b = build(&WorkedExample::default(), "beta");
        let prefix_a = a.user.strip_suffix(&format!("alpha{}", FOOTER)).unwrap();
        let prefix_b = b.user.strip_suffix(&format!("beta{}", FOOTER)).unwrap();
        assert_eq!(prefix_a, prefix_b);
    }

    #[test]
    fn test_user_prompt_embeds_example_in_order() {
        let example = WorkedExample {
            original: "ORIGINAL-TEXT".into(),
            modified: "MODIFIED-TEXT".into(),
            changes: "CHANGES-TEXT".into(),
        };
        let prompt = build(&example, "DOCUMENT-TEXT");
        let positions: Vec<usize> = [
            "<EXAMPLE START>",
            "ORIGINAL-TEXT",
            "MODIFIED-TEXT",
            "CHANGES-TEXT",
            "<EXAMPLE END>",
            "DOCUMENT-TEXT",
        ]
        .iter()
        .map(|needle| prompt.user.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_document_without_marker_passes_through() {
        // Detecting the missing marker is left to the model
        let text = "WHEREAS, test; and\n\nRESOLVED, Done.";
        let prompt = build(&WorkedExample::default(), text);
        assert!(prompt.user.contains(text));
        assert!(prompt.system.contains("NOW, THEREFORE, BE IT"));
    }
}
