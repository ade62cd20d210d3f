use std::sync::LazyLock;
use tiktoken_rs::CoreBPE;

// cl100k_base is the gpt-4 encoding
static TOKENIZER: LazyLock<CoreBPE> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base().expect("Failed to initialize cl100k_base tokenizer")
});

/// Count tokens for logging; never used to alter what gets sent
pub fn count_tokens(text: &str) -> usize {
    TOKENIZER.encode_with_special_tokens(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens_empty() {
        assert_eq!(count_tokens(""), 0);
    }

    #[test]
    fn test_count_tokens_grows_with_text() {
        let short = count_tokens("WHEREAS, test; and");
        let long = count_tokens("WHEREAS, test; and\n\nRESOLVED, Done.");
        assert!(short > 0);
        assert!(long > short);
    }

    #[test]
    fn test_count_tokens_is_deterministic() {
        let text = "NOW, THEREFORE, BE IT";
        assert_eq!(count_tokens(text), count_tokens(text));
    }
}
