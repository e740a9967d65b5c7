use once_cell::sync::Lazy;
use tiktoken_rs::{CoreBPE, o200k_base};

// The o200k ranks are compiled into tiktoken-rs, so building them only fails on a corrupt build.
static TOK: Lazy<CoreBPE> = Lazy::new(|| o200k_base().expect("tokenizer init failed"));

/// Approximate LLM token count of a bundle segment.
#[inline]
pub fn count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    TOK.encode_with_special_tokens(text).len()
}
