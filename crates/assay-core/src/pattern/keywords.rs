//! Business-process keyword extraction from free-text descriptions.

use std::collections::{BTreeSet, HashSet};

use crate::constants::BUSINESS_PROCESS_KEYWORDS;

/// Extract the business-process keywords present in `text`.
///
/// Single-word keywords match whole tokens, also in a plain plural form
/// (`invoice` matches `invoices`). Multi-word keywords match the
/// lowercased, token-joined text as a phrase.
pub fn extract_business_keywords(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return BTreeSet::new();
    }

    let token_set: HashSet<&str> = tokens.iter().copied().collect();
    let joined = format!(" {} ", tokens.join(" "));

    BUSINESS_PROCESS_KEYWORDS
        .iter()
        .filter(|keyword| {
            if keyword.contains(' ') {
                joined.contains(&format!(" {keyword} "))
            } else {
                token_set.contains(**keyword)
                    || token_set.contains(format!("{keyword}s").as_str())
                    || token_set.contains(format!("{keyword}es").as_str())
            }
        })
        .map(|keyword| keyword.to_string())
        .collect()
}
