use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

fn punctuation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("punctuation regex is valid"))
}

/// Returns the set of vocabulary entries appearing as whole tokens in
/// `text`. Punctuation is stripped before tokenizing, so an entry that
/// itself contains punctuation (e.g. "C++") can never match; that is a
/// property of the tokenization policy, not something callers should
/// work around here.
pub fn match_technologies(text: &str, vocabulary: &HashSet<String>) -> HashSet<String> {
    let cleaned = punctuation_regex().replace_all(text, "");
    cleaned
        .split_whitespace()
        .filter(|word| vocabulary.contains(*word))
        .map(|word| word.to_string())
        .collect()
}

/// Comma-joined rendering of a matched set for the CSV field. Order is
/// unspecified; consumers must not rely on it.
pub fn render_technologies(technologies: &HashSet<String>) -> String {
    technologies
        .iter()
        .map(|tech| tech.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn matches_tokens_despite_interspersed_punctuation() {
        let vocab = vocabulary(&["Python", "Django", "Docker"]);
        let matched = match_technologies("We use Python, Django! and Docker.", &vocab);
        assert_eq!(matched, vocabulary(&["Python", "Django", "Docker"]));
    }

    #[test]
    fn repeated_mentions_collapse_to_one() {
        let vocab = vocabulary(&["Python"]);
        let matched = match_technologies("Python Python python PYTHON", &vocab);
        assert_eq!(matched, vocabulary(&["Python"]));
    }

    #[test]
    fn matching_is_case_sensitive_and_whole_token() {
        let vocab = vocabulary(&["Go", "Rust"]);
        let matched = match_technologies("Golang gophers go rustaceans", &vocab);
        assert!(matched.is_empty());
    }

    #[test]
    fn never_yields_tokens_outside_the_vocabulary() {
        let vocab = vocabulary(&["Docker"]);
        let matched = match_technologies("Docker Swarm Compose Helm", &vocab);
        assert_eq!(matched, vocabulary(&["Docker"]));
    }

    #[test]
    fn punctuated_vocabulary_entries_cannot_match() {
        let vocab = vocabulary(&["C++"]);
        let matched = match_technologies("We love C++ here", &vocab);
        assert!(matched.is_empty());
    }

    #[test]
    fn empty_text_matches_nothing() {
        let vocab = vocabulary(&["Python"]);
        assert!(match_technologies("", &vocab).is_empty());
    }

    #[test]
    fn rendering_joins_with_comma_space() {
        let matched = vocabulary(&["Python", "Docker"]);
        let rendered = render_technologies(&matched);
        assert!(rendered == "Python, Docker" || rendered == "Docker, Python");
    }
}
