//! Whole-word skill tagging over job snippets.

use regex::Regex;

use crate::domain::constants::SKILL_VOCABULARY;

/// Matches vocabulary terms against free text as whole words.
///
/// Pure and deterministic: lower-cases the input, checks each term with a
/// word-boundary anchored pattern, and returns matches in vocabulary order.
pub struct SkillTagger {
    terms: Vec<(String, Regex)>,
}

impl SkillTagger {
    /// Tagger over the fixed process-wide vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(SKILL_VOCABULARY)
    }

    /// Tagger over a custom vocabulary (lowercase terms, order preserved).
    pub fn with_vocabulary(vocabulary: &[&str]) -> Self {
        let terms = vocabulary
            .iter()
            .map(|term| {
                let pattern = format!(r"\b{}\b", regex::escape(term));
                // Escaped literal terms always compile.
                let regex = Regex::new(&pattern).expect("vocabulary term pattern");
                (term.to_string(), regex)
            })
            .collect();
        Self { terms }
    }

    /// Vocabulary terms appearing in `text` as separate words, in
    /// vocabulary order. Duplicated occurrences yield one entry.
    pub fn tag(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.terms
            .iter()
            .filter(|(_, regex)| regex.is_match(&haystack))
            .map(|(term, _)| term.clone())
            .collect()
    }
}

impl Default for SkillTagger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_in_vocabulary_order() {
        let tagger = SkillTagger::new();
        let skills = tagger.tag("Experience with SQL and NoSQL required; Python a plus");
        assert_eq!(skills, vec!["sql", "nosql", "python"]);
    }

    #[test]
    fn does_not_match_substrings_of_larger_words() {
        let tagger = SkillTagger::new();
        // "mysqld" must not produce "sql", "pythonic" must not produce "python".
        assert!(tagger.tag("maintains mysqld and writes pythonic code").is_empty());
    }

    #[test]
    fn sql_still_found_next_to_nosql() {
        let tagger = SkillTagger::with_vocabulary(&["sql", "nosql"]);
        assert_eq!(tagger.tag("experience with sql and nosql"), vec!["sql", "nosql"]);
    }

    #[test]
    fn unrelated_text_yields_nothing() {
        let tagger = SkillTagger::new();
        assert!(tagger.tag("excellent communication").is_empty());
    }

    #[test]
    fn multi_word_terms_match_across_the_space() {
        let tagger = SkillTagger::new();
        assert_eq!(tagger.tag("dashboards in Power BI"), vec!["power bi"]);
        assert!(tagger.tag("empower bicyclists").is_empty());
    }

    #[test]
    fn repeated_mentions_yield_one_entry() {
        let tagger = SkillTagger::new();
        assert_eq!(tagger.tag("sql, sql and more sql"), vec!["sql"]);
    }

    #[test]
    fn tagging_is_deterministic() {
        let tagger = SkillTagger::new();
        let text = "Python, Excel and Tableau";
        assert_eq!(tagger.tag(text), tagger.tag(text));
    }
}
