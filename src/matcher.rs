use crate::model::AppEntry;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Scores `entries` by name against `query`.
    ///
    /// Returns `(index, score)` for matches only, best first. Equal scores keep
    /// discovery order.
    pub fn match_entries(&mut self, query: &str, entries: &[AppEntry]) -> Vec<(usize, u32)> {
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();

        let mut hits: Vec<(usize, u32)> = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let haystack = Utf32Str::new(&entry.name, &mut buf);
                pattern.score(haystack, &mut self.matcher).map(|score| (i, score))
            })
            .collect();

        // stable sort
        hits.sort_by(|a, b| b.1.cmp(&a.1));
        hits
    }
}
