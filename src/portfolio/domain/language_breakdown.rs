use std::collections::HashMap;

/// Per-language byte counts for one repository.
///
/// The provider returns an unordered JSON object; entries are kept sorted by
/// descending byte count (ties by ascending name) so "primary" and "top N"
/// are well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown {
    entries: Vec<(String, u64)>,
}

impl LanguageBreakdown {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, u64)> = languages
            .into_iter()
            .map(|(name, bytes)| (name.into(), bytes))
            .collect();
        entries.sort_by(|(name_a, bytes_a), (name_b, bytes_b)| {
            bytes_b.cmp(bytes_a).then_with(|| name_a.cmp(name_b))
        });
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Language with the greatest byte count
    pub fn primary(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    /// Up to `n` language names, largest first
    pub fn top(&self, n: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(n).map(|(name, _)| name.as_str())
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|(_, bytes)| bytes).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, u64>> for LanguageBreakdown {
    fn from(map: HashMap<String, u64>) -> Self {
        Self::new(map)
    }
}
