use crate::portfolio::domain::RawRepository;
use std::fmt;

/// Portfolio section a project is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Web,
    Design,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Design => "design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One keyword rule: exact topic tags or case-insensitive name fragments
struct CategoryRule {
    topics: &'static [&'static str],
    name_fragments: &'static [&'static str],
    category: Category,
}

/// Rules are tried in order; the first match wins.
const RULES: &[CategoryRule] = &[
    CategoryRule {
        topics: &["web", "website", "frontend"],
        name_fragments: &["web", "site", "app"],
        category: Category::Web,
    },
    CategoryRule {
        topics: &["design", "ui", "ux"],
        name_fragments: &["design"],
        category: Category::Design,
    },
    CategoryRule {
        topics: &["api", "backend", "server"],
        name_fragments: &["api", "backend"],
        category: Category::Web,
    },
];

/// CategoryPolicy files repositories into portfolio sections from their
/// topics and name.
///
/// The description is deliberately not consulted; only topics and the name
/// carry keywords.
pub struct CategoryPolicy;

impl CategoryPolicy {
    pub fn categorize(repo: &RawRepository) -> Category {
        let name = repo.name.to_lowercase();

        RULES
            .iter()
            .find(|rule| {
                rule.topics.iter().any(|t| repo.topics.iter().any(|topic| topic == t))
                    || rule.name_fragments.iter().any(|f| name.contains(f))
            })
            .map(|rule| rule.category)
            .unwrap_or_default()
    }
}
