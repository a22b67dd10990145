use crate::portfolio::domain::LanguageBreakdown;

/// Type label used when the primary language has no entry (or there is none)
pub const DEFAULT_PROJECT_TYPE: &str = "Proyecto de Desarrollo";

/// Primary language (lower-cased) → project type label.
///
/// `c#` is the label the provider actually reports for C#; `csharp` is kept
/// for inputs that spell it out.
const PROJECT_TYPES: &[(&str, &str)] = &[
    ("javascript", "Web App"),
    ("typescript", "Web App"),
    ("html", "Sitio Web"),
    ("css", "Sitio Web"),
    ("python", "Aplicación Backend"),
    ("java", "Aplicación Empresarial"),
    ("csharp", "Aplicación Empresarial"),
    ("c#", "Aplicación Empresarial"),
];

/// Language or framework key (lower-cased) → display name
const TECHNOLOGY_NAMES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("sass", "Sass"),
    ("python", "Python"),
    ("java", "Java"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("dart", "Dart"),
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("svelte", "Svelte"),
    ("next.js", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("express", "Express"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring Boot"),
    ("laravel", "Laravel"),
    ("rails", "Ruby on Rails"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// ProjectTypePolicy maps the dominant language of a repository to the
/// project type shown on its card.
pub struct ProjectTypePolicy;

impl ProjectTypePolicy {
    pub fn for_language(language: &str) -> &'static str {
        lookup(PROJECT_TYPES, language).unwrap_or(DEFAULT_PROJECT_TYPE)
    }

    /// Type label for the language with the greatest byte count
    pub fn classify(languages: &LanguageBreakdown) -> &'static str {
        languages
            .primary()
            .map(Self::for_language)
            .unwrap_or(DEFAULT_PROJECT_TYPE)
    }
}

/// TechnologyNames turns raw language labels into the names shown as badges
pub struct TechnologyNames;

impl TechnologyNames {
    /// Maximum number of technology badges per project
    pub const MAX_TECHNOLOGIES: usize = 3;

    /// Display name for a language; unmapped names get their first character
    /// upper-cased and are otherwise left alone.
    pub fn display_name(language: &str) -> String {
        match lookup(TECHNOLOGY_NAMES, language) {
            Some(name) => name.to_string(),
            None => capitalize_first(language),
        }
    }

    /// Badges for the largest languages, in descending byte order
    pub fn from_breakdown(languages: &LanguageBreakdown) -> Vec<String> {
        languages
            .top(Self::MAX_TECHNOLOGIES)
            .map(Self::display_name)
            .collect()
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
