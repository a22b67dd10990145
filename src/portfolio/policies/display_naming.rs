use crate::portfolio::domain::RawRepository;

/// Language label shown when the provider reports none
pub const UNKNOWN_LANGUAGE: &str = "Desconocido";

const THUMBNAIL_BASE_URL: &str = "https://opengraph.githubassets.com/1";

/// DisplayNaming derives the human-facing text of a project card
pub struct DisplayNaming;

impl DisplayNaming {
    /// Repository name with hyphens as spaces and every word capitalized.
    ///
    /// Follows `\b\w` semantics: an ASCII letter, digit or underscore that
    /// follows a non-word character (or starts the string) is upper-cased.
    /// Other characters are kept as they are.
    pub fn client_name(repo_name: &str) -> String {
        let mut result = String::with_capacity(repo_name.len());
        let mut previous_is_word = false;

        for ch in repo_name.chars() {
            let ch = if ch == '-' { ' ' } else { ch };
            let is_word = ch.is_ascii_alphanumeric() || ch == '_';
            if is_word && !previous_is_word {
                result.push(ch.to_ascii_uppercase());
            } else {
                result.push(ch);
            }
            previous_is_word = is_word;
        }

        result
    }

    pub fn title(repo: &RawRepository) -> String {
        match repo.description_text() {
            Some(description) => description.to_string(),
            None => format!("{} - Proyecto de Desarrollo", repo.name),
        }
    }

    pub fn description(repo: &RawRepository) -> String {
        match repo.description_text() {
            Some(description) => description.to_string(),
            None => format!(
                "Proyecto {} desarrollado con tecnologías modernas.",
                repo.name
            ),
        }
    }

    /// Social preview image the provider renders for every repository
    pub fn thumbnail(full_name: &str) -> String {
        format!("{}/{}", THUMBNAIL_BASE_URL, full_name)
    }

    pub fn language_label(repo: &RawRepository) -> String {
        repo.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string()
    }
}
