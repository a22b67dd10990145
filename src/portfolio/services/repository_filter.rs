use crate::portfolio::domain::RawRepository;

/// RepositoryFilter - keeps only repositories that may be showcased
pub struct RepositoryFilter;

impl RepositoryFilter {
    /// Drops archived, disabled, forked and non-public repositories,
    /// preserving the relative order of the rest.
    pub fn retain_showcase(repos: Vec<RawRepository>) -> Vec<RawRepository> {
        repos
            .into_iter()
            .filter(RawRepository::is_showcase_eligible)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, archived: bool, disabled: bool, fork: bool, visibility: &str) -> RawRepository {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("repo-{}", id),
            "full_name": format!("octocat/repo-{}", id),
            "html_url": format!("https://github.com/octocat/repo-{}", id),
            "created_at": "2024-01-10T12:00:00Z",
            "updated_at": "2024-01-10T12:00:00Z",
            "archived": archived,
            "disabled": disabled,
            "fork": fork,
            "visibility": visibility
        }))
        .unwrap()
    }

    #[test]
    fn test_retain_showcase_drops_ineligible() {
        let repos = vec![
            repo(1, false, false, false, "public"),
            repo(2, true, false, false, "public"),
            repo(3, false, true, false, "public"),
            repo(4, false, false, true, "public"),
            repo(5, false, false, false, "private"),
            repo(6, false, false, false, "internal"),
            repo(7, false, false, false, "public"),
        ];

        let kept: Vec<u64> = RepositoryFilter::retain_showcase(repos)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![1, 7]);
    }

    #[test]
    fn test_retain_showcase_preserves_order() {
        let repos = vec![
            repo(9, false, false, false, "public"),
            repo(3, false, false, false, "public"),
            repo(5, false, false, false, "public"),
        ];

        let kept: Vec<u64> = RepositoryFilter::retain_showcase(repos)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![9, 3, 5]);
    }

    #[test]
    fn test_retain_showcase_empty() {
        assert!(RepositoryFilter::retain_showcase(Vec::new()).is_empty());
    }
}
