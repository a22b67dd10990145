//! Repository payloads shaped like the GitHub listing endpoint
use portfolio_feed::prelude::*;
use serde_json::{json, Value};

pub const OWNER: &str = "octocat";

/// A public, showcase-eligible repository record
pub fn repo_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{}/{}", OWNER, name),
        "html_url": format!("https://github.com/{}/{}", OWNER, name),
        "description": null,
        "language": null,
        "languages_url": format!("https://api.github.com/repos/{}/{}/languages", OWNER, name),
        "topics": [],
        "created_at": "2024-01-05T10:00:00Z",
        "updated_at": "2024-06-01T12:30:00Z",
        "pushed_at": "2024-06-01T12:30:00Z",
        "size": 120,
        "stargazers_count": 3,
        "watchers_count": 3,
        "forks_count": 0,
        "archived": false,
        "disabled": false,
        "visibility": "public",
        "default_branch": "main",
        "fork": false
    })
}

/// Same record with some fields overridden
pub fn repo_json_with(id: u64, name: &str, overrides: Value) -> Value {
    let mut value = repo_json(id, name);
    if let (Some(target), Some(source)) = (value.as_object_mut(), overrides.as_object()) {
        for (key, field) in source {
            target.insert(key.clone(), field.clone());
        }
    }
    value
}

pub fn repo(id: u64, name: &str) -> RawRepository {
    serde_json::from_value(repo_json(id, name)).unwrap()
}

pub fn repo_with(id: u64, name: &str, overrides: Value) -> RawRepository {
    serde_json::from_value(repo_json_with(id, name, overrides)).unwrap()
}

pub fn full_name(name: &str) -> String {
    format!("{}/{}", OWNER, name)
}
