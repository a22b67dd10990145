//! Helpers for running the compiled binary in isolation
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;

const ISOLATED_ENV: &[&str] = &[
    "GITHUB_USERNAME",
    "NEXT_PUBLIC_GITHUB_USERNAME",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "RUST_LOG",
];

/// `portfolio-feed` running in `dir` with none of the GitHub variables set
pub fn feed_cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("portfolio-feed");
    cmd.current_dir(dir);
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// Port 9 (discard) has nothing listening on test machines
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";
