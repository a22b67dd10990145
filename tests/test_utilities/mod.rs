//! Shared helpers for integration and end-to-end tests
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod cli;
pub mod fake_github;
pub mod fixtures;
pub mod mocks;
