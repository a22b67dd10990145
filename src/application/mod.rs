/// Application layer - Use cases, the feed provider and DTOs
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod provider;
pub mod use_cases;
