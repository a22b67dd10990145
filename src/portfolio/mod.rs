/// Portfolio domain: repository records, derived project cards, mapping
/// tables and the services that turn one into the other.
pub mod domain;
pub mod policies;
pub mod services;
