pub mod category;
pub mod display_naming;
pub mod language_tables;

pub use category::{Category, CategoryPolicy};
pub use display_naming::DisplayNaming;
pub use language_tables::{ProjectTypePolicy, TechnologyNames};
