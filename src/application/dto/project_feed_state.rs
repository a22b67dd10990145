use crate::portfolio::domain::DisplayProject;

/// State of the project feed as seen by the presentation layer.
///
/// A feed starts `Loading` and settles exactly once into `Loaded` or
/// `Errored`. `Loaded` with no projects is valid and distinct from `Errored`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectFeedState {
    #[default]
    Loading,
    Loaded { projects: Vec<DisplayProject> },
    Errored { message: String },
}

impl ProjectFeedState {
    pub fn errored(message: impl Into<String>) -> Self {
        ProjectFeedState::Errored {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProjectFeedState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Loaded projects; empty while loading or after an error
    pub fn projects(&self) -> &[DisplayProject] {
        match self {
            ProjectFeedState::Loaded { projects } => projects.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProjectFeedState::Errored { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
