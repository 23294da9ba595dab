//! Type definitions for the application

use strum::Display;

/// Which widget receives key input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum Focus {
    #[default]
    #[strum(to_string = "Dashboard")]
    None,
    #[strum(to_string = "Ticker Search")]
    Search,
    #[strum(to_string = "Feedback")]
    Feedback,
}

impl Focus {
    /// Get the next focus target, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Search,
            Self::Search => Self::Feedback,
            Self::Feedback => Self::None,
        }
    }

    /// Get the previous focus target, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::None => Self::Feedback,
            Self::Search => Self::None,
            Self::Feedback => Self::Search,
        }
    }
}
