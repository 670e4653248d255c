use crate::ui::surface::intent::SurfaceIntent;

/// What a surface is showing. A surface holds exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SurfaceState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; the spinner is shown.
    Loading,
    /// Content rendered from data.
    Loaded,
    /// The last request failed.
    Error { message: String },
    /// An informational notice replaced the content.
    Message { message: String },
}

/// Request cycle: `Idle → Loading → (Loaded | Error)`, re-entrant.
///
/// Every event fully determines the next state, whatever the surface was
/// showing before. Content and notices may be shown without a preceding
/// request (first paint of local data).
impl From<SurfaceIntent> for SurfaceState {
    fn from(intent: SurfaceIntent) -> Self {
        match intent {
            SurfaceIntent::Request => Self::Loading,
            SurfaceIntent::Loaded => Self::Loaded,
            SurfaceIntent::Failed { message } => Self::Error { message },
            SurfaceIntent::Notice { message } => Self::Message { message },
        }
    }
}

impl SurfaceState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Message shown by the error or notice screen.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } | Self::Message { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(message: &str) -> SurfaceIntent {
        SurfaceIntent::Failed {
            message: message.to_string(),
        }
    }

    #[test]
    fn request_cycle_transitions() {
        assert!(SurfaceState::from(SurfaceIntent::Request).is_loading());
        assert!(SurfaceState::from(SurfaceIntent::Loaded).is_loaded());

        let state = SurfaceState::from(failed("boom"));
        assert_eq!(state.message(), Some("boom"));
        assert!(!state.is_loaded());
    }

    #[test]
    fn notice_carries_message() {
        let state = SurfaceState::from(SurfaceIntent::Notice {
            message: "saved".to_string(),
        });
        assert_eq!(
            state,
            SurfaceState::Message {
                message: "saved".to_string()
            }
        );
    }
}
