use crate::app::input::TrackRequest;
use crate::data::FetchJob;

/// Waiting for the user.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdleState;

/// One track request whose data is still on its way. The form is locked meanwhile.
pub(crate) struct FetchingState {
    pub(crate) request: TrackRequest,
    pub(crate) job: FetchJob,
}

pub(crate) enum AppState {
    Idle(IdleState),
    Fetching(FetchingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle(IdleState)
    }
}
