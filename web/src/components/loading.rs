use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// What the page is waiting on before the map is useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    Locating,
    FindingResponders,
}

impl SearchStage {
    /// Locating comes first; the responder list is only requested once the
    /// user's position is known.
    pub fn current(has_location: bool, responder_count: usize) -> Option<Self> {
        match (has_location, responder_count) {
            (false, _) => Some(Self::Locating),
            (true, 0) => Some(Self::FindingResponders),
            (true, _) => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Locating => "Locating you, please wait...",
            Self::FindingResponders => "Looking for nearby responders...",
        }
    }
}

#[component]
pub fn LoadingView(stage: SearchStage) -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">{stage.message()}</p>
        </div>
    }
}
