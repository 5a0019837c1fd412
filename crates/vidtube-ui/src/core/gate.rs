//! Authentication gate decision.

/// What an auth-gated subtree should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Show the login prompt instead of the content.
    LoginPrompt,
    /// Show the wrapped content.
    Content,
}

/// Prompt when the subtree requires a session that does not exist.
#[must_use]
pub const fn gate(requires_auth: bool, authenticated: bool) -> GateView {
    if requires_auth && !authenticated {
        GateView::LoginPrompt
    } else {
        GateView::Content
    }
}
