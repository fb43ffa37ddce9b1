// Keyboard surface shared by the explorers

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSide {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Space: morph to whichever layout is not currently targeted
    ToggleView,
    ToggleAutoplay,
    Screenshot,
    ToggleFullscreen,
    ToggleFpsReadout,
    ResetCamera,
    // Number keys jump straight to a layout
    ShowView(LayoutSide),
}

// Map a key (browser `event.key` value) to an action, case-insensitively
pub fn action_for_key(key: &str) -> Option<Action> {
    match key.to_ascii_lowercase().as_str() {
        " " | "spacebar" => Some(Action::ToggleView),
        "p" => Some(Action::ToggleAutoplay),
        "s" => Some(Action::Screenshot),
        "f" => Some(Action::ToggleFullscreen),
        "d" => Some(Action::ToggleFpsReadout),
        "r" => Some(Action::ResetCamera),
        "1" => Some(Action::ShowView(LayoutSide::A)),
        "2" => Some(Action::ShowView(LayoutSide::B)),
        _ => None,
    }
}
