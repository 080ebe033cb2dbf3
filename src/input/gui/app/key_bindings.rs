use std::path::PathBuf;

use winit::keyboard::KeyCode;

/// Everything the user can ask the viewer to do, from any widget or key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Zero-based.
    GotoPage(usize),
    RotateClockwise,
    RotateCounterClockwise,
    ToggleInvert,
    Search(String),
    ClearSearch,
    Open(PathBuf),
    Quit,
}

/// Maps a pressed key to a viewer action. Releases never reach here.
#[must_use]
pub fn action_for_key(key: KeyCode, shift: bool) -> Option<ViewerAction> {
    let action = match key {
        KeyCode::ArrowRight | KeyCode::ArrowDown | KeyCode::PageDown => ViewerAction::NextPage,
        KeyCode::ArrowLeft | KeyCode::ArrowUp | KeyCode::PageUp => ViewerAction::PreviousPage,
        KeyCode::Home => ViewerAction::FirstPage,
        KeyCode::End => ViewerAction::LastPage,
        KeyCode::KeyR if shift => ViewerAction::RotateCounterClockwise,
        KeyCode::KeyR => ViewerAction::RotateClockwise,
        KeyCode::KeyI => ViewerAction::ToggleInvert,
        KeyCode::Escape => ViewerAction::ClearSearch,
        KeyCode::KeyQ => ViewerAction::Quit,
        _ => return None,
    };

    Some(action)
}
