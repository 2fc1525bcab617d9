#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    Guess(char),
    TogglePlayback,
}
