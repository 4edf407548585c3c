//! Keyboard configuration a text field requests from the host input service.

/// Kind of software keyboard to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Text,
    Ascii,
    Number,
    Phone,
    Uri,
    Email,
    Password,
    NumberPassword,
}

/// Action button shown on the software keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImeAction {
    /// Let the host pick (usually `Done` for single-line, newline otherwise).
    #[default]
    Unspecified,
    None,
    Go,
    Search,
    Send,
    Previous,
    Next,
    Done,
}

/// Keyboard type and IME action requested by a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardOptions {
    pub keyboard_type: KeyboardType,
    pub ime_action: ImeAction,
    pub auto_correct: bool,
}

impl KeyboardOptions {
    pub fn new(keyboard_type: KeyboardType, ime_action: ImeAction) -> Self {
        Self {
            keyboard_type,
            ime_action,
            auto_correct: true,
        }
    }

    pub fn with_auto_correct(mut self, auto_correct: bool) -> Self {
        self.auto_correct = auto_correct;
        self
    }

    /// Action the host should actually show, resolving `Unspecified` by line mode.
    pub fn resolved_ime_action(&self, single_line: bool) -> ImeAction {
        match (self.ime_action, single_line) {
            (ImeAction::Unspecified, true) => ImeAction::Done,
            (ImeAction::Unspecified, false) => ImeAction::None,
            (action, _) => action,
        }
    }
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self::new(KeyboardType::Text, ImeAction::Unspecified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_action_depends_on_line_mode() {
        let options = KeyboardOptions::default();
        assert_eq!(options.resolved_ime_action(true), ImeAction::Done);
        assert_eq!(options.resolved_ime_action(false), ImeAction::None);
    }

    #[test]
    fn explicit_action_wins() {
        let options = KeyboardOptions::new(KeyboardType::Email, ImeAction::Next);
        assert_eq!(options.resolved_ime_action(true), ImeAction::Next);
        assert!(options.auto_correct);
        assert!(!options.with_auto_correct(false).auto_correct);
    }
}
