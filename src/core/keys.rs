/// Browser-independent snapshot of a keydown event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// Physical key, as `KeyboardEvent.code` (e.g. `"ArrowDown"`, `"KeyM"`).
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// The event targeted a text field; such events are ignored.
    pub in_text_field: bool,
}

impl KeyInput {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn in_text_field(mut self) -> Self {
        self.in_text_field = true;
        self
    }

    #[inline]
    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Previous,
    First,
    Last,
    /// Zero-based section index from a digit key.
    Jump(usize),
    ToggleMute,
    ToggleTheme,
    ToggleHelp,
    OpenHelp,
    CloseHelp,
}

#[inline]
pub fn is_text_field_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// `Digit1`..`Digit9` map to indices 0..8. `Digit0` is not a jump key.
#[inline]
pub fn digit_index(code: &str) -> Option<usize> {
    let digit = code.strip_prefix("Digit")?;
    match digit.parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

pub fn command_for_key(key: &KeyInput) -> Option<KeyCommand> {
    if let Some(index) = digit_index(&key.code) {
        return (!key.has_command_modifier()).then_some(KeyCommand::Jump(index));
    }
    match key.code.as_str() {
        "ArrowDown" | "KeyJ" => Some(KeyCommand::Next),
        "ArrowUp" | "KeyK" => Some(KeyCommand::Previous),
        "Home" => Some(KeyCommand::First),
        "End" => Some(KeyCommand::Last),
        "KeyM" => Some(KeyCommand::ToggleMute),
        "KeyT" => Some(KeyCommand::ToggleTheme),
        "KeyH" => Some(KeyCommand::ToggleHelp),
        "Slash" if key.shift => Some(KeyCommand::OpenHelp),
        "Escape" => Some(KeyCommand::CloseHelp),
        _ => None,
    }
}
