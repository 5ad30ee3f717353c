pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Rolling matcher for the secret key sequence.
///
/// Each key is compared only against the currently expected code. A mismatch
/// resets the cursor to 0 without re-testing that key against the first
/// code, so `Up Up Up Down ...` does not match.
#[derive(Clone, Debug, Default)]
pub struct KonamiMatcher {
    cursor: usize,
}

impl KonamiMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Feed one `KeyboardEvent.code`. Returns `true` on the key that
    /// completes the sequence; the matcher is re-armed at that point.
    pub fn feed(&mut self, code: &str) -> bool {
        if KONAMI_SEQUENCE[self.cursor] != code {
            self.cursor = 0;
            return false;
        }
        self.cursor += 1;
        if self.cursor == KONAMI_SEQUENCE.len() {
            self.cursor = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
