use crate::core::keys::{command_for_key, KeyCommand, KeyInput};
use crate::core::konami::KonamiMatcher;
use crate::core::sections::SectionRegistry;
use crate::core::sound::CueName;
use smallvec::SmallVec;
use std::rc::Rc;

/// Side effects requested by one keydown, applied in order by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    PreventDefault,
    /// Smooth-scroll to an already clamped section index.
    ScrollTo(usize),
    PlayCue(CueName),
    ToggleMute,
    ToggleTheme,
    ToggleHelp,
    OpenHelp,
    CloseHelp,
    SecretUnlocked,
}

pub type NavEffects = SmallVec<[NavEffect; 4]>;

/// Keyboard navigation state: the current section index and the secret
/// sequence cursor.
pub struct Navigator {
    sections: Rc<SectionRegistry>,
    current: usize,
    konami: KonamiMatcher,
}

impl Navigator {
    pub fn new(sections: Rc<SectionRegistry>) -> Self {
        Self {
            sections,
            current: 0,
            konami: KonamiMatcher::new(),
        }
    }

    #[inline]
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_id(&self) -> Option<&str> {
        self.sections.get(self.current).map(|s| s.id.as_str())
    }

    #[inline]
    pub fn konami_cursor(&self) -> usize {
        self.konami.cursor()
    }

    /// Clamped absolute target; never wraps.
    #[inline]
    pub fn target(&self, index: i64) -> Option<usize> {
        self.sections.clamp(index)
    }

    #[inline]
    pub fn relative_target(&self, delta: i64) -> Option<usize> {
        self.sections.clamp(self.current as i64 + delta)
    }

    /// Record that the page moved to `index`. Out-of-range indices are ignored.
    pub fn commit(&mut self, index: usize) {
        if index < self.sections.len() {
            self.current = index;
        }
    }

    /// Scroll tracker hook: the section with `id` is now centered.
    pub fn sync_visible(&mut self, id: &str) -> bool {
        match self.sections.index_of(id) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: &KeyInput) -> NavEffects {
        let mut fx = NavEffects::new();
        if key.in_text_field {
            return fx;
        }

        // Secret sequence first; the key is still processed normally below.
        if self.konami.feed(&key.code) {
            fx.push(NavEffect::SecretUnlocked);
            fx.push(NavEffect::PlayCue(CueName::Success));
        }

        let Some(command) = command_for_key(key) else {
            return fx;
        };
        match command {
            KeyCommand::Next => self.push_scroll(&mut fx, self.relative_target(1)),
            KeyCommand::Previous => self.push_scroll(&mut fx, self.relative_target(-1)),
            KeyCommand::First => self.push_scroll(&mut fx, self.target(0)),
            KeyCommand::Last => self.push_scroll(&mut fx, self.target(i64::MAX)),
            KeyCommand::Jump(index) => {
                if index < self.sections.len() {
                    self.push_scroll(&mut fx, Some(index));
                }
            }
            KeyCommand::ToggleMute => {
                fx.push(NavEffect::ToggleMute);
                fx.push(NavEffect::PlayCue(CueName::Pop));
            }
            KeyCommand::ToggleTheme => fx.push(NavEffect::ToggleTheme),
            KeyCommand::ToggleHelp => {
                fx.push(NavEffect::ToggleHelp);
                fx.push(NavEffect::PlayCue(CueName::Pop));
            }
            KeyCommand::OpenHelp => {
                fx.push(NavEffect::PreventDefault);
                fx.push(NavEffect::OpenHelp);
                fx.push(NavEffect::PlayCue(CueName::Pop));
            }
            KeyCommand::CloseHelp => fx.push(NavEffect::CloseHelp),
        }
        fx
    }

    fn push_scroll(&self, fx: &mut NavEffects, target: Option<usize>) {
        fx.push(NavEffect::PreventDefault);
        if let Some(index) = target {
            fx.push(NavEffect::ScrollTo(index));
        }
    }
}
