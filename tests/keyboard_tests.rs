// Host-side tests for key mapping, the secret-sequence matcher and section
// navigation. The main crate is wasm-only, so we include the pure modules.

#![allow(dead_code, unused_imports)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use std::rc::Rc;

fn navigator() -> Navigator {
    Navigator::new(Rc::new(SectionRegistry::default_layout()))
}

fn key(code: &str) -> KeyInput {
    KeyInput::new(code)
}

fn secret_count(nav: &mut Navigator, codes: &[&str]) -> usize {
    codes
        .iter()
        .flat_map(|c| nav.handle_key(&key(c)))
        .filter(|fx| *fx == NavEffect::SecretUnlocked)
        .count()
}

// Plays the host's part for scroll effects.
fn press(nav: &mut Navigator, input: KeyInput) -> NavEffects {
    let fx = nav.handle_key(&input);
    for effect in &fx {
        if let NavEffect::ScrollTo(i) = effect {
            nav.commit(*i);
        }
    }
    fx
}

#[test]
fn exact_sequence_unlocks_once() {
    let mut nav = navigator();
    assert_eq!(secret_count(&mut nav, &KONAMI_SEQUENCE), 1);
    assert_eq!(nav.konami_cursor(), 0);
}

#[test]
fn one_wrong_key_before_the_end_unlocks_nothing() {
    for wrong_at in 0..KONAMI_SEQUENCE.len() - 1 {
        let mut codes: Vec<&str> = KONAMI_SEQUENCE.to_vec();
        codes[wrong_at] = "KeyX";
        let mut nav = navigator();
        assert_eq!(
            secret_count(&mut nav, &codes),
            0,
            "substitution at {wrong_at} should not unlock"
        );
    }
}

#[test]
fn wrong_final_key_unlocks_nothing() {
    let mut codes: Vec<&str> = KONAMI_SEQUENCE.to_vec();
    codes[9] = "KeyB";
    let mut nav = navigator();
    assert_eq!(secret_count(&mut nav, &codes), 0);
}

#[test]
fn sequence_twice_unlocks_twice() {
    let mut nav = navigator();
    let mut codes: Vec<&str> = KONAMI_SEQUENCE.to_vec();
    codes.extend_from_slice(&KONAMI_SEQUENCE);
    assert_eq!(secret_count(&mut nav, &codes), 2);
}

#[test]
fn unlock_plays_success_cue() {
    let mut nav = navigator();
    let mut last = NavEffects::new();
    for code in KONAMI_SEQUENCE {
        last = nav.handle_key(&key(code));
    }
    assert_eq!(last[0], NavEffect::SecretUnlocked);
    assert_eq!(last[1], NavEffect::PlayCue(CueName::Success));
}

#[test]
fn mismatch_resets_without_rechecking_first_position() {
    let mut m = KonamiMatcher::new();
    assert!(!m.feed("ArrowUp"));
    assert!(!m.feed("ArrowUp"));
    assert_eq!(m.cursor(), 2);
    // Third ArrowUp mismatches position 2 and only resets.
    assert!(!m.feed("ArrowUp"));
    assert_eq!(m.cursor(), 0);

    // So a sequence with a leading extra ArrowUp never completes.
    let mut m = KonamiMatcher::new();
    let mut codes = vec!["ArrowUp"];
    codes.extend_from_slice(&KONAMI_SEQUENCE);
    assert!(!codes.iter().any(|c| m.feed(c)));
}

#[test]
fn matcher_cursor_never_exceeds_length() {
    let mut m = KonamiMatcher::new();
    for code in KONAMI_SEQUENCE.iter().cycle().take(55) {
        m.feed(code);
        assert!(m.cursor() < KONAMI_SEQUENCE.len());
    }
}

#[test]
fn secret_keys_still_navigate() {
    let mut nav = navigator();
    let fx = press(&mut nav, key("ArrowDown"));
    assert!(fx.contains(&NavEffect::ScrollTo(1)));
    assert_eq!(nav.konami_cursor(), 0);
    let fx = press(&mut nav, key("ArrowUp"));
    assert!(fx.contains(&NavEffect::ScrollTo(0)));
    assert_eq!(nav.konami_cursor(), 1);
}

#[test]
fn clamps_out_of_range_targets() {
    let nav = navigator();
    assert_eq!(nav.sections().len(), 10);
    assert_eq!(nav.target(-5), Some(0));
    assert_eq!(nav.target(999), Some(9));
    assert_eq!(nav.target(4), Some(4));
}

#[test]
fn relative_moves_clamp_without_wrapping() {
    let mut nav = navigator();
    assert_eq!(nav.relative_target(-1), Some(0));
    nav.commit(9);
    assert_eq!(nav.relative_target(1), Some(9));
    assert_eq!(nav.relative_target(-3), Some(6));
}

#[test]
fn empty_registry_has_no_targets() {
    let mut nav = Navigator::new(Rc::new(SectionRegistry::new(Vec::<String>::new())));
    assert_eq!(nav.target(0), None);
    let fx = nav.handle_key(&key("End"));
    assert_eq!(fx.as_slice(), &[NavEffect::PreventDefault]);
}

#[test]
fn arrows_and_vim_keys_step_through_sections() {
    let mut nav = navigator();
    press(&mut nav, key("ArrowDown"));
    press(&mut nav, key("KeyJ"));
    assert_eq!(nav.current(), 2);
    press(&mut nav, key("KeyK"));
    assert_eq!(nav.current(), 1);
    let fx = press(&mut nav, key("ArrowUp"));
    assert_eq!(
        fx.as_slice(),
        &[NavEffect::PreventDefault, NavEffect::ScrollTo(0)]
    );
}

#[test]
fn home_and_end_jump_to_bounds() {
    let mut nav = navigator();
    press(&mut nav, key("End"));
    assert_eq!(nav.current(), 9);
    assert_eq!(nav.current_id(), Some("contact"));
    press(&mut nav, key("Home"));
    assert_eq!(nav.current(), 0);
    assert_eq!(nav.current_id(), Some("hero"));
}

#[test]
fn digits_jump_directly_when_unmodified() {
    let mut nav = navigator();
    press(&mut nav, key("Digit5"));
    assert_eq!(nav.current(), 4);
    press(&mut nav, key("Digit1"));
    assert_eq!(nav.current(), 0);

    let fx = press(&mut nav, key("Digit3").with_ctrl());
    assert!(fx.is_empty());
    let fx = press(&mut nav, key("Digit3").with_meta());
    assert!(fx.is_empty());
    let fx = press(&mut nav, key("Digit3").with_alt());
    assert!(fx.is_empty());
    assert_eq!(nav.current(), 0);
}

#[test]
fn digits_past_the_registry_do_nothing() {
    let mut nav = Navigator::new(Rc::new(SectionRegistry::new(["hero", "about", "contact"])));
    let fx = press(&mut nav, key("Digit7"));
    assert!(fx.is_empty());
    assert_eq!(nav.current(), 0);
}

#[test]
fn text_fields_swallow_everything() {
    let mut nav = navigator();
    for code in KONAMI_SEQUENCE {
        let fx = nav.handle_key(&key(code).in_text_field());
        assert!(fx.is_empty());
    }
    assert_eq!(nav.konami_cursor(), 0);
    assert!(nav.handle_key(&key("KeyM").in_text_field()).is_empty());
}

#[test]
fn toggle_keys_emit_commands_and_cues() {
    let mut nav = navigator();
    assert_eq!(
        nav.handle_key(&key("KeyM")).as_slice(),
        &[NavEffect::ToggleMute, NavEffect::PlayCue(CueName::Pop)]
    );
    assert_eq!(
        nav.handle_key(&key("KeyH")).as_slice(),
        &[NavEffect::ToggleHelp, NavEffect::PlayCue(CueName::Pop)]
    );
    assert_eq!(
        nav.handle_key(&key("Slash").with_shift()).as_slice(),
        &[
            NavEffect::PreventDefault,
            NavEffect::OpenHelp,
            NavEffect::PlayCue(CueName::Pop)
        ]
    );
    assert!(nav.handle_key(&key("Slash")).is_empty());
    assert_eq!(
        nav.handle_key(&key("Escape")).as_slice(),
        &[NavEffect::CloseHelp]
    );
    assert_eq!(
        nav.handle_key(&key("KeyT")).as_slice(),
        &[NavEffect::ToggleTheme]
    );
}

#[test]
fn scroll_tracker_syncs_current_section() {
    let mut nav = navigator();
    assert!(nav.sync_visible("testimonials"));
    assert_eq!(nav.current(), 7);
    assert!(!nav.sync_visible("footer"));
    assert_eq!(nav.current(), 7);
    let fx = press(&mut nav, key("ArrowDown"));
    assert!(fx.contains(&NavEffect::ScrollTo(8)));
}

#[test]
fn commit_ignores_out_of_range() {
    let mut nav = navigator();
    nav.commit(3);
    nav.commit(42);
    assert_eq!(nav.current(), 3);
}

#[test]
fn registry_drops_duplicate_and_empty_ids() {
    let reg = SectionRegistry::new(["hero", "", "about", "hero", "contact"]);
    let ids: Vec<&str> = reg.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["hero", "about", "contact"]);
    for (i, s) in reg.iter().enumerate() {
        assert_eq!(s.order, i);
    }
    assert_eq!(reg.index_of("contact"), Some(2));
}

#[test]
fn digit_index_and_text_field_helpers() {
    assert_eq!(digit_index("Digit1"), Some(0));
    assert_eq!(digit_index("Digit9"), Some(8));
    assert_eq!(digit_index("Digit0"), None);
    assert_eq!(digit_index("Numpad1"), None);
    assert_eq!(digit_index("KeyA"), None);
    assert!(is_text_field_tag("INPUT"));
    assert!(is_text_field_tag("textarea"));
    assert!(!is_text_field_tag("BUTTON"));
    assert!(!is_text_field_tag("DIV"));
}
