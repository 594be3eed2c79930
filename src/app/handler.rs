//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::page::PageId;
use crate::ui::page_view::HitZone;
use crate::ui::scroll_view::Wheel;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    apply_action(state, action);
}

/// Perform a bound action on the active page.
pub fn apply_action(state: &mut AppState, action: Action) {
    let step = state.config.scroll_step as i32;
    match action {
        Action::ScrollUp => state.active_view_mut().scroll.scroll_by(-step),
        Action::ScrollDown => state.active_view_mut().scroll.scroll_by(step),
        Action::PageUp => state.active_view_mut().scroll.page_up(),
        Action::PageDown => state.active_view_mut().scroll.page_down(),
        Action::ScrollTop => state.active_view_mut().scroll.to_top(),
        Action::ScrollBottom => state.active_view_mut().scroll.to_bottom(),
        Action::FocusNext => move_focus(state, 1),
        Action::FocusPrev => move_focus(state, -1),
        Action::Activate => activate_focused(state),
        Action::Back => {
            let target = state.active().back();
            state.show(target);
        }
        Action::Home => state.show(PageId::Welcome),
        Action::TogglePresentation => {
            state.presentation = !state.presentation;
            tracing::debug!(presentation = state.presentation, "presentation mode toggled");
        }
        Action::ExitPresentation => state.presentation = false,
        Action::Quit => state.should_quit = true,
    }
}

/// Cycle keyboard focus through the active page's buttons.
fn move_focus(state: &mut AppState, delta: isize) {
    let count = state.deck.active_page().buttons().len();
    if count == 0 {
        return;
    }
    let view = state.active_view_mut();
    let next = match view.focus {
        None if delta >= 0 => 0,
        None => count - 1,
        Some(i) => (i as isize + delta).rem_euclid(count as isize) as usize,
    };
    view.focus = Some(next);
}

/// Follow the focused button, if any.
fn activate_focused(state: &mut AppState) {
    let Some(idx) = state.active_view().focus else {
        state.status_message = Some(state.config.focus_prompt());
        return;
    };
    let target = state
        .deck
        .active_page()
        .buttons()
        .get(idx)
        .map(|b| b.target);
    if let Some(target) = target {
        state.show(target);
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let step = state.config.scroll_step;
    match mouse.kind {
        MouseEventKind::ScrollUp => state.active_view_mut().scroll.wheel(Wheel::Up, step),
        MouseEventKind::ScrollDown => state.active_view_mut().scroll.wheel(Wheel::Down, step),
        MouseEventKind::Moved => {
            // Hovering a button highlights it like keyboard focus.
            if let Some(zone) = zone_at(state, mouse.column, mouse.row) {
                state.active_view_mut().focus = Some(zone.index);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(zone) = zone_at(state, mouse.column, mouse.row) {
                state.active_view_mut().focus = Some(zone.index);
                state.show(zone.target);
            }
        }
        _ => {}
    }
}

fn zone_at(state: &AppState, col: u16, row: u16) -> Option<HitZone> {
    state
        .hit_zones
        .iter()
        .find(|z| point_in_rect(z.rect, col, row))
        .copied()
}

fn point_in_rect(area: ratatui::layout::Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::assets::AssetPaths;
    use crate::core::deck::Deck;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default();
        let deck = Deck::build(&AssetPaths::in_dir(dir.path()), config.presentation_hint());
        AppState::new(deck, config)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        let modifiers = match code {
            KeyCode::BackTab => KeyModifiers::SHIFT,
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        handle_key(state, KeyEvent::new(code, modifiers));
    }

    fn visible_count(state: &AppState) -> usize {
        PageId::ALL.iter().filter(|&&p| state.deck.is_visible(p)).count()
    }

    #[test]
    fn each_menu_button_raises_its_page() {
        let expected = [PageId::UserEngagement, PageId::PromptSimilarity, PageId::StyleEngagement];
        for (presses, target) in expected.into_iter().enumerate() {
            let mut s = state();
            s.show(PageId::Menu);
            for _ in 0..=presses {
                press(&mut s, KeyCode::Tab);
            }
            press(&mut s, KeyCode::Enter);
            assert_eq!(s.active(), target);
            assert_eq!(visible_count(&s), 1);
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut s = state();
        s.show(PageId::Menu);
        press(&mut s, KeyCode::BackTab);
        assert_eq!(s.active_view().focus, Some(2));
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.active_view().focus, Some(0));
    }

    #[test]
    fn enter_without_focus_stays_put() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active(), PageId::Welcome);
        assert_eq!(s.status_message.as_deref(), Some("Tab to a button, then press Enter"));

        s.config
            .bindings
            .insert(Action::FocusNext, vec![crate::config::KeyBind::new(KeyCode::Char('n'), KeyModifiers::NONE)]);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.status_message.as_deref(), Some("n to a button, then press Enter"));
    }

    #[test]
    fn back_and_home_navigation() {
        let mut s = state();
        s.show(PageId::StyleEngagement);
        press(&mut s, KeyCode::Backspace);
        assert_eq!(s.active(), PageId::Menu);
        press(&mut s, KeyCode::Backspace);
        assert_eq!(s.active(), PageId::Welcome);

        s.show(PageId::PromptSimilarity);
        press(&mut s, KeyCode::Char('H'));
        assert_eq!(s.active(), PageId::Welcome);
    }

    #[test]
    fn result_page_buttons_return() {
        let mut s = state();
        s.show(PageId::UserEngagement);
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active(), PageId::Menu);

        s.show(PageId::UserEngagement);
        // Focus is remembered per page: second button is "Return Home".
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active(), PageId::Welcome);
    }

    #[test]
    fn presentation_toggles_and_escapes() {
        let mut s = state();
        press(&mut s, KeyCode::F(11));
        assert!(s.presentation);
        press(&mut s, KeyCode::F(11));
        assert!(!s.presentation);
        press(&mut s, KeyCode::Char('f'));
        press(&mut s, KeyCode::Esc);
        assert!(!s.presentation);
    }

    #[test]
    fn quit_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);

        let mut s = state();
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn click_on_zone_switches_page() {
        let mut s = state();
        s.hit_zones = vec![HitZone {
            rect: Rect::new(10, 5, 20, 3),
            target: PageId::Menu,
            index: 0,
        }];

        let click = |col, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse(&mut s, click(9, 6));
        assert_eq!(s.active(), PageId::Welcome);

        handle_mouse(&mut s, click(12, 6));
        assert_eq!(s.active(), PageId::Menu);
        assert!(s.hit_zones.is_empty());
        assert_eq!(visible_count(&s), 1);
    }

    #[test]
    fn hover_focuses_button_without_switching() {
        let mut s = state();
        s.hit_zones = vec![
            HitZone { rect: Rect::new(10, 5, 20, 3), target: PageId::Menu, index: 0 },
            HitZone { rect: Rect::new(40, 5, 20, 3), target: PageId::Welcome, index: 1 },
        ];
        let moved = |col, row| MouseEvent {
            kind: MouseEventKind::Moved,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse(&mut s, moved(2, 2));
        assert_eq!(s.active_view().focus, None);

        handle_mouse(&mut s, moved(12, 6));
        assert_eq!(s.active_view().focus, Some(0));
        handle_mouse(&mut s, moved(45, 7));
        assert_eq!(s.active_view().focus, Some(1));

        // Leaving the button keeps the last highlight; nothing is activated.
        handle_mouse(&mut s, moved(2, 2));
        assert_eq!(s.active_view().focus, Some(1));
        assert_eq!(s.active(), PageId::Welcome);
        assert_eq!(s.hit_zones.len(), 2);
    }

    #[test]
    fn wheel_scrolls_active_page_only() {
        let mut s = state();
        for view in &mut s.views {
            view.scroll.set_extent(100, 10);
        }
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, wheel);
        assert_eq!(s.views[PageId::Welcome.index()].scroll.offset(), 3);
        assert_eq!(s.views[PageId::Menu.index()].scroll.offset(), 0);

        // Scroll position survives a round trip through another page.
        s.show(PageId::Menu);
        s.show(PageId::Welcome);
        assert_eq!(s.active_view().scroll.offset(), 3);
    }
}
