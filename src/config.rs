//! User configuration: keybindings, display settings and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/ghibli-networks/config.toml`
//! (default `~/.config/ghibli-networks/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    FocusNext,
    FocusPrev,
    Activate,
    Back,
    Home,
    TogglePresentation,
    ExitPresentation,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when writing the config file).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::ScrollTop,
        Action::ScrollBottom,
        Action::FocusNext,
        Action::FocusPrev,
        Action::Activate,
        Action::Back,
        Action::Home,
        Action::TogglePresentation,
        Action::ExitPresentation,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::ScrollTop => "scroll_top",
            Action::ScrollBottom => "scroll_bottom",
            Action::FocusNext => "focus_next",
            Action::FocusPrev => "focus_prev",
            Action::Activate => "activate",
            Action::Back => "back",
            Action::Home => "home",
            Action::TogglePresentation => "toggle_presentation",
            Action::ExitPresentation => "exit_presentation",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// User-friendly display string (e.g. `"Shift+Tab"`, `"↑"`, `"q"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Backspace => "Bksp".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => key_name(self.code),
        };
        format!("{}{key}", modifier_prefix(self.modifiers))
    }

    /// Serialise to config-file format (e.g. `"Shift+BackTab"`, `"Up"`, `"q"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", modifier_prefix(self.modifiers), key_name(self.code))
    }

    /// Parse a key string like `"Ctrl+c"`, `"Shift+BackTab"`, `"q"`, `"F11"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            // Single characters keep their case ("G" differs from "g").
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;
pub const DEFAULT_SCROLL_STEP: u16 = 3;

/// Application configuration: keybindings and display settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Directory the image assets are read from.
    pub asset_dir: PathBuf,
    /// Delay between animation frames.
    pub frame_interval_ms: u64,
    /// Rows moved per mouse-wheel notch or line-scroll key.
    pub scroll_step: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            asset_dir: PathBuf::from("."),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }
}

impl AppConfig {
    /// Built-in keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(Action::ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(Action::ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(PageUp, n)]);
        m.insert(Action::PageDown, vec![KeyBind::new(PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(Action::ScrollTop, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(Action::ScrollBottom, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), shift)]);
        m.insert(
            Action::FocusNext,
            vec![KeyBind::new(Tab, n), KeyBind::new(Right, n), KeyBind::new(Char('l'), n)],
        );
        m.insert(
            Action::FocusPrev,
            vec![KeyBind::new(BackTab, shift), KeyBind::new(Left, n), KeyBind::new(Char('h'), n)],
        );
        m.insert(Action::Activate, vec![KeyBind::new(Enter, n)]);
        m.insert(Action::Back, vec![KeyBind::new(Backspace, n), KeyBind::new(Char('b'), n)]);
        m.insert(Action::Home, vec![KeyBind::new(Char('H'), shift)]);
        m.insert(Action::TogglePresentation, vec![KeyBind::new(F(11), n), KeyBind::new(Char('f'), n)]);
        m.insert(Action::ExitPresentation, vec![KeyBind::new(Esc, n)]);
        m.insert(Action::Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}: focus | {}: open | {}: back | {}: present | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::FocusNext),
            self.short_binding(Action::Activate),
            self.short_binding(Action::Back),
            self.short_binding(Action::TogglePresentation),
            self.short_binding(Action::Quit),
        )
    }

    /// Welcome-page line naming the presentation-mode keys.
    pub fn presentation_hint(&self) -> String {
        crate::core::content::presentation_hint(
            &self.short_binding(Action::TogglePresentation),
            &self.short_binding(Action::ExitPresentation),
        )
    }

    /// Status message shown when activation is requested with nothing focused.
    pub fn focus_prompt(&self) -> String {
        format!(
            "{} to a button, then press {}",
            self.short_binding(Action::FocusNext),
            self.short_binding(Action::Activate),
        )
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to disk, returning where it was written.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "asset_dir" => {
                    let dir = value.trim_matches('"');
                    if !dir.is_empty() {
                        config.asset_dir = PathBuf::from(dir);
                    }
                    continue;
                }
                "frame_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.frame_interval_ms = v.clamp(20, 2000);
                    }
                    continue;
                }
                "scroll_step" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.scroll_step = v.clamp(1, 20);
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# ghibli-networks configuration".to_string(),
            String::new(),
            "# Display settings".to_string(),
            format!("asset_dir = \"{}\"", self.asset_dir.display()),
            format!("frame_interval_ms = {}", self.frame_interval_ms),
            format!("scroll_step = {}", self.scroll_step),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/ghibli-networks/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_cover_every_action() {
        let config = AppConfig::default();
        for action in Action::ALL {
            assert!(config.bindings.get(action).is_some_and(|b| !b.is_empty()), "{action:?}");
        }
    }

    #[test]
    fn default_keys_resolve() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::F(11), KeyModifiers::NONE)), Some(Action::TogglePresentation));
        assert_eq!(config.match_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::ExitPresentation));
        assert_eq!(config.match_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Action::FocusPrev));
        assert_eq!(config.match_key(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(Action::ScrollBottom));
        assert_eq!(config.match_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn parse_overrides_settings_and_bindings() {
        let config = AppConfig::parse(
            "# comment\n[display]\nasset_dir = \"/srv/slides\"\nframe_interval_ms = 5\nscroll_step = 7\nquit = Ctrl+x, Esc\nbogus = q\n",
        );
        assert_eq!(config.asset_dir, PathBuf::from("/srv/slides"));
        assert_eq!(config.frame_interval_ms, 20);
        assert_eq!(config.scroll_step, 7);
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![
                KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
                KeyBind::new(KeyCode::Esc, KeyModifiers::NONE),
            ]
        );
        assert_eq!(config.bindings[&Action::Activate], AppConfig::default_bindings()[&Action::Activate]);
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.frame_interval_ms = 250;
        config.asset_dir = PathBuf::from("assets");

        let reparsed = AppConfig::parse(&config.serialise());
        assert_eq!(reparsed.frame_interval_ms, 250);
        assert_eq!(reparsed.asset_dir, PathBuf::from("assets"));
        for action in Action::ALL {
            assert_eq!(reparsed.bindings[action], config.bindings[action], "{action:?}");
        }
    }

    #[test]
    fn hint_reflects_bindings() {
        let hint = AppConfig::default().status_bar_hint();
        assert!(hint.contains("F11: present"));
        assert!(hint.contains("q: quit"));
    }

    #[test]
    fn prompts_follow_rebinding() {
        let mut config = AppConfig::default();
        assert_eq!(config.presentation_hint(), "Press F11 for presentation mode, Esc to leave it");
        assert_eq!(config.focus_prompt(), "Tab to a button, then press Enter");

        config.bindings.insert(Action::TogglePresentation, vec![KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)]);
        config.bindings.insert(Action::ExitPresentation, vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::NONE)]);
        config.bindings.insert(Action::FocusNext, vec![KeyBind::new(KeyCode::Char('n'), KeyModifiers::NONE)]);
        config.bindings.insert(Action::Activate, vec![KeyBind::new(KeyCode::Char('o'), KeyModifiers::NONE)]);
        assert_eq!(config.presentation_hint(), "Press F5 for presentation mode, x to leave it");
        assert_eq!(config.focus_prompt(), "n to a button, then press o");
    }
}
