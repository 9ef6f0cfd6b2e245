//! User configuration: theme, card stack tuning, keybindings and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/peace-report/config.toml` (default `~/.config/peace-report/config.toml`).

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::gesture::SwipeThresholds;
use crate::core::stack::LayoutMode;
use crate::core::ParseChoiceError;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    FocusNext,
    FocusPrev,
    Activate,
    CardPrev,
    CardNext,
    CycleFilter,
    CycleLayout,
    OpenSearch,
    ToggleTheme,
    ShowAuthors,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the controls menu).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::NextSection,
        Action::PrevSection,
        Action::FocusNext,
        Action::FocusPrev,
        Action::Activate,
        Action::CardPrev,
        Action::CardNext,
        Action::CycleFilter,
        Action::CycleLayout,
        Action::OpenSearch,
        Action::ToggleTheme,
        Action::ShowAuthors,
        Action::OpenSettings,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::ScrollUp => "Scroll Up",
            Action::ScrollDown => "Scroll Down",
            Action::PageUp => "Page Up",
            Action::PageDown => "Page Down",
            Action::Top => "Go to Top",
            Action::Bottom => "Go to Bottom",
            Action::NextSection => "Next Section",
            Action::PrevSection => "Prev Section",
            Action::FocusNext => "Focus Next Item",
            Action::FocusPrev => "Focus Prev Item",
            Action::Activate => "Open / Toggle",
            Action::CardPrev => "Previous Card",
            Action::CardNext => "Next Card",
            Action::CycleFilter => "Cycle Category",
            Action::CycleLayout => "Cycle Layout",
            Action::OpenSearch => "Search",
            Action::ToggleTheme => "Toggle Theme",
            Action::ShowAuthors => "About the Authors",
            Action::OpenSettings => "Open Settings",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::FocusNext => "focus_next",
            Action::FocusPrev => "focus_prev",
            Action::Activate => "activate",
            Action::CardPrev => "card_prev",
            Action::CardNext => "card_next",
            Action::CycleFilter => "cycle_filter",
            Action::CycleLayout => "cycle_layout",
            Action::OpenSearch => "search",
            Action::ToggleTheme => "toggle_theme",
            Action::ShowAuthors => "authors",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.  SHIFT is ignored for plain characters since terminals
    /// already report the shifted glyph (`?`, `G`).
    pub fn matches(&self, event: KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        let mut mask = MODIFIER_MASK;
        if matches!(self.code, KeyCode::Char(_)) {
            mask.remove(KeyModifiers::SHIFT);
        }
        (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Create a binding from a raw key event (used during rebinding).
    pub fn from_key_event(event: KeyEvent) -> Self {
        let mut modifiers = event.modifiers & MODIFIER_MASK;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// User-friendly display string (e.g. `"Ctrl+k"`, `"↑"`, `"q"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Serialise to config-file format (e.g. `"Ctrl+k"`, `"Up"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let arrow = |glyph: &'static str, word: &'static str| if pretty { glyph } else { word };
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            // Separators of the config format need names of their own.
            KeyCode::Char('+') if !pretty => "Plus".into(),
            KeyCode::Char(',') if !pretty => "Comma".into(),
            KeyCode::Char('"') if !pretty => "Quote".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => arrow("↑", "Up").into(),
            KeyCode::Down => arrow("↓", "Down").into(),
            KeyCode::Left => arrow("←", "Left").into(),
            KeyCode::Right => arrow("→", "Right").into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            KeyCode::Backspace => arrow("Bksp", "Backspace").into(),
            KeyCode::Delete => arrow("Del", "Delete").into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => arrow("PgUp", "PageUp").into(),
            KeyCode::PageDown => arrow("PgDn", "PageDown").into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+k"`, `"Shift+BackTab"`, `"q"`, `"Enter"`.
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

        // Single characters keep their case: `G` and `g` are distinct keys.
        if key_part.chars().count() == 1 {
            return Some(KeyBind::new(KeyCode::Char(key_part.chars().next()?), modifiers));
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
            "plus" => KeyCode::Char('+'),
            "comma" => KeyCode::Char(','),
            "quote" => KeyCode::Char('"'),
            s if s.starts_with('f') => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── theme ─────────────

/// Colour scheme of the whole interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseChoiceError {
                kind: "theme",
                value: s.to_string(),
                expected: "dark, light",
            }),
        }
    }
}

// ───────────────────────────────────────── config ────────────

pub const DEFAULT_PX_PER_CELL: f32 = 8.0;

/// Application configuration: keybindings, appearance and card stack tuning.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub theme: ThemeMode,
    /// Layout the document card stack starts in.
    pub default_layout: LayoutMode,
    pub swipe: SwipeThresholds,
    /// Horizontal pixels represented by one terminal column while dragging.
    pub px_per_cell: f32,
    /// Open activated links in the system browser.
    pub open_links: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            theme: ThemeMode::default(),
            default_layout: LayoutMode::default(),
            swipe: SwipeThresholds::default(),
            px_per_cell: DEFAULT_PX_PER_CELL,
            open_links: true,
        }
    }
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n), KeyBind::new(Char('u'), ctrl)]);
        m.insert(Action::PageDown, vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(Bottom, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), n)]);
        m.insert(NextSection, vec![KeyBind::new(Char(']'), n)]);
        m.insert(PrevSection, vec![KeyBind::new(Char('['), n)]);
        m.insert(FocusNext, vec![KeyBind::new(Tab, n)]);
        m.insert(FocusPrev, vec![KeyBind::new(BackTab, KeyModifiers::SHIFT)]);
        m.insert(Activate, vec![KeyBind::new(Enter, n)]);
        m.insert(CardPrev, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(CardNext, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(CycleFilter, vec![KeyBind::new(Char('f'), n)]);
        m.insert(CycleLayout, vec![KeyBind::new(Char('v'), n)]);
        m.insert(OpenSearch, vec![KeyBind::new(Char('/'), n), KeyBind::new(Char('k'), ctrl)]);
        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(ShowAuthors, vec![KeyBind::new(Char('a'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Char('c'), ctrl)]);

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

    /// Add a binding for `action`.  Removes this key from any other action
    /// to prevent conflicts, then appends it to `action`'s bindings.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    /// Restore all bindings to the built-in defaults.
    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
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
            "{}: scroll | {}: focus | {}: open | {}: search | {}: settings",
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::FocusNext),
            self.short_binding(Action::Activate),
            self.short_binding(Action::OpenSearch),
            self.short_binding(Action::OpenSettings),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "config unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Parse the config text. Unknown keys and bad values are skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(line = lineno + 1, "config line without `=` ignored");
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "theme" => match value.parse::<ThemeMode>() {
                    Ok(theme) => config.theme = theme,
                    Err(err) => tracing::warn!(%err, "ignoring config value"),
                },
                "default_layout" => match value.parse::<LayoutMode>() {
                    Ok(layout) => config.default_layout = layout,
                    Err(err) => tracing::warn!(%err, "ignoring config value"),
                },
                "swipe_distance_px" => {
                    if let Some(v) = parse_bounded(key, value, 5.0, 400.0) {
                        config.swipe.distance_px = v;
                    }
                }
                "swipe_score" => {
                    if let Some(v) = parse_bounded(key, value, 50.0, 50_000.0) {
                        config.swipe.score = v;
                    }
                }
                "px_per_cell" => {
                    if let Some(v) = parse_bounded(key, value, 1.0, 32.0) {
                        config.px_per_cell = v;
                    }
                }
                "open_links" => match value {
                    "true" => config.open_links = true,
                    "false" => config.open_links = false,
                    _ => tracing::warn!(key, value, "expected true or false"),
                },
                _ => {
                    let Some(action) = Action::from_config_key(key) else {
                        tracing::warn!(key, "unknown config key");
                        continue;
                    };
                    let parsed: Vec<KeyBind> = value
                        .split(',')
                        .filter_map(|part| {
                            let part = part.trim().trim_matches('"');
                            let bind = KeyBind::parse(part);
                            if bind.is_none() {
                                tracing::warn!(key, part, "unrecognised key");
                            }
                            bind
                        })
                        .collect();
                    if !parsed.is_empty() {
                        config.bindings.insert(action, parsed);
                    }
                }
            }
        }

        config
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# peace-report configuration".to_string(),
            String::new(),
            "# Appearance".to_string(),
            format!("theme = {}", self.theme),
            format!("default_layout = {}", self.default_layout),
            String::new(),
            "# Document card stack".to_string(),
            format!("swipe_distance_px = {}", self.swipe.distance_px),
            format!("swipe_score = {}", self.swipe.score),
            format!("px_per_cell = {}", self.px_per_cell),
            format!("open_links = {}", self.open_links),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, Plus, Comma,".to_string(),
            "#   Quote, F1-F12".to_string(),
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

fn parse_bounded(key: &str, value: &str, min: f32, max: f32) -> Option<f32> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v.clamp(min, max)),
        _ => {
            tracing::warn!(key, value, "expected a number");
            None
        }
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/peace-report/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("peace-report").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_match_expected_actions() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('/'), KeyModifiers::NONE)), Some(Action::OpenSearch));
        assert_eq!(config.match_key(key(KeyCode::Char('k'), KeyModifiers::CONTROL)), Some(Action::OpenSearch));
        assert_eq!(config.match_key(key(KeyCode::Char('k'), KeyModifiers::NONE)), Some(Action::ScrollUp));
        assert_eq!(config.match_key(key(KeyCode::Char('f'), KeyModifiers::NONE)), Some(Action::CycleFilter));
        assert_eq!(config.match_key(key(KeyCode::Char('v'), KeyModifiers::NONE)), Some(Action::CycleLayout));
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn shifted_characters_match_without_shift_in_binding() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('?'), KeyModifiers::SHIFT)), Some(Action::OpenSettings));
        assert_eq!(config.match_key(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(Action::Bottom));
        assert_eq!(config.match_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Action::FocusPrev));
    }

    #[test]
    fn parse_reads_settings_and_bindings() {
        let config = AppConfig::parse(
            "theme = light\n\
             default_layout = grid\n\
             swipe_distance_px = 30\n\
             swipe_score = 800\n\
             px_per_cell = 6\n\
             open_links = false\n\
             quit = Ctrl+q, x\n",
        );
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.default_layout, LayoutMode::Grid);
        assert_eq!(config.swipe, SwipeThresholds { distance_px: 30.0, score: 800.0 });
        assert_eq!(config.px_per_cell, 6.0);
        assert!(!config.open_links);
        assert_eq!(config.display_bindings(Action::Quit), "Ctrl+q/x");
    }

    #[test]
    fn malformed_entries_fall_back_to_defaults() {
        let config = AppConfig::parse(
            "theme = sepia\n\
             default_layout = carousel\n\
             swipe_distance_px = far\n\
             px_per_cell = 1000\n\
             no equals sign here\n\
             mystery = 1\n\
             quit = Hyper+q\n",
        );
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.default_layout, LayoutMode::Stack);
        assert_eq!(config.swipe, SwipeThresholds::default());
        assert_eq!(config.px_per_cell, 32.0);
        assert_eq!(config.display_bindings(Action::Quit), "q/Ctrl+c");
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Light;
        config.default_layout = LayoutMode::List;
        config.swipe.distance_px = 70.0;
        config.add_binding(Action::ToggleTheme, KeyBind::new(KeyCode::F(5), KeyModifiers::NONE));

        let back = AppConfig::parse(&config.serialise());
        assert_eq!(back.theme, ThemeMode::Light);
        assert_eq!(back.default_layout, LayoutMode::List);
        assert_eq!(back.swipe.distance_px, 70.0);
        assert_eq!(back.bindings, config.bindings);
    }

    #[test]
    fn separator_keys_survive_a_save() {
        let mut config = AppConfig::default();
        config.add_binding(Action::CycleFilter, KeyBind::new(KeyCode::Char('+'), KeyModifiers::NONE));
        config.add_binding(Action::CycleLayout, KeyBind::new(KeyCode::Char(','), KeyModifiers::NONE));
        config.add_binding(Action::ShowAuthors, KeyBind::new(KeyCode::Char('"'), KeyModifiers::NONE));
        config.add_binding(Action::ToggleTheme, KeyBind::new(KeyCode::Char('+'), KeyModifiers::CONTROL));

        let text = config.serialise();
        assert!(text.contains("cycle_filter = f, Plus"), "{text}");

        let back = AppConfig::parse(&text);
        assert_eq!(back.bindings, config.bindings);
        assert_eq!(back.match_key(key(KeyCode::Char('+'), KeyModifiers::NONE)), Some(Action::CycleFilter));
        assert_eq!(back.match_key(key(KeyCode::Char(','), KeyModifiers::NONE)), Some(Action::CycleLayout));
        assert_eq!(back.match_key(key(KeyCode::Char('+'), KeyModifiers::CONTROL)), Some(Action::ToggleTheme));
        assert_eq!(back.display_bindings(Action::CycleLayout), "v/,");
    }

    #[test]
    fn rebinding_steals_key_from_other_action() {
        let mut config = AppConfig::default();
        config.add_binding(Action::ToggleTheme, KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(config.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Action::ToggleTheme));
        assert_eq!(config.display_bindings(Action::Quit), "Ctrl+c");
        config.reset_defaults();
        assert_eq!(config.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Action::Quit));
    }

    #[test]
    fn save_and_load_through_a_file() {
        let dir = std::env::temp_dir().join(format!("peace-report-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.open_links = false;
        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path);
        assert!(!loaded.open_links);
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(AppConfig::load_from(&path).open_links);
    }
}
