//! User configuration — tuning values, keybindings and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/section-nav/config.toml` (default
//! `~/.config/section-nav/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::animation::DEFAULT_BREAKPOINT;
use crate::core::transition::DEFAULT_DURATION;

/// Terminals narrower than this get the collapsed "mobile" layout.
pub const DEFAULT_MOBILE_BREAKPOINT_COLS: u16 = 72;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line {line}: unknown setting `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid value `{value}` for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    #[error("invalid key binding `{0}`")]
    InvalidBinding(String),
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,
    ToggleMenu,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::NextSection,
        Action::PrevSection,
        Action::FirstSection,
        Action::LastSection,
        Action::ToggleMenu,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::NextSection => "next",
            Action::PrevSection => "previous",
            Action::FirstSection => "first",
            Action::LastSection => "last",
            Action::ToggleMenu => "toggle_menu",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
///
/// Letters are stored lower-case and match regardless of Shift, so `s`
/// also fires on `S`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalised()
    }

    fn normalised(mut self) -> Self {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.modifiers &= mask;
        if let KeyCode::Char(c) = self.code {
            self.code = KeyCode::Char(c.to_ascii_lowercase());
            self.modifiers.remove(KeyModifiers::SHIFT);
        }
        self
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        *self == Self::new(event.code, event.modifiers)
    }

    /// User-friendly display string (e.g. `"↓"`, `"Ctrl+c"`, `"m"`).
    pub fn display(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            _ => self.code_name(),
        });
        s
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    fn code_name(&self) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    /// Serialise to config-file format (e.g. `"Ctrl+n"`, `"PageDown"`).
    fn to_config_string(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&self.code_name());
        s
    }
}

impl FromStr for KeyBind {
    type Err = ConfigError;

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"PageDown"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidBinding(s.to_string());
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last().ok_or_else(invalid)?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
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
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => {
                let n: u8 = k[1..].parse().map_err(|_| invalid())?;
                KeyCode::F(n)
            }
            k if k.chars().count() == 1 => KeyCode::Char(k.chars().next().ok_or_else(invalid)?),
            _ => return Err(invalid()),
        };

        Ok(KeyBind::new(code, modifiers))
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Length of one section transition.
    pub duration_ms: u64,
    /// Gesture throttle interval.  `None` = same as the transition.
    pub throttle_ms: Option<u64>,
    /// Fraction of the transition after which the destination's content
    /// is revealed.
    pub breakpoint_fraction: f64,
    /// Terminal width below which the side nav collapses into a menu.
    pub mobile_breakpoint_cols: u16,
    /// Draw the landing-page starfield.
    pub stars: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            throttle_ms: None,
            breakpoint_fraction: DEFAULT_BREAKPOINT,
            mobile_breakpoint_cols: DEFAULT_MOBILE_BREAKPOINT_COLS,
            stars: true,
        }
    }
}

impl AppConfig {
    /// Built-in bindings: arrows and `w`/`s`, like the site.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(NextSection, vec![KeyBind::new(Down, n), KeyBind::new(Char('s'), n)]);
        m.insert(PrevSection, vec![KeyBind::new(Up, n), KeyBind::new(Char('w'), n)]);
        m.insert(FirstSection, vec![KeyBind::new(Home, n)]);
        m.insert(LastSection, vec![KeyBind::new(End, n)]);
        m.insert(ToggleMenu, vec![KeyBind::new(Char('m'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms.unwrap_or(self.duration_ms))
    }

    /// Find the action that matches a key event.  When several bindings
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
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: navigate | wheel/drag: scroll | {}: menu | {}: quit",
            self.short_binding(Action::PrevSection),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleMenu),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  Bad lines are
    /// logged and skipped.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let (config, errors) = Self::parse(&contents);
                for err in errors {
                    tracing::warn!("{}: {err}", path.display());
                }
                config
            }
            Err(err) => {
                tracing::debug!("no config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write the config to its default location, returning the path.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    /// Parse the config text.  Every recognised line is applied; the rest
    /// are reported.
    pub fn parse(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');
            let bad_value = || ConfigError::InvalidValue {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "duration_ms" => match value.parse::<u64>() {
                    Ok(v) if v > 0 => config.duration_ms = v.min(10_000),
                    _ => errors.push(bad_value()),
                },
                "throttle_ms" => match value.parse::<u64>() {
                    Ok(v) => config.throttle_ms = Some(v.min(10_000)),
                    Err(_) => errors.push(bad_value()),
                },
                "breakpoint_fraction" => match value.parse::<f64>() {
                    Ok(v) if (0.0..=1.0).contains(&v) => config.breakpoint_fraction = v,
                    _ => errors.push(bad_value()),
                },
                "mobile_breakpoint_cols" => match value.parse::<u16>() {
                    Ok(v) => config.mobile_breakpoint_cols = v,
                    Err(_) => errors.push(bad_value()),
                },
                "stars" => match value {
                    "true" => config.stars = true,
                    "false" => config.stars = false,
                    _ => errors.push(bad_value()),
                },
                _ => {
                    let Some(action) = Action::from_config_key(key) else {
                        errors.push(ConfigError::UnknownKey {
                            line: line_no,
                            key: key.to_string(),
                        });
                        continue;
                    };
                    let mut parsed = Vec::new();
                    for part in value.split(',') {
                        match part.trim().trim_matches('"').parse::<KeyBind>() {
                            Ok(bind) => parsed.push(bind),
                            Err(err) => errors.push(err),
                        }
                    }
                    if !parsed.is_empty() {
                        config.bindings.insert(action, parsed);
                    }
                }
            }
        }

        (config, errors)
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# section-nav configuration".to_string(),
            String::new(),
            "# Transitions".to_string(),
            format!("duration_ms = {}", self.duration_ms),
        ];
        match self.throttle_ms {
            Some(ms) => lines.push(format!("throttle_ms = {ms}")),
            None => lines.push("# throttle_ms = <defaults to duration_ms>".to_string()),
        }
        lines.extend([
            format!("breakpoint_fraction = {}", self.breakpoint_fraction),
            String::new(),
            "# Display".to_string(),
            format!("mobile_breakpoint_cols = {}", self.mobile_breakpoint_cols),
            format!("stars = {}", self.stars),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ]);

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

/// Return the config file path (`$XDG_CONFIG_HOME/section-nav/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("section-nav").join("config.toml")
}
