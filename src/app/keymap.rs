use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::{Arc, LazyLock};

use super::input::KeyAction;

const DEFAULT_KEYMAP: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/keymap/default.keymap.json"
));

/// Which bindings are live: the plain form, an in-flight request, or an open
/// notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Default,
    Submitting,
    Notice,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(KeymapContext::Default),
            "submitting" => Some(KeymapContext::Submitting),
            "notice" => Some(KeymapContext::Notice),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Submit,
    Quit,
    Cancel,
    Dismiss,
    ResetStatus,
    ClearResult,
    FieldStep { delta: i32 },
    Passthrough,
}

impl From<RawAction> for KeyAction {
    fn from(raw: RawAction) -> Self {
        match raw {
            RawAction::Submit => KeyAction::Submit,
            RawAction::Quit => KeyAction::Quit,
            RawAction::Cancel => KeyAction::Cancel,
            RawAction::Dismiss => KeyAction::Dismiss,
            RawAction::ResetStatus => KeyAction::ResetStatus,
            RawAction::ClearResult => KeyAction::ClearResult,
            RawAction::FieldStep { delta } => KeyAction::FieldStep(delta),
            RawAction::Passthrough => KeyAction::Passthrough,
        }
    }
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Result<Self, String> {
        let contexts = raw
            .contexts
            .iter()
            .map(|ctx| {
                KeymapContext::from_str(ctx)
                    .ok_or_else(|| format!("{}: unknown context '{ctx}'", raw.id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if contexts.is_empty() {
            return Err(format!("{}: at least one context is required", raw.id));
        }
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo).map_err(|err| format!("{}: '{combo}': {err}", raw.id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if combos.is_empty() {
            return Err(format!("{}: at least one combo is required", raw.id));
        }
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.as_str())
            .collect::<Vec<_>>()
            .join("/");
        Ok(Self {
            action: raw.action.into(),
            snippet: format!("{combos_display} {}", raw.description),
            contexts,
            combos,
        })
    }

    fn matches(&self, key: &KeyEvent, context: KeymapContext) -> bool {
        self.contexts.contains(&context) && self.combos.iter().any(|pattern| pattern.matches(key))
    }
}

struct KeyPattern {
    code: KeyCode,
    required: KeyModifiers,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must name a key".into());
        };
        let code = parse_code(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        Ok(Self {
            code,
            required,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == expected
            }
            (expected, actual) => expected == actual,
        };
        if !code_matches || !key.modifiers.contains(self.required) {
            return false;
        }
        // Terminals report BackTab and upper-case letters with SHIFT set.
        let extra = key.modifiers.difference(self.required);
        extra.is_empty()
            || (extra == KeyModifiers::SHIFT
                && matches!(self.code, KeyCode::BackTab | KeyCode::Char(_)))
    }
}

fn parse_code(token: &str) -> Result<KeyCode, String> {
    let code = match token.to_ascii_lowercase().as_str() {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(format!("unsupported key '{token}'")),
            }
        }
    };
    Ok(code)
}

/// Parsed keymap, shared between the router and the help line.
pub(crate) struct KeymapStore {
    bindings: Vec<KeyBinding>,
}

impl KeymapStore {
    pub(crate) fn from_json(source: &str) -> Result<Self, String> {
        let entries: Vec<RawEntry> =
            serde_json::from_str(source).map_err(|err| format!("invalid keymap: {err}"))?;
        let bindings = entries
            .into_iter()
            .map(KeyBinding::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bindings })
    }

    pub(crate) fn classify(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key, context))
            .map(|binding| binding.action)
    }

    pub(crate) fn help_text(&self, context: KeymapContext) -> Option<String> {
        let snippets = self
            .bindings
            .iter()
            .filter(|binding| binding.contexts.contains(&context))
            .map(|binding| binding.snippet.as_str())
            .collect::<Vec<_>>();
        (!snippets.is_empty()).then(|| snippets.join(" • "))
    }
}

static DEFAULT_STORE: LazyLock<Arc<KeymapStore>> = LazyLock::new(|| {
    Arc::new(KeymapStore::from_json(DEFAULT_KEYMAP).expect("bundled keymap must parse"))
});

pub(crate) fn default_store() -> Arc<KeymapStore> {
    Arc::clone(&DEFAULT_STORE)
}
