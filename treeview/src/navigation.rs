//! Keyboard navigation over the visible rows.

use std::fmt;
use std::str::FromStr;

use crossterm::event::KeyCode;

use crate::error::TreeError;
use crate::expansion::ExpansionStore;
use crate::flatten::{FlatNode, position};

/// Keys the tree reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    ArrowRight,
    ArrowLeft,
    Enter,
}

impl NavKey {
    /// Every navigation key.
    pub const ALL: [NavKey; 5] = [
        NavKey::ArrowDown,
        NavKey::ArrowUp,
        NavKey::ArrowRight,
        NavKey::ArrowLeft,
        NavKey::Enter,
    ];

    /// DOM-style key identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavKey::ArrowDown => "ArrowDown",
            NavKey::ArrowUp => "ArrowUp",
            NavKey::ArrowRight => "ArrowRight",
            NavKey::ArrowLeft => "ArrowLeft",
            NavKey::Enter => "Enter",
        }
    }

    /// Map a terminal key code. Codes the tree ignores map to `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Down => Some(NavKey::ArrowDown),
            KeyCode::Up => Some(NavKey::ArrowUp),
            KeyCode::Right => Some(NavKey::ArrowRight),
            KeyCode::Left => Some(NavKey::ArrowLeft),
            KeyCode::Enter => Some(NavKey::Enter),
            _ => None,
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavKey {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TreeError::UnknownKey(s.to_string()))
    }
}

/// Change to apply to the expansion store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionChange {
    Expand(String),
    Collapse(String),
}

/// Result of a navigation key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    /// Newly selected id, set only when the selection moves.
    pub next_selected: Option<String>,
    /// Expansion change, if any.
    pub expansion: Option<ExpansionChange>,
}

impl Navigation {
    /// Whether the key leaves all state untouched.
    pub fn is_noop(&self) -> bool {
        self.next_selected.is_none() && self.expansion.is_none()
    }
}

/// Work out what `key` does given the visible rows and current state.
///
/// An unmatched selection behaves like a cursor sitting just before the
/// first row: Down lands on the first row and Up on the last. Right, Left
/// and Enter need a current row and do nothing without one.
pub fn navigate(
    key: NavKey,
    visible: &[FlatNode<'_>],
    selected_id: Option<&str>,
    expanded: &ExpansionStore,
) -> Navigation {
    if visible.is_empty() {
        return Navigation::default();
    }

    let current = position(visible, selected_id);
    let last = visible.len() - 1;
    let mut result = Navigation::default();

    let next = match key {
        NavKey::ArrowDown => match current {
            Some(i) if i < last => Some(i + 1),
            _ => Some(0),
        },
        NavKey::ArrowUp => match current {
            Some(i) if i > 0 => Some(i - 1),
            _ => Some(last),
        },
        NavKey::ArrowRight => {
            if let Some(row) = current.map(|i| &visible[i])
                && row.is_internal
                && !expanded.is_expanded(row.id())
            {
                result.expansion = Some(ExpansionChange::Expand(row.id().to_string()));
            }
            current
        }
        NavKey::ArrowLeft => {
            if let Some(row) = current.map(|i| &visible[i])
                && row.is_internal
                && expanded.is_expanded(row.id())
            {
                result.expansion = Some(ExpansionChange::Collapse(row.id().to_string()));
            }
            current
        }
        NavKey::Enter => {
            if let Some(row) = current.map(|i| &visible[i])
                && row.is_internal
            {
                let id = row.id().to_string();
                result.expansion = Some(if expanded.is_expanded(&id) {
                    ExpansionChange::Collapse(id)
                } else {
                    ExpansionChange::Expand(id)
                });
            }
            current
        }
    };

    if next != current
        && let Some(i) = next
    {
        result.next_selected = Some(visible[i].id().to_string());
    }

    result
}
