//! Row expansion state
//!
//! Every row carries its own small state machine deciding whether a subrow is
//! open beneath it, and which kind. Rows never share state: toggling one row
//! leaves all others untouched.
//!
//! ```text
//!            toggle(content)              toggle(delete)
//!   Closed <----------------> OpenContent <------------> OpenDelete
//!     ^                                                     |
//!     +-------------------- toggle(delete) -----------------+
//!
//!   close() from any state -> Closed
//! ```

mod rows;

pub use rows::RowExpansion;

use serde::Deserialize;
use serde::Serialize;

/// Which subrow slot a trigger column addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubrowKind {
    /// Generic expand/collapse showing caller content.
    Content,
    /// Confirmation subrow for a destructive action.
    Delete,
}

impl std::fmt::Display for SubrowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubrowKind::Content => f.write_str("content"),
            SubrowKind::Delete => f.write_str("delete"),
        }
    }
}

/// Expansion state of a single row.
///
/// A row has at most one subrow materialized at a time, so opening one kind
/// replaces the other instead of stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpansionState {
    #[default]
    Closed,
    OpenContent,
    OpenDelete,
}

impl ExpansionState {
    /// The state a row starts in.
    pub fn initial(default_expanded: bool) -> Self {
        if default_expanded {
            ExpansionState::OpenContent
        } else {
            ExpansionState::Closed
        }
    }

    /// The state after the trigger for `kind` is activated.
    pub fn toggle(self, kind: SubrowKind) -> Self {
        match (self, kind) {
            (ExpansionState::OpenContent, SubrowKind::Content) => ExpansionState::Closed,
            (ExpansionState::OpenDelete, SubrowKind::Delete) => ExpansionState::Closed,
            (_, SubrowKind::Content) => ExpansionState::OpenContent,
            (_, SubrowKind::Delete) => ExpansionState::OpenDelete,
        }
    }

    /// The state after the subrow asks to close.
    pub fn close(self) -> Self {
        ExpansionState::Closed
    }

    /// The open subrow kind, if any.
    pub fn open_kind(self) -> Option<SubrowKind> {
        match self {
            ExpansionState::Closed => None,
            ExpansionState::OpenContent => Some(SubrowKind::Content),
            ExpansionState::OpenDelete => Some(SubrowKind::Delete),
        }
    }

    /// Returns `true` if a subrow of `kind` is open.
    pub fn is_open(self, kind: SubrowKind) -> bool {
        self.open_kind() == Some(kind)
    }

    /// Returns `true` if any subrow is open.
    pub fn is_expanded(self) -> bool {
        self != ExpansionState::Closed
    }
}

/// An interaction a rendered control hands back to its table.
///
/// Backends embed these in toggle and confirmation controls; the host passes
/// them to [`Table::dispatch`](crate::render::Table::dispatch) when the user
/// activates the control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableAction {
    /// Activate the trigger for `kind` on a row.
    Toggle { row_id: String, kind: SubrowKind },
    /// Close whatever subrow is open on a row.
    Close { row_id: String },
}

impl TableAction {
    /// Creates a toggle action.
    pub fn toggle(row_id: impl Into<String>, kind: SubrowKind) -> Self {
        Self::Toggle {
            row_id: row_id.into(),
            kind,
        }
    }

    /// Creates a close action.
    pub fn close(row_id: impl Into<String>) -> Self {
        Self::Close {
            row_id: row_id.into(),
        }
    }

    /// The row this action addresses.
    pub fn row_id(&self) -> &str {
        match self {
            Self::Toggle { row_id, .. } | Self::Close { row_id } => row_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ExpansionState; 3] = [
        ExpansionState::Closed,
        ExpansionState::OpenContent,
        ExpansionState::OpenDelete,
    ];

    #[test]
    fn test_transitions() {
        use ExpansionState::*;
        use SubrowKind::*;

        assert_eq!(Closed.toggle(Content), OpenContent);
        assert_eq!(OpenContent.toggle(Content), Closed);
        assert_eq!(Closed.toggle(Delete), OpenDelete);
        assert_eq!(OpenDelete.toggle(Delete), Closed);
        assert_eq!(OpenContent.toggle(Delete), OpenDelete);
        assert_eq!(OpenDelete.toggle(Content), OpenContent);
    }

    #[test]
    fn test_close_from_any_state() {
        for state in ALL {
            assert_eq!(state.close(), ExpansionState::Closed);
        }
    }

    #[test]
    fn test_double_content_toggle_is_identity_from_closed_and_open() {
        assert_eq!(
            ExpansionState::Closed
                .toggle(SubrowKind::Content)
                .toggle(SubrowKind::Content),
            ExpansionState::Closed
        );
        assert_eq!(
            ExpansionState::OpenContent
                .toggle(SubrowKind::Content)
                .toggle(SubrowKind::Content),
            ExpansionState::OpenContent
        );
    }

    #[test]
    fn test_kinds_are_mutually_exclusive() {
        for state in ALL {
            for kind in [SubrowKind::Content, SubrowKind::Delete] {
                let next = state.toggle(kind);
                assert!(
                    !(next.is_open(SubrowKind::Content) && next.is_open(SubrowKind::Delete))
                );
            }
        }
        let state = ExpansionState::OpenContent.toggle(SubrowKind::Delete);
        assert!(!state.is_open(SubrowKind::Content));
        assert!(state.is_open(SubrowKind::Delete));
    }

    #[test]
    fn test_initial() {
        assert_eq!(ExpansionState::initial(true), ExpansionState::OpenContent);
        assert_eq!(ExpansionState::initial(false), ExpansionState::Closed);
    }
}
