//! Per-row expansion bookkeeping

use std::collections::HashMap;
use std::collections::HashSet;

use super::ExpansionState;
use super::SubrowKind;

/// Expansion state for every row of one table instance, keyed by row id.
#[derive(Debug, Clone, Default)]
pub struct RowExpansion {
    states: HashMap<String, ExpansionState>,
}

impl RowExpansion {
    /// Creates an empty state map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial state from each row's `default_expanded` result.
    pub fn seed<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let states = rows
            .into_iter()
            .map(|(id, open)| (id.into(), ExpansionState::initial(open)))
            .collect();
        Self { states }
    }

    /// Aligns the map with a new data set.
    ///
    /// Rows no longer present lose their state. Rows seen for the first time
    /// are seeded with `default_expanded`; rows already known keep theirs.
    pub fn sync<'a, I, F>(&mut self, ids: I, mut default_expanded: F)
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str) -> bool,
    {
        let ids: Vec<&str> = ids.into_iter().collect();
        let present: HashSet<&str> = ids.iter().copied().collect();

        let before = self.states.len();
        self.states.retain(|id, _| present.contains(id.as_str()));
        let dropped = before - self.states.len();
        if dropped > 0 {
            log::debug!("Dropped expansion state of {dropped} removed rows");
        }

        for id in ids {
            if !self.states.contains_key(id) {
                let state = ExpansionState::initial(default_expanded(id));
                self.states.insert(id.to_string(), state);
            }
        }
    }

    /// Current state of a row. Unknown rows are closed.
    pub fn state(&self, id: &str) -> ExpansionState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Returns `true` if the row is tracked.
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Activates the `kind` trigger on a row. Returns the new state, or
    /// `None` if the row is not tracked.
    pub fn toggle(&mut self, id: &str, kind: SubrowKind) -> Option<ExpansionState> {
        let state = self.states.get_mut(id)?;
        let next = state.toggle(kind);
        log::debug!("Row '{id}' {kind} toggle: {state:?} -> {next:?}");
        *state = next;
        Some(next)
    }

    /// Closes any subrow on a row. Returns `None` if the row is not tracked.
    pub fn close(&mut self, id: &str) -> Option<ExpansionState> {
        let state = self.states.get_mut(id)?;
        if state.is_expanded() {
            log::debug!("Row '{id}' closed from {state:?}");
        }
        *state = state.close();
        Some(*state)
    }

    /// Number of tracked rows.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no rows are tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ids of rows with an open subrow, in no particular order.
    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_expanded())
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let expansion = RowExpansion::seed([("a", false), ("b", true)]);
        assert_eq!(expansion.state("a"), ExpansionState::Closed);
        assert_eq!(expansion.state("b"), ExpansionState::OpenContent);
        assert_eq!(expansion.len(), 2);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut expansion = RowExpansion::seed([("a", false), ("b", false)]);
        expansion.toggle("a", SubrowKind::Content);
        assert_eq!(expansion.state("a"), ExpansionState::OpenContent);
        assert_eq!(expansion.state("b"), ExpansionState::Closed);

        expansion.toggle("b", SubrowKind::Delete);
        assert_eq!(expansion.state("a"), ExpansionState::OpenContent);
        assert_eq!(expansion.state("b"), ExpansionState::OpenDelete);
    }

    #[test]
    fn test_unknown_row() {
        let mut expansion = RowExpansion::new();
        assert_eq!(expansion.toggle("ghost", SubrowKind::Content), None);
        assert_eq!(expansion.close("ghost"), None);
        assert_eq!(expansion.state("ghost"), ExpansionState::Closed);
    }

    #[test]
    fn test_sync_keeps_known_drops_removed_seeds_new() {
        let mut expansion = RowExpansion::seed([("a", false), ("b", false)]);
        expansion.toggle("a", SubrowKind::Delete);

        expansion.sync(["a", "c"], |id| id == "c");

        assert_eq!(expansion.state("a"), ExpansionState::OpenDelete);
        assert!(!expansion.contains("b"));
        assert_eq!(expansion.state("c"), ExpansionState::OpenContent);
    }

    #[test]
    fn test_removed_row_comes_back_seeded() {
        let mut expansion = RowExpansion::seed([("a", false)]);
        expansion.toggle("a", SubrowKind::Content);
        expansion.sync(std::iter::empty(), |_| false);
        expansion.sync(["a"], |_| false);
        assert_eq!(expansion.state("a"), ExpansionState::Closed);
    }

    #[test]
    fn test_expanded_ids() {
        let mut expansion = RowExpansion::seed([("a", true), ("b", false), ("c", false)]);
        expansion.toggle("c", SubrowKind::Delete);
        let mut ids: Vec<&str> = expansion.expanded().collect();
        ids.sort_unstable();
        assert_eq!(ids, ["a", "c"]);
    }
}
