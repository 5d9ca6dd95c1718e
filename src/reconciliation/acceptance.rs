use core::fmt::Display;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EditScript, OperationId};

/// The reviewer's decision about a single operation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Acceptance {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl Acceptance {
    /// Accepted becomes rejected, everything else becomes accepted.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Acceptance::Accepted => Acceptance::Rejected,
            Acceptance::Pending | Acceptance::Rejected => Acceptance::Accepted,
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool { self == Acceptance::Accepted }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Acceptance::Pending => "pending",
            Acceptance::Accepted => "accepted",
            Acceptance::Rejected => "rejected",
        }
    }
}

impl Display for Acceptance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decisions about the operations of one `EditScript`, keyed by their id.
/// Operations without an entry are pending.
///
/// The state doesn't hold on to the script, so it can't tell whether an id
/// belongs to it; ids unknown to the script are reported when the state is
/// applied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptanceState(BTreeMap<OperationId, Acceptance>);

impl AcceptanceState {
    /// Every operation of `script` pending.
    #[must_use]
    pub fn new(script: &EditScript) -> Self { Self::with_all(script, Acceptance::Pending) }

    #[must_use]
    pub fn all_accepted(script: &EditScript) -> Self { Self::with_all(script, Acceptance::Accepted) }

    #[must_use]
    pub fn all_rejected(script: &EditScript) -> Self { Self::with_all(script, Acceptance::Rejected) }

    fn with_all(script: &EditScript, acceptance: Acceptance) -> Self {
        script.ids().map(|id| (id, acceptance)).collect()
    }

    #[must_use]
    pub fn get(&self, id: OperationId) -> Acceptance {
        self.0.get(&id).copied().unwrap_or_default()
    }

    /// Records the decision, returning the previous one.
    pub fn set(&mut self, id: OperationId, acceptance: Acceptance) -> Acceptance {
        self.0.insert(id, acceptance).unwrap_or_default()
    }

    pub fn accept(&mut self, id: OperationId) -> Acceptance { self.set(id, Acceptance::Accepted) }

    pub fn reject(&mut self, id: OperationId) -> Acceptance { self.set(id, Acceptance::Rejected) }

    pub fn reset(&mut self, id: OperationId) -> Acceptance { self.set(id, Acceptance::Pending) }

    /// Flips between accepted and rejected; a pending operation becomes
    /// accepted. Returns the new decision.
    pub fn toggle(&mut self, id: OperationId) -> Acceptance {
        let toggled = self.get(id).toggled();
        self.set(id, toggled);

        toggled
    }

    pub fn set_all(&mut self, script: &EditScript, acceptance: Acceptance) {
        self.0.extend(script.ids().map(|id| (id, acceptance)));
    }

    pub fn accept_all(&mut self, script: &EditScript) {
        self.set_all(script, Acceptance::Accepted);
    }

    pub fn reject_all(&mut self, script: &EditScript) {
        self.set_all(script, Acceptance::Rejected);
    }

    /// Forgets every decision, leaving all operations pending.
    pub fn clear(&mut self) { self.0.clear(); }

    #[must_use]
    pub fn is_accepted(&self, id: OperationId) -> bool { self.get(id).is_accepted() }

    /// Ids of the accepted operations in ascending order.
    pub fn accepted(&self) -> impl Iterator<Item = OperationId> + '_ {
        self.iter()
            .filter(|(_, acceptance)| acceptance.is_accepted())
            .map(|(id, _)| id)
    }

    /// Ids with a recorded decision, including explicitly pending ones.
    pub fn ids(&self) -> impl Iterator<Item = OperationId> + '_ { self.0.keys().copied() }

    pub fn iter(&self) -> impl Iterator<Item = (OperationId, Acceptance)> + '_ {
        self.0.iter().map(|(id, acceptance)| (*id, *acceptance))
    }

    /// Number of operations of `script` in each state, as
    /// `(pending, accepted, rejected)`.
    #[must_use]
    pub fn summary(&self, script: &EditScript) -> (usize, usize, usize) {
        script
            .ids()
            .fold((0, 0, 0), |(pending, accepted, rejected), id| match self.get(id) {
                Acceptance::Pending => (pending + 1, accepted, rejected),
                Acceptance::Accepted => (pending, accepted + 1, rejected),
                Acceptance::Rejected => (pending, accepted, rejected + 1),
            })
    }
}

impl FromIterator<(OperationId, Acceptance)> for AcceptanceState {
    fn from_iter<T: IntoIterator<Item = (OperationId, Acceptance)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Accepts the given ids.
impl FromIterator<OperationId> for AcceptanceState {
    fn from_iter<T: IntoIterator<Item = OperationId>>(iter: T) -> Self {
        iter.into_iter().map(|id| (id, Acceptance::Accepted)).collect()
    }
}

impl Extend<(OperationId, Acceptance)> for AcceptanceState {
    fn extend<T: IntoIterator<Item = (OperationId, Acceptance)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toggle() {
        let script = EditScript::from_strings("a b c", "x b y");
        let mut state = AcceptanceState::new(&script);
        let first = OperationId::new(0);

        assert_eq!(state.get(first), Acceptance::Pending);
        assert_eq!(state.toggle(first), Acceptance::Accepted);
        assert_eq!(state.toggle(first), Acceptance::Rejected);
        assert_eq!(state.toggle(first), Acceptance::Accepted);
        assert_eq!(state.reset(first), Acceptance::Accepted);
        assert_eq!(state.get(first), Acceptance::Pending);
    }

    #[test]
    fn test_bulk_changes() {
        let script = EditScript::from_strings("a b c", "x b y");
        let mut state = AcceptanceState::new(&script);

        assert_eq!(state.summary(&script), (2, 0, 0));

        state.accept_all(&script);
        state.reject(OperationId::new(1));
        assert_eq!(state.summary(&script), (0, 1, 1));
        assert_eq!(state.accepted().collect::<Vec<_>>(), vec![OperationId::new(0)]);

        state.reject_all(&script);
        assert_eq!(state, AcceptanceState::all_rejected(&script));

        state.clear();
        assert_eq!(state.summary(&script), (2, 0, 0));
        assert_eq!(state.ids().count(), 0);
    }

    #[test]
    fn test_collect_accepted_ids() {
        let state: AcceptanceState = [OperationId::new(2), OperationId::new(0)]
            .into_iter()
            .collect();

        assert!(state.is_accepted(OperationId::new(0)));
        assert!(!state.is_accepted(OperationId::new(1)));
        assert_eq!(
            state.accepted().collect::<Vec<_>>(),
            vec![OperationId::new(0), OperationId::new(2)]
        );
    }
}
