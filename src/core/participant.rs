use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a participant in a settlement.
///
/// A participant is identified purely by its position in the start/end
/// quantity sequences. Display names live in a [`Roster`] and never take
/// part in the computation.
///
/// # Examples
///
/// ```
/// use debt_settler::core::participant::ParticipantId;
///
/// let alice = ParticipantId::new(0);
/// let bob = ParticipantId::new(1);
/// assert_ne!(alice, bob);
/// assert_eq!(bob.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(usize);

impl ParticipantId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this participant in the input sequences.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for ParticipantId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

/// Display names for the participants of one settlement, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Placeholder names `Participant0`, `Participant1`, ... for `count`
    /// participants.
    pub fn synthesized(count: usize) -> Self {
        Self((0..count).map(|i| format!("Participant{}", i)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display name for a participant, if the roster covers it.
    pub fn name(&self, id: ParticipantId) -> Option<&str> {
        self.0.get(id.index()).map(String::as_str)
    }

    /// Display name for a participant, falling back to its index.
    pub fn label(&self, id: ParticipantId) -> String {
        self.name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}
