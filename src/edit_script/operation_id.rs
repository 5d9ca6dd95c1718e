use core::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DiffError;

const PREFIX: &str = "change-";

/// Stable identity of an operation within one `EditScript`, derived from its
/// sequence index. Displays and parses as `change-<sequence index>`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId(usize);

impl OperationId {
    #[must_use]
    pub const fn new(sequence_index: usize) -> Self { Self(sequence_index) }

    #[must_use]
    pub const fn sequence_index(self) -> usize { self.0 }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for OperationId {
    type Err = DiffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Only the canonical form is accepted, so that an operation has exactly
        // one id: no leading zeros or signs.
        value
            .strip_prefix(PREFIX)
            .and_then(|index| index.parse::<usize>().ok())
            .map(Self)
            .filter(|id| id.to_string() == value)
            .ok_or_else(|| {
                DiffError::invalid_input(format!(
                    "`{value}` is not an operation id, expected `{PREFIX}<number>`"
                ))
            })
    }
}

impl From<usize> for OperationId {
    fn from(sequence_index: usize) -> Self { Self(sequence_index) }
}

impl From<OperationId> for String {
    fn from(id: OperationId) -> Self { id.to_string() }
}

impl TryFrom<String> for OperationId {
    type Error = DiffError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}
