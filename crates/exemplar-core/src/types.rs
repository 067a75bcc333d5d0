use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

///
/// Id
///
/// Store-assigned integer identity for records.
/// Identity columns are never null; the store allocates the next value on
/// insert and the probe side only ever matches by equality.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Id(u64);

impl Id {
    /// Construct an identity from the raw key value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying key.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Next identity in allocation order.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
