// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use smallvec::SmallVec;

/// Identifier of a family member.
///
/// Ids are opaque strings owned by the member store. Cloning is cheap: the
/// string is shared.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(Arc<str>);

impl MemberId {
    /// Creates an id from a string.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberId({:?})", &*self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MemberId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MemberId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Recorded gender of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other recorded gender.
    Other,
    /// Not recorded.
    #[default]
    Unknown,
}

/// Recorded marital status of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaritalStatus {
    /// Never married.
    Single,
    /// Currently married.
    Married,
    /// Divorced from the recorded spouse.
    Divorced,
    /// The recorded spouse has died.
    Widowed,
    /// Not recorded.
    #[default]
    Unknown,
}

/// Error returned when more than two parent ids are supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooManyParents {
    /// Number of ids that were supplied.
    pub count: usize,
}

impl fmt::Display for TooManyParents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a member may have at most two parents, but {} were given",
            self.count
        )
    }
}

impl core::error::Error for TooManyParents {}

/// The parent references of a member: zero, one, or two ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parents(SmallVec<[MemberId; 2]>);

impl Parents {
    /// No parents.
    #[must_use]
    pub fn none() -> Self {
        Self(SmallVec::new())
    }

    /// Builds a parent list, failing if more than two ids are given.
    pub fn try_from_iter<I, T>(ids: I) -> Result<Self, TooManyParents>
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        let ids: SmallVec<[MemberId; 2]> = ids.into_iter().map(Into::into).collect();
        if ids.len() > 2 {
            return Err(TooManyParents { count: ids.len() });
        }
        Ok(Self(ids))
    }

    /// Returns the parent ids in recorded order.
    #[must_use]
    pub fn as_slice(&self) -> &[MemberId] {
        &self.0
    }

    /// Returns the number of recorded parents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no parent is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `id` is one of the parents.
    #[must_use]
    pub fn contains(&self, id: &MemberId) -> bool {
        self.0.contains(id)
    }

    /// Iterates the parent ids.
    pub fn iter(&self) -> core::slice::Iter<'_, MemberId> {
        self.0.iter()
    }

    /// The same parents in sorted order.
    ///
    /// Two members record the same set of parents exactly when their sorted
    /// lists are equal.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut ids = self.0.clone();
        ids.sort_unstable();
        Self(ids)
    }

    /// Display label of this parent set: the sorted ids joined by `|`.
    ///
    /// Ids may themselves contain `|`, so compare [`sorted`](Self::sorted)
    /// lists rather than labels.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut ids: SmallVec<[&str; 2]> = self.0.iter().map(MemberId::as_str).collect();
        ids.sort_unstable();
        let mut out = String::new();
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(id);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Parents {
    type Item = &'a MemberId;
    type IntoIter = core::slice::Iter<'a, MemberId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Parents {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<MemberId>::deserialize(deserializer)?;
        Self::try_from_iter(ids).map_err(serde::de::Error::custom)
    }
}

/// One person in the family tree.
///
/// Records are owned by the member store; the layout engine only reads them.
/// Relations are id references and are not required to be symmetric or to
/// resolve to a record in the same list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyMember {
    /// Unique id.
    pub id: MemberId,
    /// Display name; orders members within a tier.
    pub name: String,
    /// Depth relative to the root generation. `None` is treated as `0`.
    pub generation: Option<i32>,
    /// Recorded gender.
    pub gender: Gender,
    /// Whether the member is alive.
    pub is_alive: bool,
    /// Recorded marital status.
    pub marital_status: MaritalStatus,
    /// Spouse reference.
    pub spouse_id: Option<MemberId>,
    /// Up to two parent references.
    pub parent_ids: Parents,
    /// Child references.
    pub children_ids: Vec<MemberId>,
    /// Sibling references.
    pub sibling_ids: Vec<MemberId>,
}

impl FamilyMember {
    /// Creates a living member with no relations and no recorded generation.
    #[must_use]
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            generation: None,
            gender: Gender::default(),
            is_alive: true,
            marital_status: MaritalStatus::default(),
            spouse_id: None,
            parent_ids: Parents::none(),
            children_ids: Vec::new(),
            sibling_ids: Vec::new(),
        }
    }

    /// Generation used for bucketing: the recorded one, or `0`.
    #[must_use]
    pub fn generation_or_default(&self) -> i32 {
        self.generation.unwrap_or(0)
    }

    /// Sets the generation.
    #[must_use]
    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Sets the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets whether the member is alive.
    #[must_use]
    pub fn with_alive(mut self, is_alive: bool) -> Self {
        self.is_alive = is_alive;
        self
    }

    /// Sets the marital status.
    #[must_use]
    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = status;
        self
    }

    /// Sets the spouse reference and marks the member as married if the
    /// status was not recorded.
    #[must_use]
    pub fn with_spouse(mut self, spouse: impl Into<MemberId>) -> Self {
        self.spouse_id = Some(spouse.into());
        if self.marital_status == MaritalStatus::Unknown {
            self.marital_status = MaritalStatus::Married;
        }
        self
    }

    /// Sets the parent references.
    pub fn with_parents<I, T>(mut self, parents: I) -> Result<Self, TooManyParents>
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.parent_ids = Parents::try_from_iter(parents)?;
        Ok(self)
    }

    /// Sets the child references.
    #[must_use]
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.children_ids = children.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sibling references.
    #[must_use]
    pub fn with_siblings<I, T>(mut self, siblings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.sibling_ids = siblings.into_iter().map(Into::into).collect();
        self
    }
}
