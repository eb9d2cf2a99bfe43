// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::member::{FamilyMember, MemberId};

/// Borrowed id→record mapping over an ordered member list.
///
/// When the list contains duplicate ids the first record wins, matching the
/// layout engine, which positions only the first occurrence.
#[derive(Clone, Debug)]
pub struct MemberIndex<'a> {
    members: &'a [FamilyMember],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> MemberIndex<'a> {
    /// Indexes `members` by id.
    #[must_use]
    pub fn new(members: &'a [FamilyMember]) -> Self {
        let mut by_id = HashMap::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            by_id.entry(member.id.as_str()).or_insert(i);
        }
        Self { members, by_id }
    }

    /// Looks up a member by id.
    #[must_use]
    pub fn get(&self, id: &MemberId) -> Option<&'a FamilyMember> {
        self.by_id.get(id.as_str()).map(|&i| &self.members[i])
    }

    /// Returns the input position of the record `id` resolves to.
    #[must_use]
    pub fn position_of(&self, id: &MemberId) -> Option<usize> {
        self.by_id.get(id.as_str()).copied()
    }

    /// Returns `true` if `id` resolves to a record.
    #[must_use]
    pub fn contains(&self, id: &MemberId) -> bool {
        self.by_id.contains_key(id.as_str())
    }

    /// Number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no member is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates the first record of every distinct id, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &'a FamilyMember> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(i, m)| self.by_id.get(m.id.as_str()) == Some(i))
            .map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn first_duplicate_wins() {
        let members = vec![
            FamilyMember::new("a", "First"),
            FamilyMember::new("b", "B"),
            FamilyMember::new("a", "Second"),
        ];
        let index = MemberIndex::new(&members);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&"a".into()).unwrap().name, "First");
        assert_eq!(index.position_of(&"b".into()), Some(1));

        let names: Vec<&str> = index.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["First", "B"]);
    }

    #[test]
    fn unknown_id_is_none() {
        let members = vec![FamilyMember::new("a", "A")];
        let index = MemberIndex::new(&members);
        assert!(index.get(&"zzz".into()).is_none());
        assert!(!index.contains(&"zzz".into()));
        assert!(!index.is_empty());
    }
}
