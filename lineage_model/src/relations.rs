// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relation consistency report.
//!
//! The layout engine accepts whatever relations it is given. This pass lets a
//! host find the records that will render with missing or one-sided
//! connectors. It only reports; it never guesses which side of an asymmetric
//! link is correct.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::index::MemberIndex;
use crate::member::{FamilyMember, MemberId};

/// What is wrong with a relation reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Another record already uses this id; only the first is laid out.
    DuplicateId,
    /// The member references itself.
    SelfReference,
    /// `spouse_id` does not resolve to a record.
    DanglingSpouse,
    /// A `parent_ids` entry does not resolve to a record.
    DanglingParent,
    /// A `children_ids` entry does not resolve to a record.
    DanglingChild,
    /// A `sibling_ids` entry does not resolve to a record.
    DanglingSibling,
    /// The spouse does not name this member as its spouse.
    AsymmetricSpouse,
    /// The parent does not list this member among its children.
    ParentMissingChild,
    /// The child does not list this member among its parents.
    ChildMissingParent,
}

/// One reported problem: `member`'s reference to `related`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelationIssue {
    /// The member holding the reference.
    pub member: MemberId,
    /// The referenced id.
    pub related: MemberId,
    /// The problem.
    pub kind: RelationKind,
}

/// Reports dangling, self-referencing and asymmetric relations.
///
/// Issues are listed in input order; within a member they follow field order
/// (spouse, parents, children, siblings).
#[must_use]
pub fn check_relations(members: &[FamilyMember]) -> Vec<RelationIssue> {
    let index = MemberIndex::new(members);
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(members.len());

    for member in members {
        if !seen.insert(member.id.as_str()) {
            issues.push(issue(member, &member.id, RelationKind::DuplicateId));
            continue;
        }

        if let Some(spouse_id) = &member.spouse_id {
            match index.get(spouse_id) {
                _ if *spouse_id == member.id => {
                    issues.push(issue(member, spouse_id, RelationKind::SelfReference));
                }
                None => issues.push(issue(member, spouse_id, RelationKind::DanglingSpouse)),
                Some(spouse) if spouse.spouse_id.as_ref() != Some(&member.id) => {
                    issues.push(issue(member, spouse_id, RelationKind::AsymmetricSpouse));
                }
                Some(_) => {}
            }
        }

        for parent_id in &member.parent_ids {
            match index.get(parent_id) {
                _ if *parent_id == member.id => {
                    issues.push(issue(member, parent_id, RelationKind::SelfReference));
                }
                None => issues.push(issue(member, parent_id, RelationKind::DanglingParent)),
                Some(parent) if !parent.children_ids.contains(&member.id) => {
                    issues.push(issue(member, parent_id, RelationKind::ParentMissingChild));
                }
                Some(_) => {}
            }
        }

        for child_id in &member.children_ids {
            match index.get(child_id) {
                _ if *child_id == member.id => {
                    issues.push(issue(member, child_id, RelationKind::SelfReference));
                }
                None => issues.push(issue(member, child_id, RelationKind::DanglingChild)),
                Some(child) if !child.parent_ids.contains(&member.id) => {
                    issues.push(issue(member, child_id, RelationKind::ChildMissingParent));
                }
                Some(_) => {}
            }
        }

        for sibling_id in &member.sibling_ids {
            if *sibling_id == member.id {
                issues.push(issue(member, sibling_id, RelationKind::SelfReference));
            } else if !index.contains(sibling_id) {
                issues.push(issue(member, sibling_id, RelationKind::DanglingSibling));
            }
        }
    }

    issues
}

fn issue(member: &FamilyMember, related: &MemberId, kind: RelationKind) -> RelationIssue {
    RelationIssue {
        member: member.id.clone(),
        related: related.clone(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn kinds(issues: &[RelationIssue]) -> Vec<RelationKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn consistent_family_has_no_issues() {
        let members = vec![
            FamilyMember::new("p1", "P1")
                .with_spouse("p2")
                .with_children(["c"]),
            FamilyMember::new("p2", "P2")
                .with_spouse("p1")
                .with_children(["c"]),
            FamilyMember::new("c", "C").with_parents(["p1", "p2"]).unwrap(),
        ];
        assert!(check_relations(&members).is_empty());
    }

    #[test]
    fn asymmetric_spouse_is_reported_from_the_claiming_side() {
        let members = vec![
            FamilyMember::new("a", "A").with_spouse("b"),
            FamilyMember::new("b", "B"),
        ];
        let issues = check_relations(&members);
        assert_eq!(
            issues,
            vec![RelationIssue {
                member: "a".into(),
                related: "b".into(),
                kind: RelationKind::AsymmetricSpouse,
            }]
        );
    }

    #[test]
    fn dangling_references_are_reported() {
        let members = vec![
            FamilyMember::new("a", "A")
                .with_spouse("ghost")
                .with_parents(["nobody"])
                .unwrap()
                .with_children(["missing"])
                .with_siblings(["void"]),
        ];
        assert_eq!(
            kinds(&check_relations(&members)),
            vec![
                RelationKind::DanglingSpouse,
                RelationKind::DanglingParent,
                RelationKind::DanglingChild,
                RelationKind::DanglingSibling,
            ]
        );
    }

    #[test]
    fn one_sided_parent_links_are_reported_both_ways() {
        let members = vec![
            FamilyMember::new("p", "P").with_children(["x"]),
            FamilyMember::new("x", "X"),
            FamilyMember::new("y", "Y").with_parents(["p"]).unwrap(),
        ];
        assert_eq!(
            kinds(&check_relations(&members)),
            vec![
                RelationKind::ChildMissingParent,
                RelationKind::ParentMissingChild,
            ]
        );
    }

    #[test]
    fn duplicates_and_self_references() {
        let members = vec![
            FamilyMember::new("a", "A").with_spouse("a"),
            FamilyMember::new("a", "A again"),
        ];
        assert_eq!(
            kinds(&check_relations(&members)),
            vec![RelationKind::SelfReference, RelationKind::DuplicateId]
        );
    }
}
