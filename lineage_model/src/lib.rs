// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Model: family member records and id-keyed relation lookup.
//!
//! This crate holds the read-only input of the Lineage layout engine: a flat,
//! ordered list of [`FamilyMember`] records whose relations (spouse, parents,
//! children, siblings) are expressed as [`MemberId`] references rather than
//! object pointers. It provides:
//! - [`FamilyMember`] and its small value types ([`Gender`], [`MaritalStatus`]).
//! - [`Parents`], a list of at most two parent ids; constructing one with more
//!   fails with [`TooManyParents`].
//! - [`MemberIndex`], the id→record mapping used by downstream crates to resolve
//!   references in O(1).
//! - [`check_relations`], an optional consistency pass that reports dangling
//!   references and asymmetric links without repairing them.
//!
//! Layout and connection crates never call [`check_relations`] themselves; a
//! dangling reference there is skipped silently. Hosts that want to surface
//! data problems run the check at ingestion.
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_model::{FamilyMember, MemberIndex, check_relations};
//!
//! let members = vec![
//!     FamilyMember::new("ada", "Ada").with_generation(0).with_spouse("bob"),
//!     FamilyMember::new("bob", "Bob").with_generation(0).with_spouse("ada"),
//!     FamilyMember::new("cy", "Cy")
//!         .with_generation(1)
//!         .with_parents(["ada", "bob"])
//!         .unwrap(),
//! ];
//!
//! let index = MemberIndex::new(&members);
//! assert_eq!(index.get(&"cy".into()).map(|m| m.name.as_str()), Some("Cy"));
//!
//! // `cy` names parents that do not list it as a child.
//! let issues = check_relations(&members);
//! assert_eq!(issues.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod member;
mod relations;

pub use index::MemberIndex;
pub use member::{FamilyMember, Gender, MaritalStatus, MemberId, Parents, TooManyParents};
pub use relations::{RelationIssue, RelationKind, check_relations};
