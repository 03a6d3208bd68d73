//! Grouping of tokens that visually cover one another.
//!
//! Two tokens stack when one footprint fully contains the other. Partial
//! overlap does not count. Containment is merged transitively in a single
//! left-to-right pass over the token layer, so a pile of nested tokens ends
//! up as one group.
//!
//! Each group is keyed by a representative token: whichever token of the
//! cluster was processed last. That is an artifact of the pass order, not
//! "the topmost token", so callers should read groups through
//! [`StackMap::groups`] or [`StackMap::group_of`] rather than rely on keys.

#[cfg(test)]
#[path = "stacks_test.rs"]
mod stacks_test;

use std::collections::{HashMap, HashSet};

use crate::positions::TokenPosition;
use crate::zone::TokenId;

/// Tokens of one stack, bottom to top in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackGroup {
    members: Vec<TokenId>,
}

impl StackGroup {
    #[must_use]
    pub fn members(&self) -> &[TokenId] {
        &self.members
    }

    #[must_use]
    pub fn contains(&self, id: &TokenId) -> bool {
        self.members.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Topmost member in draw order.
    #[must_use]
    pub fn top(&self) -> Option<TokenId> {
        self.members.last().copied()
    }
}

/// Representative-keyed stack groups for one cycle. Groups are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackMap {
    entries: Vec<(TokenId, StackGroup)>,
    member_of: HashMap<TokenId, usize>,
}

impl StackMap {
    /// Group keyed by `key`.
    #[must_use]
    pub fn get(&self, key: &TokenId) -> Option<&StackGroup> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, g)| g)
    }

    /// Group containing `id`, whether or not `id` is its key.
    #[must_use]
    pub fn group_of(&self, id: &TokenId) -> Option<&StackGroup> {
        self.member_of.get(id).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn is_stacked(&self, id: &TokenId) -> bool {
        self.member_of.contains_key(id)
    }

    /// `(key, group)` pairs ordered by the key's draw position.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenId, &StackGroup)> {
        self.entries.iter().map(|(k, g)| (k, g))
    }

    /// Groups without their keys.
    pub fn groups(&self) -> impl Iterator<Item = &StackGroup> {
        self.entries.iter().map(|(_, g)| g)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group the token-layer positions into stacks.
///
/// `layer` must be in draw order. For each token, every other token whose
/// footprint it contains joins its group, and any group those tokens (or the
/// token itself) already belonged to is absorbed and dropped. A non-empty
/// group is then stored under the current token.
#[must_use]
pub fn build_stacks(layer: &[TokenPosition]) -> StackMap {
    let mut groups: HashMap<TokenId, HashSet<TokenId>> = HashMap::new();
    // member -> key of the group it currently sits in
    let mut owner: HashMap<TokenId, TokenId> = HashMap::new();

    for t in layer {
        let mut group: HashSet<TokenId> = HashSet::new();
        for o in layer {
            if o.token == t.token || !t.footprint.contains_rect(&o.footprint) {
                continue;
            }
            group.insert(o.token);
            absorb(&mut group, &mut groups, owner.get(&o.token).copied());
        }
        if group.is_empty() {
            continue;
        }
        absorb(&mut group, &mut groups, owner.get(&t.token).copied());
        group.insert(t.token);
        for member in &group {
            owner.insert(*member, t.token);
        }
        groups.insert(t.token, group);
    }

    finish(layer, groups)
}

fn absorb(group: &mut HashSet<TokenId>, groups: &mut HashMap<TokenId, HashSet<TokenId>>, key: Option<TokenId>) {
    if let Some(previous) = key.and_then(|k| groups.remove(&k)) {
        group.extend(previous);
    }
}

/// Order keys and members by draw position and build the membership index.
fn finish(layer: &[TokenPosition], groups: HashMap<TokenId, HashSet<TokenId>>) -> StackMap {
    let order: HashMap<TokenId, usize> = layer.iter().enumerate().map(|(i, p)| (p.token, i)).collect();
    let rank = |id: &TokenId| order.get(id).copied().unwrap_or(usize::MAX);

    let mut entries: Vec<(TokenId, StackGroup)> = groups
        .into_iter()
        .map(|(key, members)| {
            let mut members: Vec<TokenId> = members.into_iter().collect();
            members.sort_by_key(rank);
            (key, StackGroup { members })
        })
        .collect();
    entries.sort_by_key(|(key, _)| rank(key));

    let mut member_of = HashMap::new();
    for (i, (_, group)) in entries.iter().enumerate() {
        for id in &group.members {
            member_of.insert(*id, i);
        }
    }
    StackMap { entries, member_of }
}
