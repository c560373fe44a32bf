//! Riddle set selection without replacement.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use rk_core::{Catalog, RiddleId, RiddleSet};

/// Pick the first riddle set of a session, uniformly over the whole catalog.
///
/// Returns `None` only for an empty catalog.
pub fn pick_initial<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    rng: &mut R,
) -> Option<&'c RiddleSet> {
    if catalog.is_empty() {
        return None;
    }
    catalog.by_index(rng.random_range(0..catalog.len()))
}

/// Pick a riddle set not yet presented this session, uniformly among the rest.
///
/// Returns `None` once every set in the catalog has been used.
pub fn pick_next<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    used: &BTreeSet<RiddleId>,
    rng: &mut R,
) -> Option<&'c RiddleSet> {
    let remaining: Vec<&RiddleSet> = catalog.iter().filter(|s| !used.contains(&s.id)).collect();
    remaining.choose(rng).copied()
}
