//! Static sample dataset
//!
//! Display-only data for the counter playground. Nothing here persists or
//! mutates; the derived summary is computed once and memoized.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creature {
    pub id: u32,
    pub name: &'static str,
    pub can_evolve: bool,
}

const CREATURES: &[Creature] = &[
    Creature { id: 1, name: "Bulbasaur", can_evolve: true },
    Creature { id: 2, name: "Ivysaur", can_evolve: true },
    Creature { id: 3, name: "Venusaur", can_evolve: false },
    Creature { id: 4, name: "Charmander", can_evolve: true },
    Creature { id: 5, name: "Charmeleon", can_evolve: true },
    Creature { id: 6, name: "Charizard", can_evolve: false },
    Creature { id: 25, name: "Pikachu", can_evolve: true },
    Creature { id: 26, name: "Raichu", can_evolve: false },
];

pub fn all() -> &'static [Creature] {
    CREATURES
}

/// How many entries can still evolve. The dataset is immutable, so this is
/// computed once per process.
pub fn evolvable_count() -> usize {
    static COUNT: OnceLock<usize> = OnceLock::new();
    *COUNT.get_or_init(|| CREATURES.iter().filter(|c| c.can_evolve).count())
}
