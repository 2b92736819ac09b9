//! Permutation variants generated for each indexed word.
//!
//! Indexing a word under re-ordered spellings lets lookups tolerate
//! transposed characters. Three modes are supported:
//!
//! - **Order fixed**: the word itself, nothing else.
//! - **Exhaustive** (depth 0): all `L!` orderings of the word's characters.
//! - **Windowed** (depth `N > 0`): pick `N` positions, permute the characters
//!   occupying them, leave the other positions alone. `C(L, N) * N!` results.
//! - **Disabled** (negative depth): no keys at all.
//!
//! Results are returned in enumeration order and may repeat; repeated keys
//! collapse when inserted into the trie.

/// How a word is expanded into index keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantMode {
    OrderFixed,
    Exhaustive,
    Windowed(usize),
    Disabled,
}

impl VariantMode {
    pub fn from_settings(order_fixed: bool, permutation_depth: i32) -> Self {
        if order_fixed {
            return Self::OrderFixed;
        }
        match usize::try_from(permutation_depth) {
            Ok(0) => Self::Exhaustive,
            Ok(depth) => Self::Windowed(depth),
            Err(_) => Self::Disabled,
        }
    }
}

/// Expands cleaned words into the keys to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantGenerator {
    mode: VariantMode,
}

impl VariantGenerator {
    pub fn new(mode: VariantMode) -> Self {
        Self { mode }
    }

    pub fn from_settings(order_fixed: bool, permutation_depth: i32) -> Self {
        Self::new(VariantMode::from_settings(order_fixed, permutation_depth))
    }

    #[inline]
    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Generates the keys for `word`, which must not contain spaces.
    ///
    /// In windowed mode a word shorter than the window yields no keys.
    pub fn generate(&self, word: &str) -> Vec<String> {
        match self.mode {
            VariantMode::OrderFixed => vec![word.to_owned()],
            VariantMode::Exhaustive => all_permutations(word),
            VariantMode::Windowed(depth) => windowed_permutations(word, depth),
            VariantMode::Disabled => Vec::new(),
        }
    }
}

/// Every ordering of the characters of `word`, fixing each character at the
/// front in turn and recursing on the rest.
pub fn all_permutations(word: &str) -> Vec<String> {
    let mut remaining: Vec<char> = word.chars().collect();
    let mut prefix = String::with_capacity(word.len());
    let mut out = Vec::new();
    permute_remaining(&mut remaining, &mut prefix, &mut out);
    out
}

fn permute_remaining(remaining: &mut Vec<char>, prefix: &mut String, out: &mut Vec<String>) {
    if remaining.is_empty() {
        out.push(prefix.clone());
        return;
    }

    for i in 0..remaining.len() {
        let ch = remaining.remove(i);
        prefix.push(ch);
        permute_remaining(remaining, prefix, out);
        prefix.pop();
        remaining.insert(i, ch);
    }
}

/// Every spelling obtained by permuting the characters at `depth` of the
/// word's positions while the other positions keep their characters.
///
/// Positions are consumed depth-first; once `depth` characters are collected
/// they are written back into the consumed positions from left to right.
pub fn windowed_permutations(word: &str, depth: usize) -> Vec<String> {
    let mut slots: Vec<Option<char>> = word.chars().map(Some).collect();
    let mut picked = Vec::with_capacity(depth);
    let mut out = Vec::new();
    if depth > 0 && depth <= slots.len() {
        permute_window(&mut slots, &mut picked, depth, &mut out);
    }
    out
}

fn permute_window(
    slots: &mut [Option<char>],
    picked: &mut Vec<char>,
    depth: usize,
    out: &mut Vec<String>,
) {
    if picked.len() == depth {
        // Exactly `depth` slots are empty here, one per picked character.
        let mut refill = picked.iter().copied();
        out.push(
            slots
                .iter()
                .filter_map(|slot| slot.or_else(|| refill.next()))
                .collect(),
        );
        return;
    }

    for i in 0..slots.len() {
        let Some(ch) = slots[i].take() else {
            continue;
        };
        picked.push(ch);
        permute_window(slots, picked, depth, out);
        picked.pop();
        slots[i] = Some(ch);
    }
}
