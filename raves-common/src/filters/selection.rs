use crate::filters::query::AppliedSelection;
use crate::genre::GenreToken;

/// In-progress genre choices while the filter dialog is open.
///
/// Membership has set semantics (no duplicates); insertion order is kept so
/// the committed `with_genres` value lists genres in the order they were
/// picked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkingSelection {
    tokens: Vec<GenreToken>,
}

impl WorkingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the applied filter, collapsing duplicate tokens.
    pub fn from_applied(applied: &AppliedSelection) -> Self {
        applied.tokens().iter().copied().collect()
    }

    pub fn contains(&self, genre_id: i64) -> bool {
        self.tokens.contains(&GenreToken::Id(genre_id))
    }

    /// Remove `genre_id` if selected, otherwise add it. Returns whether the
    /// genre is selected afterwards.
    pub fn toggle(&mut self, genre_id: i64) -> bool {
        let token = GenreToken::Id(genre_id);
        if let Some(pos) = self.tokens.iter().position(|t| *t == token) {
            self.tokens.remove(pos);
            false
        } else {
            self.tokens.push(token);
            true
        }
    }

    /// Empty the selection. Returns false (and does nothing) when it was
    /// already empty.
    pub fn clear(&mut self) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        self.tokens.clear();
        true
    }

    pub fn tokens(&self) -> &[GenreToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Comma-joined value for the `with_genres` parameter.
    pub fn to_param_value(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<GenreToken> for WorkingSelection {
    fn from_iter<I: IntoIterator<Item = GenreToken>>(iter: I) -> Self {
        let mut tokens: Vec<GenreToken> = Vec::new();
        for token in iter {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        Self { tokens }
    }
}
