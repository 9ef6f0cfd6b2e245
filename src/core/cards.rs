//! Document cards and the category filter over them.
//!
//! A [`CardDeck`] is built once from the caller's cards and never mutated.
//! Filtering is lazy: [`CardDeck::filtered`] returns a restartable iterator
//! that preserves the original relative order.

use std::collections::HashSet;
use std::fmt;

// ───────────────────────────────────────── card ──────────────

/// Presentation-only accent colour (hex `#rrggbb` in the source data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// One card in the document stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub url: Option<String>,
    pub accent: Option<Rgb>,
    pub icon: Option<char>,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: None,
            url: None,
            accent: None,
            icon: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn accent(mut self, accent: Rgb) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    /// A card links somewhere only when it has a url that isn't the `#`
    /// placeholder.
    pub fn has_destination(&self) -> bool {
        matches!(self.url.as_deref(), Some(url) if !url.is_empty() && url != "#")
    }
}

// ───────────────────────────────────────── filter ────────────

/// The selected category. `All` matches every card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => card.category.as_deref() == Some(name.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── deck ──────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("duplicate card id `{0}`")]
    DuplicateId(String),
}

/// Immutable, ordered card set.
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Take ownership of the caller's cards. Ids must be unique; an empty
    /// deck is valid.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(DeckError::DuplicateId(card.id.clone()));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards matching `filter`, in original order. Cloning the iterator
    /// restarts it.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = &'a Card> + Clone + 'a {
        self.cards.iter().filter(move |c| filter.matches(c))
    }

    /// Number of cards matching `filter`.
    pub fn filtered_count(&self, filter: &CategoryFilter) -> usize {
        self.filtered(filter).count()
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut out = vec![CategoryFilter::All];
        for cat in self.cards.iter().filter_map(|c| c.category.as_deref()) {
            if seen.insert(cat) {
                out.push(CategoryFilter::named(cat));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> CardDeck {
        CardDeck::new(vec![
            Card::new("plan-0", "Plano 2023", "p").category("Plano"),
            Card::new("doc-0", "Protocolo", "d").category("Documento"),
            Card::new("plan-1", "Plano 2024", "p").category("Plano"),
            Card::new("loose", "Sem categoria", "x"),
        ])
        .unwrap()
    }

    #[test]
    fn all_filter_keeps_every_card_in_order() {
        let deck = deck();
        let ids: Vec<_> = deck.filtered(&CategoryFilter::All).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["plan-0", "doc-0", "plan-1", "loose"]);
    }

    #[test]
    fn named_filter_preserves_relative_order() {
        let deck = deck();
        let filter = CategoryFilter::named("Plano");
        let ids: Vec<_> = deck.filtered(&filter).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["plan-0", "plan-1"]);
    }

    #[test]
    fn filtering_is_idempotent_and_restartable() {
        let deck = deck();
        let filter = CategoryFilter::named("Documento");
        let iter = deck.filtered(&filter);
        let first: Vec<_> = iter.clone().map(|c| c.id.clone()).collect();
        let second: Vec<_> = iter.map(|c| c.id.clone()).collect();
        let again: Vec<_> = deck.filtered(&filter).map(|c| c.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        let deck = deck();
        assert_eq!(deck.filtered_count(&CategoryFilter::named("Vídeo")), 0);
    }

    #[test]
    fn categories_start_with_all_and_dedupe() {
        let deck = deck();
        let cats = deck.categories();
        assert_eq!(
            cats,
            vec![
                CategoryFilter::All,
                CategoryFilter::named("Plano"),
                CategoryFilter::named("Documento"),
            ]
        );
        assert_eq!(cats.iter().filter(|c| **c == CategoryFilter::All).count(), 1);
    }

    #[test]
    fn empty_deck_has_only_all_category() {
        let deck = CardDeck::new(Vec::new()).unwrap();
        assert_eq!(deck.categories(), vec![CategoryFilter::All]);
        assert_eq!(deck.filtered_count(&CategoryFilter::All), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CardDeck::new(vec![Card::new("a", "A", ""), Card::new("a", "B", "")]).unwrap_err();
        assert_eq!(err, DeckError::DuplicateId("a".into()));
    }

    #[test]
    fn placeholder_url_is_not_a_destination() {
        assert!(!Card::new("a", "A", "").url("#").has_destination());
        assert!(!Card::new("b", "B", "").has_destination());
        assert!(Card::new("c", "C", "").url("https://example.org").has_destination());
    }

    #[test]
    fn rgb_from_hex_unpacks_channels() {
        assert_eq!(Rgb::from_hex(0xF97316), Rgb(0xF9, 0x73, 0x16));
    }
}
