use crate::models::SpellItem;
use rand::Rng;
use rand::seq::SliceRandom;

const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("apple", "apple"),
    ("bear", "bear"),
    ("bicycle", "bicycle"),
    ("butterfly", "butterfly"),
    ("cat", "cat"),
    ("clock", "clock"),
    ("dog", "dog"),
    ("elephant", "elephant"),
    ("fish", "fish"),
    ("flower", "flower"),
    ("frog", "frog"),
    ("house", "house"),
    ("lemon", "lemon"),
    ("moon", "moon"),
    ("pencil", "pencil"),
    ("rabbit", "rabbit"),
    ("rainbow", "rainbow"),
    ("snail", "snail"),
    ("tree", "tree"),
    ("umbrella", "umbrella"),
];

/// Fixed, non-empty collection of quiz items.
#[derive(Debug, Clone)]
pub struct WordBank {
    items: Vec<SpellItem>,
}

impl WordBank {
    /// Returns `None` for an empty list so that `random_item` never has
    /// to deal with a missing item.
    pub fn new(items: Vec<SpellItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_WORDS
                .iter()
                .map(|(word, image)| SpellItem::new(word, image))
                .collect(),
        }
    }

    pub fn items(&self) -> &[SpellItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Uniform pick with replacement; the previous item may come up again.
    pub fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> &SpellItem {
        self.items.choose(rng).unwrap_or(&self.items[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_bank_is_rejected() {
        assert!(WordBank::new(Vec::new()).is_none());
    }

    #[test]
    fn test_builtin_words_are_lowercase() {
        let bank = WordBank::builtin();
        assert!(!bank.is_empty());
        for item in bank.items() {
            assert_eq!(item.word(), item.word().to_lowercase());
            assert!(!item.image().is_empty());
        }
    }

    #[test]
    fn test_random_item_comes_from_bank() {
        let bank = WordBank::new(vec![SpellItem::new("cat", "cat"), SpellItem::new("dog", "dog")])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let item = bank.random_item(&mut rng);
            assert!(bank.items().contains(item));
        }
    }

    #[test]
    fn test_random_item_reaches_every_word() {
        let bank = WordBank::new(vec![
            SpellItem::new("cat", "cat"),
            SpellItem::new("dog", "dog"),
            SpellItem::new("fish", "fish"),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let item = bank.random_item(&mut rng);
            let idx = bank.items().iter().position(|i| i == item).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_single_item_bank_repeats() {
        let bank = WordBank::new(vec![SpellItem::new("Moon", "moon")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(bank.random_item(&mut rng).word(), "moon");
        assert_eq!(bank.random_item(&mut rng).word(), "moon");
    }
}
