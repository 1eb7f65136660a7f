use crate::evaluator::fold_word;
use crate::results::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the words that may be chosen as the objective of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped. All words must have the same length.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self> {
        let words = word_reader
            .lines()
            .collect::<std::result::Result<Vec<String>, _>>()?;
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case, and empty words are skipped. All words
    /// must have the same length.
    pub fn from_iterator<S, I>(words: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut word_length = 0;
        let all_words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                Some(fold_word(word))
            })
            .map(|word| {
                let length = word.chars().count();
                if word_length == 0 {
                    word_length = length;
                } else if word_length != length {
                    return Err(WordleError::WordLength(word_length));
                }
                Ok(Arc::from(word.as_str()))
            })
            .collect::<Result<Vec<Arc<str>>>>()?;
        log::debug!(
            "Loaded {} words with {} letters each",
            all_words.len(),
            word_length
        );
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` if the bank has no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank, or zero if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns `true` if the given word is in the bank, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = fold_word(word);
        self.all_words.iter().any(|other| **other == *word)
    }

    /// Picks a word uniformly at random, or `None` if the bank is empty.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<str>> {
        self.all_words.choose(rng).map(Arc::clone)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_bank_has_no_length() -> Result<()> {
        let bank = WordBank::from_iterator(Vec::<String>::new())?;

        assert!(bank.is_empty());
        assert_eq!(bank.word_length(), 0);
        assert_eq!(bank.choose_random(&mut StdRng::seed_from_u64(1)), None);
        Ok(())
    }

    #[test]
    fn choose_random_picks_from_bank() -> Result<()> {
        let bank = WordBank::from_iterator(["crane", "slate", "pious"])?;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = bank.choose_random(&mut rng);
            assert!(word.is_some_and(|word| bank.contains(&word)));
        }
        Ok(())
    }

    #[test]
    fn choose_random_is_reproducible_with_seed() -> Result<()> {
        let bank = WordBank::from_iterator(["crane", "slate", "pious", "ghost", "lemon"])?;

        let first = bank.choose_random(&mut StdRng::seed_from_u64(42));
        let second = bank.choose_random(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn contains_ignores_case() -> Result<()> {
        let bank = WordBank::from_iterator(["Crane"])?;

        assert!(bank.contains("CRANE"));
        assert!(bank.contains("crane"));
        assert!(!bank.contains("slate"));
        Ok(())
    }
}
