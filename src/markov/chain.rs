//! Transition table of a first-order Markov chain.

use std::collections::BTreeMap;

/// Maps each unit to every unit seen right after it.
///
/// Followers keep duplicates, so a follower seen twice is twice as likely
/// to be picked. Units ending with `.` close a sentence and never get an
/// entry of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    links: BTreeMap<String, Vec<String>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from independent token sequences.
    pub fn from_sequences(sequences: &[Vec<String>]) -> Self {
        let mut chain = Chain::new();
        for sequence in sequences {
            chain.feed(sequence);
        }
        log::debug!(
            "Built chain with {} keys and {} transitions",
            chain.len(),
            chain.transitions()
        );
        chain
    }

    /// Record every consecutive pair of a sequence.
    pub fn feed(&mut self, tokens: &[String]) {
        for pair in tokens.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.ends_with('.') {
                continue;
            }
            self.links
                .entry(current.clone())
                .or_default()
                .push(next.clone());
        }
    }

    /// Set the followers of a key, replacing any previous ones.
    pub fn insert(&mut self, key: String, followers: Vec<String>) {
        self.links.insert(key, followers);
    }

    pub fn followers(&self, token: &str) -> Option<&[String]> {
        self.links.get(token).map(Vec::as_slice)
    }

    /// Keys that may open a quote: those starting with an uppercase character.
    pub fn starts(&self) -> Vec<&str> {
        self.links
            .keys()
            .filter(|key| key.chars().next().map_or(false, char::is_uppercase))
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.links.iter()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Total number of recorded transitions
    pub fn transitions(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_feed_records_pairs() {
        let mut chain = Chain::new();
        chain.feed(&tokens("The cat saw the cat"));

        assert_eq!(chain.followers("The"), Some(&["cat".to_string()][..]));
        assert_eq!(
            chain.followers("cat"),
            Some(&["saw".to_string()][..])
        );
        assert_eq!(chain.followers("the"), Some(&["cat".to_string()][..]));
        assert_eq!(chain.transitions(), 4);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let chain = Chain::from_sequences(&[tokens("I am"), tokens("I am"), tokens("I was")]);
        assert_eq!(
            chain.followers("I").map(<[String]>::len),
            Some(3)
        );
    }

    #[test]
    fn test_sentence_end_has_no_entry() {
        let chain = Chain::from_sequences(&[tokens("Stop. Go now")]);
        assert_eq!(chain.followers("Stop."), None);
        assert_eq!(chain.followers("Go"), Some(&["now".to_string()][..]));
    }

    #[test]
    fn test_starts_are_uppercase_keys() {
        let chain = Chain::from_sequences(&[tokens("Hello world and Bye now")]);
        assert_eq!(chain.starts(), vec!["Bye", "Hello"]);
    }

    #[test]
    fn test_single_token_sequence_adds_nothing() {
        let chain = Chain::from_sequences(&[tokens("Alone")]);
        assert!(chain.is_empty());
    }

    proptest! {
        #[test]
        fn prop_transitions_match_pairs(words in proptest::collection::vec("[A-Za-z]{1,6}\\.?", 0..40)) {
            let mut chain = Chain::new();
            chain.feed(&words);

            let expected = words
                .windows(2)
                .filter(|pair| !pair[0].ends_with('.'))
                .count();
            prop_assert_eq!(chain.transitions(), expected);
            for (key, _) in chain.iter() {
                prop_assert!(!key.ends_with('.'));
            }
        }
    }
}
