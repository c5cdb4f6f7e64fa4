//! Shortest word ladders by breadth-first search over an implicit graph.
//!
//! Two words are adjacent when they have the same length and differ in
//! exactly one character. Instead of comparing every pair, each dictionary
//! word is filed under one *bucket* per position: the word with that
//! position blanked out. Words sharing a bucket are neighbours, so the graph
//! is never materialised.
//!
//! # Example
//!
//! ```
//! use fast_seq::word_ladder::word_ladder;
//!
//! let words = ["hot", "dot", "dog", "lot", "log", "cog"];
//! let ladder = word_ladder("hit", "cog", &words).unwrap();
//! assert_eq!(ladder.steps(), 5);
//! assert_eq!(ladder.path(), ["hit", "hot", "dot", "dog", "cog"]);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

/// A transformation sequence from the begin word to the end word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    path: Vec<String>,
}

impl Ladder {
    /// Number of words in the ladder, including both ends.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// The words of the ladder in order.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Consumes the ladder, returning its words.
    #[must_use]
    pub fn into_path(self) -> Vec<String> {
        self.path
    }
}

/// Bucket key: blanked position and the word with that character removed.
type Bucket = (usize, String);

fn buckets_of(word: &str) -> impl Iterator<Item = Bucket> + '_ {
    word.char_indices().enumerate().map(move |(pos, (byte, ch))| {
        let mut key = String::with_capacity(word.len());
        key.push_str(&word[..byte]);
        key.push_str(&word[byte + ch.len_utf8()..]);
        (pos, key)
    })
}

/// Finds a shortest ladder from `begin` to `end` using words from `words`.
///
/// `begin` does not need to be in `words`; every later word does. Returns
/// `None` if `end` is not in `words` or no ladder exists.
///
/// Among several shortest ladders, the one found first is returned: neighbours
/// are explored by blanked position, then in dictionary order. The result is
/// therefore fully determined by the input.
///
/// # Complexity
///
/// O(n × l²) for n words of length l: each word has l buckets, and building a
/// bucket key costs O(l).
#[must_use]
pub fn word_ladder<'a, S: AsRef<str>>(begin: &'a str, end: &str, words: &'a [S]) -> Option<Ladder> {
    let mut seen = HashSet::new();
    let dictionary: Vec<&'a str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| seen.insert(*word))
        .collect();

    debug!(
        target: "fast_seq::ladder",
        begin,
        end,
        dictionary = dictionary.len(),
        "searching word ladder"
    );

    if !seen.contains(end) {
        return None;
    }
    if begin == end {
        return Some(Ladder {
            path: vec![begin.to_owned()],
        });
    }

    let mut buckets: HashMap<Bucket, Vec<&'a str>> = HashMap::new();
    for &word in &dictionary {
        for key in buckets_of(word) {
            buckets.entry(key).or_default().push(word);
        }
    }

    let mut parents: HashMap<&'a str, &'a str> = HashMap::new();
    let mut visited: HashSet<&'a str> = HashSet::from([begin]);
    let mut queue: VecDeque<&'a str> = VecDeque::from([begin]);

    while let Some(word) = queue.pop_front() {
        for key in buckets_of(word) {
            let Some(neighbours) = buckets.get(&key) else {
                continue;
            };

            for &next in neighbours {
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, word);

                if next == end {
                    let ladder = reconstruct(&parents, begin, next);
                    debug!(target: "fast_seq::ladder", steps = ladder.steps(), "ladder found");
                    return Some(ladder);
                }
                queue.push_back(next);
            }
        }
    }

    debug!(target: "fast_seq::ladder", explored = visited.len(), "no ladder");
    None
}

fn reconstruct(parents: &HashMap<&str, &str>, begin: &str, end: &str) -> Ladder {
    let mut path = vec![end.to_owned()];
    let mut current = end;
    while current != begin {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.to_owned());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    Ladder { path }
}
