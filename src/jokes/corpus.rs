//! Joke Corpus
//!
//! The corpus is the capability provider backing every tool and resource in
//! the catalog: a finite, indexable collection of jokes with a
//! random-selection operation. It is populated once at startup and treated
//! as immutable for the process lifetime.

use rand::Rng;
use thiserror::Error;

/// Error raised when a joke id falls outside the corpus bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("joke id {id} is out of range (valid ids 0-{max})")]
    OutOfRange { id: i64, max: usize },
}

/// Built-in joke collection used when no custom corpus is supplied.
const BUILTIN_JOKES: &[&str] = &[
    "I'm afraid for the calendar. Its days are numbered.",
    "Why do fathers take an extra pair of socks when they go golfing? In case they get a hole in one!",
    "I don't trust stairs. They're always up to something.",
    "What do you call a fish wearing a bowtie? Sofishticated.",
    "How do you follow Will Smith in the snow? You follow the fresh prints.",
    "What do sprinters eat before a race? Nothing, they fast!",
    "What do you call a factory that makes okay products? A satisfactory.",
    "Dear Math, grow up and solve your own problems.",
    "I used to hate facial hair, but then it grew on me.",
    "Why did the scarecrow win an award? Because he was outstanding in his field.",
    "I only know 25 letters of the alphabet. I don't know y.",
    "What did the ocean say to the beach? Nothing, it just waved.",
];

/// Finite, read-only collection of jokes.
pub struct JokeCorpus {
    jokes: Vec<String>,
}

impl JokeCorpus {
    /// Creates a corpus from an explicit list of jokes.
    pub fn new(jokes: Vec<String>) -> Self {
        Self { jokes }
    }

    /// Creates the corpus from the built-in joke collection.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_JOKES.iter().map(|j| j.to_string()).collect())
    }

    /// Number of jokes in the corpus.
    pub fn count(&self) -> usize {
        self.jokes.len()
    }

    /// Returns the joke at `id`, or `CorpusError::OutOfRange` for any id
    /// outside `0..count()`. Never reads past the collection bounds.
    pub fn get(&self, id: i64) -> Result<&str, CorpusError> {
        let max = self.jokes.len().saturating_sub(1);
        if id < 0 || id as usize >= self.jokes.len() {
            return Err(CorpusError::OutOfRange { id, max });
        }
        Ok(&self.jokes[id as usize])
    }

    /// Returns a uniformly random joke from the corpus.
    ///
    /// # Panics
    ///
    /// Panics if the corpus is empty.
    pub fn random(&self) -> &str {
        let id = rand::thread_rng().gen_range(0..self.jokes.len());
        &self.jokes[id]
    }
}

impl Default for JokeCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}
