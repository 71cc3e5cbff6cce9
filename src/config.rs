//! Generation policy.

/// Default recursion budget for nested messages.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Default length of generated strings and bytes.
pub const DEFAULT_STRING_LEN: usize = 10;

/// Default characters used for generated strings and bytes.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Policy knobs owned by a single generator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Levels of nested messages generated below the root before the
    /// default (empty) instance is substituted.
    pub(crate) max_depth: usize,

    /// Length, in characters, of every generated string and bytes value.
    pub(crate) string_len: usize,

    /// Characters that strings and bytes are drawn from.
    pub(crate) alphabet: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            string_len: DEFAULT_STRING_LEN,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl Config {
    /// Create a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion budget for nested messages.
    pub fn max_depth(&mut self, depth: usize) -> &mut Self {
        self.max_depth = depth;
        self
    }

    /// Set the length of generated strings and bytes.
    pub fn string_len(&mut self, len: usize) -> &mut Self {
        self.string_len = len;
        self
    }

    /// Set the characters strings and bytes are drawn from.
    ///
    /// An empty alphabet produces empty strings and bytes.
    pub fn alphabet(&mut self, chars: impl IntoIterator<Item = char>) -> &mut Self {
        self.alphabet = chars.into_iter().collect();
        self
    }

    /// Nesting levels generated below the root before messages are left
    /// at their default instance.
    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of characters in each generated string or bytes value.
    pub fn get_string_len(&self) -> usize {
        self.string_len
    }

    /// Characters strings and bytes are drawn from.
    pub fn get_alphabet(&self) -> &[char] {
        &self.alphabet
    }
}
