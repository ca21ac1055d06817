//! A parser for collecting `--name=value` pairs from the command line.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

use crate::lexer::{PREFIX, Pairs};
use crate::utils;

/// Defines the possible errors that may occur while tokenizing the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The argument vector is empty, not even the program name is present.
    #[error("missing program name")]
    MissingProgramName,

    /// The first argument does not start with `--` or has nothing after it.
    #[error("first argument is not a long option")]
    MissingPrefix,

    /// A `--` is not followed by an option name.
    #[error("stray `--`")]
    StrayDashes,

    /// A `=` is not followed by a value.
    #[error("stray `=`")]
    StrayEquals,

    /// The option name is empty or pure whitespace.
    #[error("empty option name")]
    EmptyName,

    /// The option value is empty or pure whitespace.
    #[error("empty option value")]
    EmptyValue,
}

/// Defines the result of command line tokenizing. This is a simple key-value store that offers
/// a look-up over raw option values, keyed by normalized option name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    args: BTreeMap<String, String>,
}

impl ParsedArgs {
    /// Parse the process arguments. The first argument is the program name and is skipped.
    pub fn parse<S>(argv: &[S]) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let Some((_, args)) = argv.split_first() else {
            return Err(Error::MissingProgramName);
        };

        if args.is_empty() {
            return Ok(Self::default());
        }

        Self::from_line(&utils::join(args, " "))
    }

    /// Parse an already joined command line, program name excluded. The line must start with
    /// a long option, leading whitespace included.
    pub fn from_line(line: &str) -> Result<Self, Error> {
        let first = line.split(' ').next().unwrap_or_default();

        if first.len() <= PREFIX.len() || !first.starts_with(PREFIX) {
            return Err(Error::MissingPrefix);
        }

        let mut out = Self::default();

        for pair in Pairs::new(line) {
            let (name, value) = pair?;

            // Last occurrence wins.
            out.args.insert(utils::normalize(name), String::from(value));
        }

        Ok(out)
    }

    /// Check if there exists an option with the given name.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(utils::normalize(name).as_str())
    }

    /// Get the raw value for the given option name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.args
            .get(utils::normalize(name).as_str())
            .map(String::as_str)
    }

    /// Number of distinct options found.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no option was found.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over `(name, value)` pairs, sorted by name.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.args.iter(),
        }
    }
}

/// An iterator over parsed `(name, value)` pairs.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<'a> IntoIterator for &'a ParsedArgs {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
