//! A lexer for splitting a joined command line into `--name=value` pairs.

use crate::parser::Error;
use crate::utils;

/// Long option prefix.
pub const PREFIX: &str = "--";

/// Name and value delimiter.
pub const DELIMITER: char = '=';

/// Defines a lexer that streams `(name, value)` pairs from a joined command line.
///
/// The line is expected to hold trimmed arguments separated by single spaces. Scanning starts
/// at the first `--`, so rejecting a line that does not begin with an option is up to the
/// caller (see [`ParsedArgs`](crate::ParsedArgs)).
///
/// Names and values are trimmed slices of the input. An option written without `=` yields an
/// empty value. The iterator stops right after the first error.
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    line: &'a str,
    cursor: Option<usize>,
}

impl<'a> Pairs<'a> {
    /// Create a new lexer over the given command line.
    pub fn new(line: &'a str) -> Self {
        Pairs {
            line,
            cursor: line.find(PREFIX),
        }
    }

    /// Extract the pair found between the end of a `--` and the start of the next one.
    fn pair(span: &'a str) -> Result<(&'a str, &'a str), Error> {
        let Some(equal) = span.find(DELIMITER) else {
            // Option without value (e.g. a bare boolean flag).
            if utils::is_blank(span) {
                return Err(Error::EmptyName);
            }

            return Ok((span.trim(), ""));
        };

        let name = &span[..equal];
        if utils::is_blank(name) {
            return Err(Error::EmptyName);
        }

        // Skip any stray spaces and `=` following the delimiter.
        let rest = &span[equal + DELIMITER.len_utf8()..];
        let Some(offset) = rest.find(|c: char| c != ' ' && c != DELIMITER) else {
            return Err(Error::StrayEquals);
        };

        let value = &rest[offset..];
        if utils::is_blank(value) {
            return Err(Error::EmptyValue);
        }

        Ok((name.trim(), value.trim()))
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Result<(&'a str, &'a str), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor.take()?;
        let body = start + PREFIX.len();

        // A `--` must be immediately followed by an option name.
        match self.line.as_bytes().get(body) {
            None | Some(b' ') => return Some(Err(Error::StrayDashes)),
            Some(_) => {}
        }

        let next = self.line[body..].find(PREFIX).map(|i| body + i);
        let end = next.unwrap_or(self.line.len());

        let pair = Self::pair(&self.line[body..end]);
        if pair.is_ok() {
            self.cursor = next;
        }

        Some(pair)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_split_name_and_value() {
        let mut pairs = Pairs::new("--a=1 --b=2 --c");

        assert_that!(pairs.next(), eq(Some(Ok(("a", "1")))));
        assert_that!(pairs.next(), eq(Some(Ok(("b", "2")))));
        assert_that!(pairs.next(), eq(Some(Ok(("c", "")))));
        assert_that!(pairs.next(), eq(None));
    }

    #[test]
    fn it_should_match_consecutive_flags() {
        let mut pairs = Pairs::new("--opt1 --opt2=val");

        assert_that!(pairs.next(), eq(Some(Ok(("opt1", "")))));
        assert_that!(pairs.next(), eq(Some(Ok(("opt2", "val")))));
        assert_that!(pairs.next(), eq(None));
    }

    #[test]
    fn it_should_skip_leading_spaces_and_equals_in_value() {
        let mut pairs = Pairs::new("--a=  hello");
        assert_that!(pairs.next(), eq(Some(Ok(("a", "hello")))));

        let mut pairs = Pairs::new("--opt= = value --next=1");
        assert_that!(pairs.next(), eq(Some(Ok(("opt", "value")))));
        assert_that!(pairs.next(), eq(Some(Ok(("next", "1")))));
    }

    #[test]
    fn it_should_keep_further_equals_in_value() {
        let mut pairs = Pairs::new("--define=key=value --x=a=b=c");

        assert_that!(pairs.next(), eq(Some(Ok(("define", "key=value")))));
        assert_that!(pairs.next(), eq(Some(Ok(("x", "a=b=c")))));
    }

    #[test]
    fn it_should_keep_spaces_inside_value() {
        let mut pairs = Pairs::new("--name=hello world --level=3");

        assert_that!(pairs.next(), eq(Some(Ok(("name", "hello world")))));
        assert_that!(pairs.next(), eq(Some(Ok(("level", "3")))));
    }

    #[test]
    fn it_should_reject_stray_dashes() {
        let mut pairs = Pairs::new("--a=1 -- --b=2");

        assert_that!(pairs.next(), eq(Some(Ok(("a", "1")))));
        assert_that!(pairs.next(), eq(Some(Err(Error::StrayDashes))));
        assert_that!(pairs.next(), eq(None));

        let mut pairs = Pairs::new("--a=1 --");
        assert_that!(pairs.next(), eq(Some(Ok(("a", "1")))));
        assert_that!(pairs.next(), eq(Some(Err(Error::StrayDashes))));
    }

    #[test]
    fn it_should_reject_stray_equals() {
        let mut pairs = Pairs::new("--a= --b=2");
        assert_that!(pairs.next(), eq(Some(Err(Error::StrayEquals))));

        let mut pairs = Pairs::new("--a= = ");
        assert_that!(pairs.next(), eq(Some(Err(Error::StrayEquals))));
    }

    #[test]
    fn it_should_reject_blank_values() {
        let mut pairs = Pairs::new("--a=\t");
        assert_that!(pairs.next(), eq(Some(Err(Error::EmptyValue))));
        assert_that!(pairs.next(), eq(None));
    }

    #[test]
    fn it_should_reject_empty_names() {
        let mut pairs = Pairs::new("--=1");
        assert_that!(pairs.next(), eq(Some(Err(Error::EmptyName))));

        let mut pairs = Pairs::new("--a=1 --  =2");
        assert_that!(pairs.next(), eq(Some(Ok(("a", "1")))));
        assert_that!(pairs.next(), eq(Some(Err(Error::StrayDashes))));
    }

    #[test]
    fn it_should_yield_nothing_without_dashes() {
        let mut pairs = Pairs::new("plain words");
        assert_that!(pairs.next(), eq(None));
    }
}
