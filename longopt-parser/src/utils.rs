//! String helpers shared by the tokenizer and the option registry.

use alloc::string::String;

/// Normalize an option name: trim surrounding whitespace and lower-case it.
#[inline(always)]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check if the string is empty once trimmed.
#[inline(always)]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Split the input on whitespace.
#[inline(always)]
pub fn split(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// Trim every argument and join them with the given separator.
pub fn join<S>(args: &[S], sep: &str) -> String
where
    S: AsRef<str>,
{
    let mut out = String::new();

    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(arg.as_ref().trim());
    }

    out
}
