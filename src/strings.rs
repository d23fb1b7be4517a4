use crate::error::{error_if, Error, Result};

/// Splits `s` on every char in `remove`, drops the empty pieces and joins
/// what is left with `new_val`.
///
/// Runs of removed chars collapse into a single `new_val`, and removed chars
/// at either end leave nothing behind. An empty `remove` returns `s` as is.
///
/// # Examples
///
/// ```
/// # use typext::strings::replace_chars;
/// assert_eq!(replace_chars("a,b;;c", "-", &[',', ';']), "a-b-c");
/// assert_eq!(replace_chars(";a;", "-", &[';']), "a");
/// ```
pub fn replace_chars(s: &str, new_val: &str, remove: &[char]) -> String {
    if remove.is_empty() {
        return s.to_owned();
    }

    s.split(|c: char| remove.contains(&c))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(new_val)
}

/// Returns a copy of `s` without its last `length` chars.
///
/// # Examples
///
/// ```
/// # use typext::strings::remove_last;
/// assert_eq!(remove_last("hello", 2).unwrap(), "hel");
/// assert!(remove_last("hi", 3).is_err());
/// ```
pub fn remove_last(s: &str, length: usize) -> Result<String> {
    if length == 0 {
        return Ok(s.to_owned());
    }

    match s.char_indices().nth_back(length - 1) {
        Some((end, _)) => Ok(s[..end].to_owned()),
        None => Err(Error::out_of_range("length", length, s.chars().count())),
    }
}

/// Returns a copy of `s` without its first `length` chars.
///
/// # Examples
///
/// ```
/// # use typext::strings::remove_first;
/// assert_eq!(remove_first("hello", 2).unwrap(), "llo");
/// ```
pub fn remove_first(s: &str, length: usize) -> Result<String> {
    match s.char_indices().nth(length) {
        Some((start, _)) => Ok(s[start..].to_owned()),
        None => {
            let count = s.chars().count();
            error_if(length > count, || Error::out_of_range("length", length, count))?;
            Ok(String::new())
        }
    }
}

pub fn remove_last_char(s: &str) -> Result<String> {
    remove_last(s, 1)
}

pub fn remove_first_char(s: &str) -> Result<String> {
    remove_first(s, 1)
}

/// Method syntax for the string helpers.
pub trait StrExt {
    fn replace_chars(&self, new_val: &str, remove: &[char]) -> String;
    fn remove_last(&self, length: usize) -> Result<String>;
    fn remove_first(&self, length: usize) -> Result<String>;
    fn remove_last_char(&self) -> Result<String>;
    fn remove_first_char(&self) -> Result<String>;
}

impl StrExt for str {
    fn replace_chars(&self, new_val: &str, remove: &[char]) -> String {
        replace_chars(self, new_val, remove)
    }

    fn remove_last(&self, length: usize) -> Result<String> {
        remove_last(self, length)
    }

    fn remove_first(&self, length: usize) -> Result<String> {
        remove_first(self, length)
    }

    fn remove_last_char(&self) -> Result<String> {
        remove_last_char(self)
    }

    fn remove_first_char(&self) -> Result<String> {
        remove_first_char(self)
    }
}
