use std::cmp::Ordering;

/// One piece of a natural sort key. Keys always alternate text and number,
/// starting with a (possibly empty) text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    Text(String),
    /// Digit run with leading zeros stripped, so any length compares correctly.
    Number(String),
}

impl Ord for KeySegment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeySegment::Text(a), KeySegment::Text(b)) => a.cmp(b),
            (KeySegment::Number(a), KeySegment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (KeySegment::Text(_), KeySegment::Number(_)) => Ordering::Less,
            (KeySegment::Number(_), KeySegment::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeySegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn sort_key(name: &str) -> Vec<KeySegment> {
    let mut key = Vec::new();
    let mut text = String::new();
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_ascii_digit() {
            text.extend(ch.to_lowercase());
            continue;
        }

        key.push(KeySegment::Text(std::mem::take(&mut text)));

        let mut digits = String::from(ch);
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            chars.next();
        }
        let trimmed = digits.trim_start_matches('0');
        key.push(KeySegment::Number(trimmed.to_string()));
    }

    key.push(KeySegment::Text(text));
    key
}

/// Natural ordering; names with identical keys ("a01" vs "a1") fall back to
/// plain string order so the result does not depend on listing order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

pub fn natural_sort(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}
