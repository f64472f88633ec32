// crates/roster-core/src/tokenizer.rs - Splitting raw lines into words and fields
//
// Two steps, both pure string processing:
//
// 1. `split_command`: "vedit 2 n/Amy p/123" -> ("vedit", "2 n/Amy p/123")
// 2. `tokenize`:      "2 n/Amy p/123"       -> preamble "2", {n/: ["Amy"], p/: ["123"]}
//
// A marker only counts when it follows whitespace, so "n/Amy/p/1" is one
// name value. Markers the caller did not ask for are plain text and stay in
// whichever value surrounds them.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{ParseError, ParseResult};
use crate::syntax::Prefix;

/// Split a raw line into its command word and trimmed argument tail
///
/// Returns `None` when the line is empty or whitespace only; the dispatcher
/// turns that into `ParseError::EmptyInput`.
pub fn split_command(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.find(char::is_whitespace) {
        Some(split_at) => Some((&trimmed[..split_at], trimmed[split_at..].trim())),
        None => Some((trimmed, "")),
    }
}

/// Marker-to-values mapping produced by `tokenize`
///
/// Values for each marker keep the order they were written in. Markers
/// themselves keep first-seen order, which makes debug output readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: IndexMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    fn put(&mut self, prefix: Prefix, value: &str) {
        self.values
            .entry(prefix)
            .or_default()
            .push(value.to_string());
    }

    /// Last value written for `prefix`, if any
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value written for `prefix`, in input order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// True when every one of `prefixes` appears at least once
    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }

    /// Text before the first recognised marker, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Fail if any of the single-valued `prefixes` was written more than once
    ///
    /// The error lists every offending marker, not just the first.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicateField {
                markers: duplicated,
            })
        }
    }
}

/// Split an argument tail into a preamble and the values of `prefixes`
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // Pad so a marker at the very start is also preceded by whitespace
    let padded = format!(" {args}");
    let positions = find_prefix_positions(&padded, prefixes);

    let mut multimap = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(padded.len(), |(at, _)| *at);
    multimap.preamble = padded[..preamble_end].trim().to_string();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.len();
        let value_end = positions
            .get(i + 1)
            .map_or(padded.len(), |(next, _)| *next)
            .max(value_start);
        multimap.put(*prefix, padded[value_start..value_end].trim());
    }

    trace!(
        preamble = %multimap.preamble,
        fields = multimap.values.len(),
        "tokenized argument tail"
    );
    multimap
}

/// Byte offsets of every whitespace-preceded occurrence of each prefix, sorted
fn find_prefix_positions(padded: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();

    for prefix in prefixes {
        let mut from = 0;
        while let Some(found) = padded[from..].find(prefix.as_str()) {
            let at = from + found;
            let preceded_by_space = padded[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            if preceded_by_space {
                positions.push((at, *prefix));
            }
            from = at + prefix.len();
        }
    }

    positions.sort_by_key(|(at, _)| *at);
    positions
}
