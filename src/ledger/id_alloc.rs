//! Ordinal identifiers such as `E001` or `L042`.
//!
//! The next id is the largest numeric suffix among ids of the form
//! `prefix + digits`, plus one, padded to three digits. Anything else in the
//! table (hand-entered ids, other prefixes) is ignored. Padding is a minimum
//! width, so `E999` is followed by `E1000`.

const MIN_WIDTH: usize = 3;

pub fn next_id<'a, I>(prefix: char, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let next = existing
        .into_iter()
        .filter_map(|id| ordinal(prefix, id))
        .max()
        .map_or(1, |max| max.saturating_add(1));

    format!("{prefix}{next:0width$}", width = MIN_WIDTH)
}

fn ordinal(prefix: char, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
