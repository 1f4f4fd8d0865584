//! Candidate filtering for the mention popup.

use crate::candidate::Candidate;

/// Case-insensitive substring match on candidate names.
///
/// Pure and stable: input order is preserved and an empty query matches
/// everything. Deliberately not fuzzy - scoring would reorder the host's
/// candidate list.
pub fn filter<'a>(query: &str, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}
