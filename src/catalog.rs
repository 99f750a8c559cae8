//! Card catalog construction.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Rank, Suit};

/// Number of identifiers in the standard catalog, jokers excluded.
pub const CATALOG_SIZE: usize = 52;

/// Identifier of the red joker.
pub const JOKER_RED: &str = "joker_red";

/// Identifier of the black joker.
pub const JOKER_BLACK: &str = "joker_black";

/// Builds every `prefix + label` identifier.
///
/// Prefixes are iterated in the outer loop and labels in the inner one, so
/// all labels of the first prefix come before any label of the second.
/// The result holds exactly `prefixes.len() * labels.len()` identifiers.
///
/// # Example
///
/// ```
/// use memrs::card_names;
///
/// let names = card_names(&["a_", "b_"], &["1", "2"]);
/// assert_eq!(names, ["a_1", "a_2", "b_1", "b_2"]);
/// ```
#[must_use]
pub fn card_names<P, L>(prefixes: &[P], labels: &[L]) -> Vec<String>
where
    P: AsRef<str>,
    L: AsRef<str>,
{
    let mut names = Vec::with_capacity(prefixes.len() * labels.len());

    for prefix in prefixes {
        let prefix = prefix.as_ref();
        for label in labels {
            let label = label.as_ref();
            let mut name = String::with_capacity(prefix.len() + label.len());
            name.push_str(prefix);
            name.push_str(label);
            names.push(name);
        }
    }

    names
}

/// Builds the standard catalog: four suits of thirteen ranks.
///
/// The two jokers are appended at the end only when `include_jokers` is set.
///
/// # Example
///
/// ```
/// use memrs::{CATALOG_SIZE, JOKER_BLACK, standard_catalog};
///
/// assert_eq!(standard_catalog(false).len(), CATALOG_SIZE);
///
/// let with_jokers = standard_catalog(true);
/// assert_eq!(with_jokers.len(), CATALOG_SIZE + 2);
/// assert_eq!(with_jokers.last().map(String::as_str), Some(JOKER_BLACK));
/// ```
#[must_use]
pub fn standard_catalog(include_jokers: bool) -> Vec<String> {
    let prefixes = Suit::ALL.map(Suit::prefix);
    let labels = Rank::ALL.map(Rank::label);
    let mut catalog = card_names(&prefixes, &labels);

    if include_jokers {
        catalog.extend([JOKER_RED, JOKER_BLACK].map(String::from));
    }

    catalog
}
