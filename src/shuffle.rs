//! In-place uniform shuffling.

use rand::Rng;

/// Shuffles `items` in place and returns the same slice.
///
/// Walks a boundary down from the end of the slice: each step picks an
/// index uniformly in the unprocessed prefix, including the boundary slot
/// itself, and swaps it into the boundary. Every permutation is equally
/// likely given a uniform `rng`, and a seeded `rng` makes the result
/// reproducible.
///
/// The input is reordered, not copied; clone it first if the original
/// order is still needed.
///
/// # Example
///
/// ```
/// use memrs::shuffle;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut items = [1, 2, 3, 4, 5];
/// shuffle(&mut items, &mut rng);
///
/// let mut sorted = items;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    let mut boundary = items.len();

    while boundary > 0 {
        let pick = rng.random_range(0..boundary);
        boundary -= 1;
        items.swap(boundary, pick);
    }

    items
}
