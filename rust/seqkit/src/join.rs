//! Joining elements into a string through a per-element formatter.

use std::fmt::Display;

use itertools::Itertools;
use seqkit_shared_vec::SharedVec;

/// Formats every element with `formatter` and joins the results with
/// `separator` placed between neighbours only.
pub fn join_with<T, S, F>(seq: &SharedVec<T>, separator: &str, formatter: F) -> String
where
    S: Display,
    F: FnMut(&T) -> S,
{
    seq.iter().map(formatter).join(separator)
}

/// Fallible [`join_with`]. The first formatter error is returned and the
/// partially built string is discarded.
pub fn try_join_with<T, S, E, F>(
    seq: &SharedVec<T>,
    separator: &str,
    formatter: F,
) -> Result<String, E>
where
    S: Display,
    F: FnMut(&T) -> Result<S, E>,
{
    itertools::process_results(seq.iter().map(formatter), |mut formatted| {
        formatted.join(separator)
    })
}
