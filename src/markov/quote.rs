//! Random walks over a chain.

use crate::error::QuoteError;
use crate::markov::chain::Chain;
use crate::models::Unit;
use rand::seq::SliceRandom;
use rand::Rng;

/// Characters accepted as the end of a quote
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Generate a quote of at most `max_len` units.
///
/// The walk starts on a random uppercase key and follows random transitions
/// until the quote is long enough or the current unit has no follower. A
/// full stop is appended unless the quote already ends a sentence.
pub fn generate_quote<R>(
    chain: &Chain,
    max_len: usize,
    unit: Unit,
    rng: &mut R,
) -> Result<String, QuoteError>
where
    R: Rng + ?Sized,
{
    let starts = chain.starts();
    let first = *starts.choose(rng).ok_or(QuoteError::NoStartingPoint)?;

    let mut units = vec![first];
    let mut current = first;
    while units.len() < max_len.max(1) {
        let next = match chain.followers(current).and_then(|f| f.choose(rng)) {
            Some(next) => next.as_str(),
            None => break,
        };
        units.push(next);
        current = next;
    }
    log::debug!("Walked {} units from {:?}", units.len(), first);

    let mut quote = units.join(unit.joiner());
    quote.truncate(quote.trim_end().len());
    if !quote.ends_with(TERMINATORS) {
        quote.push('.');
    }
    Ok(quote)
}
