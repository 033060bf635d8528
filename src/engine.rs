//! End-to-end quote pipeline: cache lookup, subtitle parsing, generation.

use crate::error::Result;
use crate::markov::{generate_quote, Chain, ChainCache};
use crate::models::Settings;
use crate::subtitle::read_subtitle;
use rand::Rng;

/// Load the chain for a subtitle from the cache, or build and cache it.
pub fn load_or_build_chain(settings: &Settings) -> Result<Chain> {
    let cache = ChainCache::new(&settings.cache_directory);
    let cache_path = cache.path_for(&settings.subtitle, settings.unit)?;

    if cache.is_fresh(&cache_path, &settings.subtitle) {
        log::info!("Using cached chain {}", cache_path.display());
        return Ok(cache.load(&cache_path)?);
    }

    log::info!(
        "Building {} chain for {}",
        settings.unit,
        settings.subtitle.display()
    );
    let sequences = read_subtitle(&settings.subtitle, settings.unit)?;
    let chain = Chain::from_sequences(&sequences);
    cache.save(&chain, &cache_path)?;
    Ok(chain)
}

/// Produce one quote for the given settings.
pub fn get_quote<R>(settings: &Settings, rng: &mut R) -> Result<String>
where
    R: Rng + ?Sized,
{
    let chain = load_or_build_chain(settings)?;
    Ok(generate_quote(
        &chain,
        settings.quote_length,
        settings.unit,
        rng,
    )?)
}
