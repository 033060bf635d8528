use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use subquote::cli::{self, ParseOutcome};
use subquote::config::{loader, paths};
use subquote::{engine, logger, ArgsError, ChainCache};

fn main() -> ExitCode {
    // Logging first, so config loading can already report
    let log_env = env::var(logger::LOG_ENV).ok();
    if let Err(e) = logger::init(logger::level_for(false, log_env.as_deref())) {
        eprintln!("[Main] WARNING: Failed to install logger: {}", e);
    }

    match run(env::args_os().collect(), log_env.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<OsString>, log_env: Option<&str>) -> subquote::Result<()> {
    let cli = match cli::parse_args(args)? {
        ParseOutcome::Run(cli) => cli,
        ParseOutcome::Exit(text) => {
            print!("{}", text);
            return Ok(());
        }
    };

    let file_config = loader::load_default_config()?;

    if cli.clear_cache {
        let dir = cli
            .cache
            .clone()
            .or_else(|| file_config.cache_directory.clone())
            .or_else(paths::default_cache_directory)
            .ok_or(ArgsError::NoCacheDirectory)?;
        let cache = ChainCache::new(dir);
        let removed = cache.clear()?;
        println!(
            "Removed {} cached chains from {}",
            removed,
            cache.dir().display()
        );
        return Ok(());
    }

    let raw = cli.into_raw(&file_config, paths::default_cache_directory())?;
    logger::set_level(logger::level_for(*raw.verbose.value(), log_env));
    log::debug!("Parsed arguments: {:?}", raw);

    let settings = raw.validate()?;
    let quote = match settings.seed {
        Some(seed) => engine::get_quote(&settings, &mut StdRng::seed_from_u64(seed))?,
        None => engine::get_quote(&settings, &mut rand::thread_rng())?,
    };
    println!("{}", quote);
    Ok(())
}
