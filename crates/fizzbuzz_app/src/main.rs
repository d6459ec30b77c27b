//! Thin command-line front end for the fizzbuzz engine and usage counter.
//!
//! `fizzbuzz_app <int1> <int2> <limit> <str1> <str2>` prints the sequence and
//! records the parameter use; `fizzbuzz_app most-used` prints the most used
//! parameter set. The counter file defaults to `mostUsedParameters.json` and
//! can be overridden with the `FIZZBUZZ_STORE` environment variable.

mod args;

use anyhow::{anyhow, Result};
use fizzbuzz_core::{generate, FizzBuzzParams};
use fizzbuzz_store::{CounterStore, StoreSettings};
use service_logging::{service_info, LogDestination};

use crate::args::{parse, Command};

const STORE_PATH_VAR: &str = "FIZZBUZZ_STORE";

fn main() -> Result<()> {
    service_logging::initialize(LogDestination::Both);

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let command = parse(&argv).map_err(|message| anyhow!(message))?;

    let store = CounterStore::open(store_settings());
    match command {
        Command::Generate(params) => run_generate(&store, params),
        Command::MostUsed => run_most_used(&store),
    }
}

fn store_settings() -> StoreSettings {
    match std::env::var(STORE_PATH_VAR) {
        Ok(path) if !path.is_empty() => StoreSettings::new(path),
        _ => StoreSettings::default(),
    }
}

fn run_generate(store: &CounterStore, params: FizzBuzzParams) -> Result<()> {
    let tokens = generate(&params)?;
    let count = store.record_use(&params.canonical_key())?;
    service_info!("Recorded use #{count} of {params}");

    println!("[{}]", tokens.join(", "));
    Ok(())
}

fn run_most_used(store: &CounterStore) -> Result<()> {
    match store.most_used()? {
        Some(key) => println!("{key}"),
        None => println!("FizzBuzz API never used"),
    }
    Ok(())
}
