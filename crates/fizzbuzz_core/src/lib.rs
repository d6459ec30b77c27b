//! Fizzbuzz core: pure substitution engine and parameter model.
mod generate;
mod params;
mod value;

pub use generate::{generate, generate_args};
pub use params::{FizzBuzzParams, InvalidArgument, MAX_LIMIT};
pub use value::{Rule, Value};
