use crate::params::{FizzBuzzParams, InvalidArgument};
use crate::value::{Rule, Value};

/// Pure substitution run: maps `1..=limit` through both rules in order and
/// renders each position.
///
/// Rule order is what makes a double match read `str1` before `str2`,
/// regardless of divisor magnitude. Returns exactly `limit` tokens, or an
/// `InvalidArgument` without producing any partial output.
pub fn generate(params: &FizzBuzzParams) -> Result<Vec<String>, InvalidArgument> {
    params.validate()?;
    let first = Rule::new(params.int1, params.str1.clone())?;
    let second = Rule::new(params.int2, params.str2.clone())?;

    Ok((1..=params.limit)
        .map(Value::Unreplaced)
        .map(|value| first.apply(value))
        .map(|value| second.apply(value))
        .map(|value| value.render())
        .collect())
}

/// Five-argument convenience form of [`generate`].
pub fn generate_args(
    int1: i64,
    int2: i64,
    limit: i64,
    str1: &str,
    str2: &str,
) -> Result<Vec<String>, InvalidArgument> {
    generate(&FizzBuzzParams::new(int1, int2, limit, str1, str2))
}
