use std::fmt;

use thiserror::Error;

/// The largest accepted `limit`, inclusive.
pub const MAX_LIMIT: i64 = 100;

/// Error type for rejected engine inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("divisor must be positive, got {divisor}")]
    NonPositiveDivisor { divisor: i64 },
    #[error("limit must be positive, got {limit}")]
    NonPositiveLimit { limit: i64 },
    #[error("{limit} is not a conform value, {MAX_LIMIT} is the maximal value")]
    LimitTooLarge { limit: i64 },
}

/// The five inputs to one substitution run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FizzBuzzParams {
    pub int1: i64,
    pub int2: i64,
    pub limit: i64,
    pub str1: String,
    pub str2: String,
}

impl FizzBuzzParams {
    pub fn new(
        int1: i64,
        int2: i64,
        limit: i64,
        str1: impl Into<String>,
        str2: impl Into<String>,
    ) -> Self {
        Self {
            int1,
            int2,
            limit,
            str1: str1.into(),
            str2: str2.into(),
        }
    }

    /// Checks the numeric bounds: both divisors positive, `1 <= limit <= 100`.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        for divisor in [self.int1, self.int2] {
            if divisor <= 0 {
                return Err(InvalidArgument::NonPositiveDivisor { divisor });
            }
        }
        if self.limit <= 0 {
            return Err(InvalidArgument::NonPositiveLimit { limit: self.limit });
        }
        if self.limit > MAX_LIMIT {
            return Err(InvalidArgument::LimitTooLarge { limit: self.limit });
        }
        Ok(())
    }

    /// Canonical key for the usage counter: stable, order-preserving textual
    /// form of the five fields.
    pub fn canonical_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FizzBuzzParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FizzBuzzParams(int1={}, int2={}, limit={}, str1={}, str2={})",
            self.int1, self.int2, self.limit, self.str1, self.str2
        )
    }
}
