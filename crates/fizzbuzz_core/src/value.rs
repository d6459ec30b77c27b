use crate::params::InvalidArgument;

/// State of one position in the sequence while rules are applied.
///
/// A position starts as `Unreplaced` and may become `Replaced` when a rule
/// matches. Once replaced, the original integer is fixed; a later matching
/// rule only extends the text by concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unreplaced(i64),
    Replaced { original: i64, text: String },
}

impl Value {
    /// Renders the position to its output token: replacement text if any,
    /// the decimal form of the integer otherwise.
    pub fn render(&self) -> String {
        match self {
            Value::Unreplaced(n) => n.to_string(),
            Value::Replaced { text, .. } => text.clone(),
        }
    }
}

/// A divisor rule: positions whose integer is a multiple of `divisor` are
/// substituted with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    divisor: i64,
    replacement: String,
}

impl Rule {
    /// Builds a rule. A zero or negative divisor is an input error, never a
    /// silent no-op.
    pub fn new(divisor: i64, replacement: impl Into<String>) -> Result<Self, InvalidArgument> {
        if divisor <= 0 {
            return Err(InvalidArgument::NonPositiveDivisor { divisor });
        }
        Ok(Self {
            divisor,
            replacement: replacement.into(),
        })
    }

    fn matches(&self, n: i64) -> bool {
        n % self.divisor == 0
    }

    /// Applies the rule to one position.
    ///
    /// An unreplaced multiple becomes `Replaced`; an already-replaced
    /// multiple keeps its original integer and gets `replacement` appended,
    /// so the earlier rule's text always comes first.
    pub fn apply(&self, value: Value) -> Value {
        match value {
            Value::Unreplaced(n) if self.matches(n) => Value::Replaced {
                original: n,
                text: self.replacement.clone(),
            },
            Value::Replaced { original, mut text } if self.matches(original) => {
                text.push_str(&self.replacement);
                Value::Replaced { original, text }
            }
            other => other,
        }
    }
}
