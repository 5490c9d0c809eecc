use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Comparison operator understood by [`crate::compare`].
///
/// Every token parses: unrecognized spellings become [`Operator::LooseEq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    StrictEq,
    StrictNe,
    LooseNe,
    Gte,
    Lte,
    Gt,
    Lt,
    Contains,
    LooseEq,
}

impl Operator {
    /// Parse an operator token. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Self {
        match token {
            "===" => Operator::StrictEq,
            "!==" => Operator::StrictNe,
            "!=" | "not equal" => Operator::LooseNe,
            ">=" | "greater or equal" | "equal or greater" => Operator::Gte,
            "<=" | "smaller or equal" | "equal or smaller" => Operator::Lte,
            ">" | "greater" => Operator::Gt,
            "<" | "smaller" => Operator::Lt,
            "contains" | "in" => Operator::Contains,
            _ => Operator::LooseEq,
        }
    }

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::StrictEq => "===",
            Operator::StrictNe => "!==",
            Operator::LooseNe => "!=",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Contains => "contains",
            Operator::LooseEq => "==",
        }
    }
}

impl FromStr for Operator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Operator::parse(s))
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Operator::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
