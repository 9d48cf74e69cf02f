pub mod camel;
pub mod dot;
pub mod kebab;

use crate::error::Error;
use crate::tokenizer::{self, TokenSequence};
use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rule for joining word tokens into one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConvention {
    Camel,
    Kebab,
    Dot,
}

impl CaseConvention {
    /// Separator placed between tokens, if the convention uses one.
    pub fn separator(&self) -> Option<char> {
        match self {
            CaseConvention::Camel => None,
            CaseConvention::Kebab => Some('-'),
            CaseConvention::Dot => Some('.'),
        }
    }

    pub fn render(&self, tokens: &TokenSequence) -> String {
        match self {
            CaseConvention::Camel => camel::render(tokens),
            CaseConvention::Kebab => kebab::render(tokens),
            CaseConvention::Dot => dot::render(tokens),
        }
    }
}

impl fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseConvention::Camel => "camel",
            CaseConvention::Kebab => "kebab",
            CaseConvention::Dot => "dot",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CaseConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseConvention::Camel),
            "kebab" | "kebab-case" => Ok(CaseConvention::Kebab),
            "dot" | "dot.case" | "dotcase" => Ok(CaseConvention::Dot),
            other => Err(Error::UnknownConvention(other.to_string())),
        }
    }
}

/// Convert caller-supplied input into the given convention.
///
/// Validation and tokenization are shared across conventions; only the
/// joining policy differs.
pub fn convert(input: &Value, convention: CaseConvention) -> Result<String, Error> {
    let tokens = tokenizer::tokenize(input)?;
    Ok(convention.render(&tokens))
}

/// Convert input to camelCase (e.g. "hello world" -> "helloWorld").
pub fn camel_case(input: &Value) -> Result<String, Error> {
    convert(input, CaseConvention::Camel)
}

/// Convert input to kebab-case (e.g. "hello world" -> "hello-world").
pub fn kebab_case(input: &Value) -> Result<String, Error> {
    convert(input, CaseConvention::Kebab)
}

/// Convert input to dot.case (e.g. "hello world" -> "hello.world").
pub fn dot_case(input: &Value) -> Result<String, Error> {
    convert(input, CaseConvention::Dot)
}
