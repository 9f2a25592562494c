//! Classification of a statement relative to a knowledge base

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The statement is entailed and its negation is not
    #[serde(rename = "definitely true")]
    DefinitelyTrue,
    /// The negation is entailed and the statement is not
    #[serde(rename = "definitely false")]
    DefinitelyFalse,
    /// Neither is entailed
    #[serde(rename = "possibly true, possibly false")]
    Unknown,
    /// Both are entailed, so the knowledge base is unsatisfiable
    #[serde(rename = "both true and false")]
    Inconsistent,
}

impl Verdict {
    pub fn classify(statement_entailed: bool, negation_entailed: bool) -> Self {
        match (statement_entailed, negation_entailed) {
            (true, false) => Verdict::DefinitelyTrue,
            (false, false) => Verdict::Unknown,
            (true, true) => Verdict::Inconsistent,
            (false, true) => Verdict::DefinitelyFalse,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::DefinitelyTrue => "definitely true",
            Verdict::DefinitelyFalse => "definitely false",
            Verdict::Unknown => "possibly true, possibly false",
            Verdict::Inconsistent => "both true and false",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
