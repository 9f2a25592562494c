//! Entailment checking and verdicts
//!
//! A statement is checked twice against the knowledge base: once as
//! written and once negated. The two results decide the verdict.

pub mod engine;
pub mod forcing;
pub mod verdict;


pub use engine::{check_entail, entails, EntailmentChecker, EnumerationPlan};
pub use forcing::forced_literals;
pub use verdict::Verdict;

use crate::config::CheckConfig;
use crate::logic::{Expression, Model, Symbol};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::{debug, info};

fn secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

/// Outcome of checking one statement against a knowledge base
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub statement_entailed: bool,
    pub negation_entailed: bool,
    /// Symbols enumerated over both values
    pub free_symbols: Vec<Symbol>,
    /// Bindings fixed by literal forcing
    pub forced: Model,
    /// Complete models evaluated across both checks
    pub models_checked: u64,
    #[serde(serialize_with = "secs")]
    pub elapsed: Duration,
}

/// Decide whether `statement` is definitely true, definitely false, unknown,
/// or both true and false given `knowledge_base`.
///
/// Both expressions must already be validated.
pub fn check_true_false(
    knowledge_base: &Expression,
    statement: &Expression,
    config: &CheckConfig,
) -> CheckReport {
    let start = Instant::now();
    let plan = EnumerationPlan::new(knowledge_base, statement, config);
    debug!(
        free = plan.free_symbols.len(),
        forced = %plan.forced,
        models = plan.model_count(),
        "enumerating models"
    );

    let mut checker = EntailmentChecker::new(knowledge_base, statement, config);
    let statement_entailed = checker.check(&plan.free_symbols, &plan.forced);
    debug!(statement_entailed, models = checker.models_checked(), "checked statement");

    let negation = Expression::not(statement.clone());
    let mut negated_checker = EntailmentChecker::new(knowledge_base, &negation, config);
    let negation_entailed = negated_checker.check(&plan.free_symbols, &plan.forced);
    debug!(negation_entailed, models = negated_checker.models_checked(), "checked negation");

    let verdict = Verdict::classify(statement_entailed, negation_entailed);
    let models_checked = checker.models_checked() + negated_checker.models_checked();
    info!(%verdict, %statement, models_checked, "entailment check complete");

    CheckReport {
        verdict,
        statement_entailed,
        negation_entailed,
        free_symbols: plan.free_symbols,
        forced: plan.forced,
        models_checked,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(kb: &str, statement: &str) -> Verdict {
        let kb: Expression = kb.parse().unwrap();
        let statement: Expression = statement.parse().unwrap();
        check_true_false(&kb, &statement, &CheckConfig::default()).verdict
    }

    #[test]
    fn test_verdict_scenarios() {
        assert_eq!(verdict("A", "A"), Verdict::DefinitelyTrue);
        assert_eq!(verdict("A", "B"), Verdict::Unknown);
        assert_eq!(verdict("(and A (not A))", "B"), Verdict::Inconsistent);
        assert_eq!(verdict("(and A (not B))", "(not B)"), Verdict::DefinitelyTrue);
        assert_eq!(verdict("(or A B)", "A"), Verdict::Unknown);
        assert_eq!(verdict("(and A (not B))", "B"), Verdict::DefinitelyFalse);
    }

    #[test]
    fn test_report_contents() {
        let kb: Expression = "(and P (or Q R))".parse().unwrap();
        let statement: Expression = "(xor P Q)".parse().unwrap();
        let report = check_true_false(&kb, &statement, &CheckConfig::exhaustive());

        assert_eq!(report.verdict, Verdict::Unknown);
        assert!(!report.statement_entailed);
        assert!(!report.negation_entailed);
        assert_eq!(report.free_symbols.len(), 3);
        assert!(report.forced.is_empty());
        assert_eq!(report.models_checked, 16);
    }

    #[test]
    fn test_report_serializes() {
        let kb: Expression = "(and A (not B))".parse().unwrap();
        let statement: Expression = "A".parse().unwrap();
        let report = check_true_false(&kb, &statement, &CheckConfig::default());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["verdict"], "definitely true");
        assert_eq!(value["forced"]["A"], true);
        assert_eq!(value["forced"]["B"], false);
        assert_eq!(value["free_symbols"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["models_checked"], 2);
        assert!(value["elapsed"].is_f64());
    }
}
