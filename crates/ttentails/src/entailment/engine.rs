//! Truth-table entailment by model enumeration
//!
//! `kb |= target` holds when `target` is true in every model of `kb`. The
//! checker branches on one free symbol at a time, binding it to `true` and
//! then `false` in a fresh copy of the model, and requires both branches to
//! hold. At a complete model a `kb` violation holds vacuously. With `k` free
//! symbols this visits up to `2^k` complete models.

use super::forcing::forced_literals;
use crate::config::CheckConfig;
use crate::logic::{Expression, Model, Symbol};
use indexmap::IndexSet;

/// Seed model and free symbols for checking a knowledge base and statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationPlan {
    /// Bindings fixed by literal forcing
    pub forced: Model,
    /// Symbols of the knowledge base then the statement, minus forced ones
    pub free_symbols: Vec<Symbol>,
}

impl EnumerationPlan {
    pub fn new(knowledge_base: &Expression, statement: &Expression, config: &CheckConfig) -> Self {
        let mut symbols: IndexSet<Symbol> = knowledge_base.symbols();
        statement.collect_symbols(&mut symbols);

        let forced = if config.literal_forcing {
            forced_literals(knowledge_base)
        } else {
            Model::new()
        };
        let free_symbols = symbols
            .into_iter()
            .filter(|symbol| !forced.contains(symbol.as_str()))
            .collect();

        EnumerationPlan {
            forced,
            free_symbols,
        }
    }

    /// Number of complete models an exhaustive enumeration visits
    pub fn model_count(&self) -> u128 {
        1u128
            .checked_shl(self.free_symbols.len() as u32)
            .unwrap_or(u128::MAX)
    }
}

/// One entailment check of `target` against a knowledge base
pub struct EntailmentChecker<'a> {
    knowledge_base: &'a Expression,
    target: &'a Expression,
    short_circuit: bool,
    models_checked: u64,
}

impl<'a> EntailmentChecker<'a> {
    pub fn new(
        knowledge_base: &'a Expression,
        target: &'a Expression,
        config: &CheckConfig,
    ) -> Self {
        EntailmentChecker {
            knowledge_base,
            target,
            short_circuit: config.short_circuit,
            models_checked: 0,
        }
    }

    /// Whether every completion of `model` over `remaining` that satisfies
    /// the knowledge base also satisfies the target.
    ///
    /// `model` together with `remaining` must bind every symbol of both
    /// expressions.
    pub fn check(&mut self, remaining: &[Symbol], model: &Model) -> bool {
        match remaining.split_first() {
            None => {
                self.models_checked += 1;
                if self.knowledge_base.evaluate(model) {
                    self.target.evaluate(model)
                } else {
                    true
                }
            }
            Some((symbol, rest)) => {
                let when_true = self.check(rest, &model.extended(symbol.clone(), true));
                if !when_true && self.short_circuit {
                    return false;
                }
                let when_false = self.check(rest, &model.extended(symbol.clone(), false));
                when_true && when_false
            }
        }
    }

    /// Complete models evaluated so far
    pub fn models_checked(&self) -> u64 {
        self.models_checked
    }
}

/// Recursive entailment check over `remaining` symbols, starting from `model`
pub fn check_entail(
    knowledge_base: &Expression,
    target: &Expression,
    remaining: &[Symbol],
    model: &Model,
) -> bool {
    EntailmentChecker::new(knowledge_base, target, &CheckConfig::default()).check(remaining, model)
}

/// Whether `knowledge_base` entails `statement`
pub fn entails(knowledge_base: &Expression, statement: &Expression) -> bool {
    let plan = EnumerationPlan::new(knowledge_base, statement, &CheckConfig::default());
    check_entail(knowledge_base, statement, &plan.free_symbols, &plan.forced)
}
