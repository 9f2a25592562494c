//! Literal forcing
//!
//! A literal stated directly as a conjunct of a top-level `and` fixes that
//! symbol in every model of the knowledge base, so it seeds the model
//! instead of being enumerated.

use crate::logic::{Expression, Model, Symbol};
use tracing::debug;

/// Bindings forced by the top-level conjuncts of `knowledge_base`.
///
/// Only the immediate operands of a top-level `and` are inspected: a bare
/// symbol forces `true`, `(not symbol)` forces `false`. Anything else,
/// including a knowledge base that is not a conjunction, forces nothing.
/// When a symbol is forced both ways the later conjunct wins; the knowledge
/// base is then unsatisfiable under either value.
pub fn forced_literals(knowledge_base: &Expression) -> Model {
    let conjuncts = match knowledge_base {
        Expression::And(conjuncts) => conjuncts,
        _ => return Model::new(),
    };

    let mut forced: Vec<(&Symbol, bool)> = Vec::new();
    for (symbol, value) in conjuncts.iter().filter_map(Expression::as_literal) {
        if forced.iter().any(|&(s, v)| s == symbol && v != value) {
            debug!(%symbol, "knowledge base states a literal and its negation");
        }
        forced.push((symbol, value));
    }

    forced
        .into_iter()
        .map(|(symbol, value)| (symbol.clone(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(text: &str) -> Expression {
        text.parse().unwrap()
    }

    #[test]
    fn test_top_level_literals_forced() {
        let forced = forced_literals(&kb("(and A (not B) (or C D) (not (not E)))"));
        assert_eq!(forced.len(), 2);
        assert_eq!(forced.value("A"), Some(true));
        assert_eq!(forced.value("B"), Some(false));
        assert_eq!(forced.value("C"), None);
        assert_eq!(forced.value("E"), None);
    }

    #[test]
    fn test_only_conjunctions_force() {
        assert!(forced_literals(&kb("(or A B)")).is_empty());
        assert!(forced_literals(&kb("A")).is_empty());
        assert!(forced_literals(&kb("(not A)")).is_empty());
    }

    #[test]
    fn test_nested_conjunctions_not_inspected() {
        let forced = forced_literals(&kb("(and (and A B) C)"));
        assert_eq!(forced.len(), 1);
        assert_eq!(forced.value("C"), Some(true));
    }

    #[test]
    fn test_conflicting_literals_last_wins() {
        let forced = forced_literals(&kb("(and A (not A))"));
        assert_eq!(forced.len(), 1);
        assert_eq!(forced.value("A"), Some(false));
    }
}
