//! Ordered rule tables.
//!
//! Both classifiers are declared as static slices of [`Rule`]s and evaluated
//! top to bottom; the first rule whose predicate holds decides the outcome.

use crate::models::{AuditStep, RecordFeatures};

/// A single named rule in a priority table.
#[derive(Debug)]
pub struct Rule<C, S> {
    /// Stable identifier, recorded in audit steps.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Predicate deciding whether the rule fires.
    pub applies: fn(&C) -> bool,
    /// Outcome produced when the rule fires.
    pub outcome: S,
    /// Explanation recorded when the rule fires.
    pub reasoning: &'static str,
}

/// The rule, or the fallback, that decided an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<S> {
    /// The rule id, or the fallback id.
    pub id: &'static str,
    /// The rule name, or the fallback name.
    pub name: &'static str,
    /// The decided outcome.
    pub outcome: S,
    /// Explanation of the decision.
    pub reasoning: &'static str,
}

/// Outcome used when no rule in a table fires.
#[derive(Debug, Clone, Copy)]
pub struct Fallback<S> {
    /// Identifier recorded in audit steps.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Outcome produced.
    pub outcome: S,
    /// Explanation recorded.
    pub reasoning: &'static str,
}

/// Returns the first rule in `rules` whose predicate holds for `ctx`.
pub fn first_match<'a, C, S>(rules: &'a [Rule<C, S>], ctx: &C) -> Option<&'a Rule<C, S>> {
    rules.iter().find(|rule| (rule.applies)(ctx))
}

/// Evaluates `rules` against `ctx`, falling back when nothing fires.
///
/// Always produces an outcome.
pub fn evaluate<C, S: Copy>(
    rules: &[Rule<C, S>],
    ctx: &C,
    fallback: &Fallback<S>,
) -> RuleMatch<S> {
    match first_match(rules, ctx) {
        Some(rule) => RuleMatch {
            id: rule.id,
            name: rule.name,
            outcome: rule.outcome,
            reasoning: rule.reasoning,
        },
        None => RuleMatch {
            id: fallback.id,
            name: fallback.name,
            outcome: fallback.outcome,
            reasoning: fallback.reasoning,
        },
    }
}

impl<S: serde::Serialize> RuleMatch<S> {
    /// Records this decision as an audit step over `features`.
    ///
    /// Fields of `extra`, when it is an object, are merged into the input.
    pub fn audit_step(
        &self,
        step_number: u32,
        features: &RecordFeatures,
        extra: serde_json::Value,
    ) -> AuditStep {
        let mut input = features.audit_input();
        if let (Some(input), serde_json::Value::Object(extra)) = (input.as_object_mut(), extra) {
            input.extend(extra);
        }

        AuditStep {
            step_number,
            rule_id: self.id.to_string(),
            rule_name: self.name.to_string(),
            input,
            output: serde_json::json!({ "outcome": self.outcome }),
            reasoning: self.reasoning.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[Rule<i32, &str>] = &[
        Rule {
            id: "negative",
            name: "Negative",
            applies: |n| *n < 0,
            outcome: "negative",
            reasoning: "below zero",
        },
        Rule {
            id: "small",
            name: "Small",
            applies: |n| *n < 10,
            outcome: "small",
            reasoning: "below ten",
        },
    ];

    const FALLBACK: Fallback<&str> = Fallback {
        id: "large",
        name: "Large",
        outcome: "large",
        reasoning: "nothing else applied",
    };

    #[test]
    fn test_first_matching_rule_wins() {
        let decided = evaluate(TABLE, &-5, &FALLBACK);
        assert_eq!(decided.id, "negative");
        assert_eq!(decided.outcome, "negative");
    }

    #[test]
    fn test_later_rule_fires_when_earlier_does_not() {
        assert_eq!(evaluate(TABLE, &3, &FALLBACK).outcome, "small");
    }

    #[test]
    fn test_fallback_when_no_rule_fires() {
        assert!(first_match(TABLE, &50).is_none());
        let decided = evaluate(TABLE, &50, &FALLBACK);
        assert_eq!(decided.id, "large");
        assert_eq!(decided.reasoning, "nothing else applied");
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let empty: &[Rule<i32, &str>] = &[];
        assert_eq!(evaluate(empty, &1, &FALLBACK).outcome, "large");
    }
}
