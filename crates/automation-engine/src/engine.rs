//! Core automation engine

use crate::error::AutomationError;
use crate::evaluator;
use crate::executor;
use crate::model::Rule;
use home_core::Controller;

/// What happened to one rule during an evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub enum RuleStatus {
    /// Condition held and every action ran
    Fired,
    /// Condition did not hold
    Skipped,
    /// Rule is disabled and was not evaluated
    Disabled,
    /// Condition or an action failed; the failure was contained to this rule
    Failed(String),
}

/// Per-rule record of an evaluation pass
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub rule: String,
    pub status: RuleStatus,
}

/// Ordered rule collection evaluated against one controller
///
/// Rules are evaluated in insertion order. An earlier rule's actions run
/// before the next rule's condition is read, so they can affect it within
/// the same pass. Nothing persists between passes.
#[derive(Debug, Default)]
pub struct Engine {
    rules: Vec<Rule>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the evaluation order
    pub fn add_rule(&mut self, rule: Rule) {
        tracing::info!("Registered rule '{}'", rule.name);
        self.rules.push(rule);
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find a rule by name
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Remove a rule by name, returning it
    pub fn remove_rule(&mut self, name: &str) -> Result<Rule, AutomationError> {
        let index = self
            .rules
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| AutomationError::RuleNotFound(name.to_string()))?;
        Ok(self.rules.remove(index))
    }

    /// Enable or disable a rule by name
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), AutomationError> {
        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| AutomationError::RuleNotFound(name.to_string()))?;
        rule.enabled = enabled;
        Ok(())
    }

    /// Evaluate every rule against current state, firing matching actions
    ///
    /// A failure in one rule's condition or actions is recorded in its
    /// outcome and never aborts the rest of the pass.
    pub fn evaluate_rules(&self, controller: &mut Controller) -> Vec<RuleOutcome> {
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let status = self.evaluate_rule(rule, controller);
            outcomes.push(RuleOutcome {
                rule: rule.name.clone(),
                status,
            });
        }
        outcomes
    }

    fn evaluate_rule(&self, rule: &Rule, controller: &mut Controller) -> RuleStatus {
        if !rule.enabled {
            tracing::debug!("Rule '{}' is disabled, skipping", rule.name);
            return RuleStatus::Disabled;
        }

        match evaluator::evaluate(&rule.condition, controller) {
            Ok(false) => {
                tracing::debug!("Rule '{}' condition not met", rule.name);
                RuleStatus::Skipped
            }
            Ok(true) => {
                match executor::execute_actions(&rule.name, &rule.actions, controller) {
                    Ok(()) => {
                        tracing::info!("Rule '{}' fired", rule.name);
                        RuleStatus::Fired
                    }
                    Err(e) => {
                        tracing::warn!("Rule '{}' failed: {}", rule.name, e);
                        RuleStatus::Failed(e.to_string())
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Rule '{}' condition failed: {}", rule.name, e);
                RuleStatus::Failed(e.to_string())
            }
        }
    }
}
