//! Data models for the automation engine

use serde::{Deserialize, Serialize};

/// A named IF-THEN automation rule
///
/// Rules are plain data: conditions and actions reference devices by id and
/// are resolved against the live home on every evaluation pass. Nothing
/// about a previous pass is remembered, so a condition that stays true
/// fires its actions every pass (actions are expected to be idempotent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable name, also the lookup key in the engine
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the rule participates in evaluation
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Condition polled against current state
    pub condition: Condition,
    /// Actions executed in order when the condition holds
    pub actions: Vec<Action>,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// Create an enabled rule with no description
    #[must_use]
    pub fn new(name: impl Into<String>, condition: Condition, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            description: None,
            enabled: true,
            condition,
            actions,
        }
    }
}

/// Conditions evaluated against live home state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// A motion sensor currently reports motion
    MotionDetected { sensor_id: String },
    /// Total home draw is strictly above a threshold
    PowerDrawAbove { watts: f64 },
    /// A device is currently on
    DeviceOn { device_id: String },
    /// Logical AND of multiple conditions (true when empty)
    And { conditions: Vec<Condition> },
    /// Logical OR of multiple conditions (false when empty)
    Or { conditions: Vec<Condition> },
    /// Negate a condition
    Not { condition: Box<Condition> },
}

/// Actions applied to the home when a rule fires
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Turn a device on
    TurnOn { device_id: String },
    /// Turn a device off
    TurnOff { device_id: String },
    /// Set a light's brightness percentage
    SetBrightness { device_id: String, percent: u8 },
    /// Apply the controller's energy-saving policy
    EnergySavingMode,
    /// Log a message (for debugging)
    Log {
        message: String,
        #[serde(default)]
        level: LogLevel,
    },
}

/// Log levels for log actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_defaults() {
        let rule = Rule::new(
            "test",
            Condition::DeviceOn {
                device_id: "L1".into(),
            },
            vec![Action::EnergySavingMode],
        );
        assert!(rule.enabled);
        assert!(rule.description.is_none());
    }

    #[test]
    fn test_rule_from_json() {
        let rule: Rule = serde_json::from_str(
            r#"{
                "name": "Motion Light Rule",
                "condition": { "type": "motion_detected", "sensor_id": "S001" },
                "actions": [ { "type": "turn_on", "device_id": "L001" } ]
            }"#,
        )
        .unwrap();
        assert!(rule.enabled);
        assert!(matches!(
            rule.condition,
            Condition::MotionDetected { ref sensor_id } if sensor_id == "S001"
        ));
        assert_eq!(rule.actions.len(), 1);
    }

    #[test]
    fn test_rule_json_round_trip() {
        let rule = Rule::new(
            "Energy Saving Rule",
            Condition::PowerDrawAbove { watts: 200.0 },
            vec![
                Action::EnergySavingMode,
                Action::Log {
                    message: "high draw".into(),
                    level: LogLevel::Warn,
                },
            ],
        );
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, rule.name);
        assert!(matches!(
            back.condition,
            Condition::PowerDrawAbove { watts } if watts == 200.0
        ));
        assert_eq!(back.actions.len(), 2);
    }

    #[test]
    fn test_log_level_default() {
        let action: Action = serde_json::from_str(
            r#"{ "type": "log", "message": "hello" }"#,
        )
        .unwrap();
        assert!(matches!(
            action,
            Action::Log { level: LogLevel::Info, .. }
        ));
    }
}
