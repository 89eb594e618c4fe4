//! Condition evaluator for automation rules

use crate::error::AutomationError;
use crate::model::Condition;
use home_core::{Controller, Device};

/// Evaluate a condition against the controller's current state
///
/// Pure with respect to the home: evaluation never mutates anything. A
/// condition that references a missing device or a device of the wrong
/// variant is an error, not `false`.
pub fn evaluate(condition: &Condition, controller: &Controller) -> Result<bool, AutomationError> {
    match condition {
        Condition::MotionDetected { sensor_id } => {
            match controller.find_device(sensor_id)? {
                Device::MotionSensor(sensor) => Ok(sensor.motion_detected()),
                _ => Err(AutomationError::NotAMotionSensor(sensor_id.clone())),
            }
        }
        Condition::PowerDrawAbove { watts } => Ok(controller.total_power() > *watts),
        Condition::DeviceOn { device_id } => {
            Ok(controller.find_device(device_id)?.is_on())
        }
        Condition::And { conditions } => {
            for c in conditions {
                if !evaluate(c, controller)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Condition::Or { conditions } => {
            for c in conditions {
                if evaluate(c, controller)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Condition::Not { condition } => Ok(!evaluate(condition, controller)?),
    }
}
