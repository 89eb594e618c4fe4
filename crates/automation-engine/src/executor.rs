//! Action executor for automation rules

use crate::error::AutomationError;
use crate::model::{Action, LogLevel};
use home_core::{Controller, Device};

/// Execute a rule's actions in order against the controller
///
/// The first failing action aborts the remaining actions of that rule and
/// surfaces the error to the engine; earlier effects are not rolled back.
pub fn execute_actions(
    rule_name: &str,
    actions: &[Action],
    controller: &mut Controller,
) -> Result<(), AutomationError> {
    for (index, action) in actions.iter().enumerate() {
        execute_action(action, controller).map_err(|e| {
            tracing::warn!(
                "Action {} of rule '{}' failed: {}",
                index,
                rule_name,
                e
            );
            e
        })?;
    }
    Ok(())
}

/// Execute a single action
fn execute_action(action: &Action, controller: &mut Controller) -> Result<(), AutomationError> {
    match action {
        Action::TurnOn { device_id } => {
            controller.find_device_mut(device_id)?.turn_on();
            Ok(())
        }
        Action::TurnOff { device_id } => {
            controller.find_device_mut(device_id)?.turn_off();
            Ok(())
        }
        Action::SetBrightness { device_id, percent } => {
            match controller.find_device_mut(device_id)? {
                Device::Light(light) => {
                    light.set_brightness(*percent)?;
                    Ok(())
                }
                _ => Err(AutomationError::NotALight(device_id.clone())),
            }
        }
        Action::EnergySavingMode => {
            controller.energy_saving_mode();
            Ok(())
        }
        Action::Log { message, level } => {
            match level {
                LogLevel::Debug => tracing::debug!(target: "automation", "{}", message),
                LogLevel::Info => tracing::info!(target: "automation", "{}", message),
                LogLevel::Warn => tracing::warn!(target: "automation", "{}", message),
                LogLevel::Error => tracing::error!(target: "automation", "{}", message),
            }
            Ok(())
        }
    }
}
