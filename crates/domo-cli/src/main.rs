//! Demo driver for the domo smart-home core
//!
//! Plays the role a GUI or menu would in a deployment: builds a sample
//! home, registers the stock rules, and drives the core through a scripted
//! scenario while printing the status reports.

use anyhow::Context;
use automation_engine::{Action, Condition, Engine, Rule};
use home_core::{Controller, Home, HomeError, Light, MotionSensor, Room, SmartTv, Thermostat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Total draw above which the energy-saving rule kicks in
const HIGH_DRAW_THRESHOLD_W: f64 = 200.0;

fn build_home() -> Result<Home, HomeError> {
    let mut living = Room::new("Living Room");
    living.add_device(Light::new("L001", "Living Room Light", 75)?)?;
    living.add_device(Thermostat::new("T001", "Main Thermostat", 22)?)?;
    living.add_device(SmartTv::new("TV001", "Living Room TV"))?;
    living.add_device(MotionSensor::new("S001", "Living Room Sensor"))?;

    let mut bedroom = Room::new("Bedroom");
    bedroom.add_device(Light::new("L002", "Bedroom Light", 50)?)?;

    let mut kitchen = Room::new("Kitchen");
    kitchen.add_device(Light::new("L003", "Kitchen Light", 100)?)?;

    let mut home = Home::new("My Smart Home");
    home.add_room(living)?;
    home.add_room(bedroom)?;
    home.add_room(kitchen)?;
    Ok(home)
}

/// Motion on the sensor turns the designated light on
fn motion_rule(sensor_id: &str, light_id: &str) -> Rule {
    Rule::new(
        "Motion Light Rule",
        Condition::MotionDetected {
            sensor_id: sensor_id.into(),
        },
        vec![Action::TurnOn {
            device_id: light_id.into(),
        }],
    )
}

/// High total draw triggers the controller's energy-saving policy
fn energy_saving_rule(watts: f64) -> Rule {
    Rule::new(
        "Energy Saving Rule",
        Condition::PowerDrawAbove { watts },
        vec![Action::EnergySavingMode],
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tracing::info!("Starting domo demo home");

    let mut controller = Controller::new(build_home()?);
    let mut engine = Engine::new();
    engine.add_rule(motion_rule("S001", "L001"));
    engine.add_rule(energy_saving_rule(HIGH_DRAW_THRESHOLD_W));

    println!("-- initial state --");
    println!("{}", controller.status_report());

    // Motion in the living room turns the light on through the engine
    let sensor = controller
        .find_device_mut("S001")?
        .as_motion_sensor_mut()
        .context("S001 is not a motion sensor")?;
    sensor.turn_on();
    sensor.detect_motion()?;
    for outcome in engine.evaluate_rules(&mut controller) {
        tracing::info!("Rule '{}': {:?}", outcome.rule, outcome.status);
    }

    // An evening of heavy use pushes the draw past the threshold
    controller.turn_on_all_lights();
    let thermostat = controller
        .find_device_mut("T001")?
        .as_thermostat_mut()
        .context("T001 is not a thermostat")?;
    thermostat.turn_on();
    thermostat.set_temperature(28)?;
    let tv = controller
        .find_device_mut("TV001")?
        .as_smart_tv_mut()
        .context("TV001 is not a TV")?;
    tv.turn_on();
    tv.change_channel(42)?;
    tv.adjust_volume(30)?;
    println!("-- evening, total draw {:.2} W --", controller.total_power());
    println!("{}", controller.status_report());

    // The energy-saving rule reacts on the next pass
    for outcome in engine.evaluate_rules(&mut controller) {
        tracing::info!("Rule '{}': {:?}", outcome.rule, outcome.status);
    }
    println!(
        "-- after automation, total draw {:.2} W --",
        controller.total_power()
    );
    println!("{}", controller.status_report());

    println!("-- snapshot --");
    println!(
        "{}",
        serde_json::to_string_pretty(&controller.device_statuses())?
    );

    controller.turn_off_all_devices();
    tracing::info!("Demo finished, everything off");
    Ok(())
}
