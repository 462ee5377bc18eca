use crate::config::HardwareConfig;
use crate::shared::{CallType, Direction};
use driver_rust::elevio::elev::Elevator;
use log::info;
use thiserror::Error;

/**
 * # Elevator IO
 * The hardware boundary of the controller.
 *
 * Every call returns immediately. Inputs are level readings taken at call time, outputs are
 * idempotent commands: repeating a command has no effect beyond the first.
 *
 * # Inputs
 * - `floor_sensor`:        Floor the cabin is stopped at right now, if any.
 * - `call_button`:         Whether the given hall or cabin button is pressed.
 * - `stop_button`:         Whether the stop button is pressed.
 * - `obstruction`:         Whether the door is blocked.
 *
 * # Outputs
 * - `motor_direction`:     Drive the motor up, down, or stop it.
 * - `door_light`:          Open (`true`) or close (`false`) the door.
 * - `call_button_light`:   Order lamp for a button.
 * - `floor_indicator`:     Floor shown on the indicator panel.
 * - `stop_button_light`:   Stop lamp.
 */
pub trait ElevatorIo {
    fn floor_sensor(&mut self) -> Option<u8>;
    fn call_button(&mut self, floor: u8, call: CallType) -> bool;
    fn stop_button(&mut self) -> bool;
    fn obstruction(&mut self) -> bool;

    fn motor_direction(&mut self, direction: Direction);
    fn door_light(&mut self, open: bool);
    fn call_button_light(&mut self, floor: u8, call: CallType, on: bool);
    fn floor_indicator(&mut self, floor: u8);
    fn stop_button_light(&mut self, on: bool);
}

#[derive(Error, Debug)]
pub enum HardwareError {
    #[error("unable to connect to elevator server at {address}: {source}")]
    Connect {
        address: String,
        source: std::io::Error,
    },
}

/**
 * # Elevator Driver
 * `ElevatorIo` over the TCP elevator server protocol.
 *
 * The driver is cheap to clone and every clone talks to the same connection, which lets the
 * interrupt handler keep its own handle for stopping the motor.
 */
#[derive(Clone)]
pub struct ElevatorDriver {
    elevator: Elevator,
}

impl ElevatorDriver {
    pub fn connect(config: &HardwareConfig, n_floors: u8) -> Result<ElevatorDriver, HardwareError> {
        let address = format!("{}:{}", config.driver_address, config.driver_port);
        let elevator = Elevator::init(&address, n_floors).map_err(|source| HardwareError::Connect {
            address: address.clone(),
            source,
        })?;
        info!("Connected to elevator server at {} ({} floors)", address, n_floors);

        Ok(ElevatorDriver { elevator })
    }
}

impl ElevatorIo for ElevatorDriver {
    fn floor_sensor(&mut self) -> Option<u8> {
        self.elevator.floor_sensor()
    }

    fn call_button(&mut self, floor: u8, call: CallType) -> bool {
        self.elevator.call_button(floor, call.to_u8())
    }

    fn stop_button(&mut self) -> bool {
        self.elevator.stop_button()
    }

    fn obstruction(&mut self) -> bool {
        self.elevator.obstruction()
    }

    fn motor_direction(&mut self, direction: Direction) {
        self.elevator.motor_direction(direction.to_u8());
    }

    fn door_light(&mut self, open: bool) {
        self.elevator.door_light(open);
    }

    fn call_button_light(&mut self, floor: u8, call: CallType, on: bool) {
        self.elevator.call_button_light(floor, call.to_u8(), on);
    }

    fn floor_indicator(&mut self, floor: u8) {
        self.elevator.floor_indicator(floor);
    }

    fn stop_button_light(&mut self, on: bool) {
        self.elevator.stop_button_light(on);
    }
}
