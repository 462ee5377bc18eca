/***************************************/
/*         In-memory hardware          */
/***************************************/
use std::collections::{HashMap, HashSet, VecDeque};

use crate::elevator::ElevatorIo;
use crate::shared::{CallType, Direction};

/**
 * Scriptable stand-in for the elevator hardware used by the controller tests.
 *
 * Inputs are plain fields the test sets between ticks. `floor_script` is drained one reading
 * per `floor_sensor` call before falling back to `floor`. Outputs record the last commanded
 * value, and `motor_commands` keeps the full motor history.
 */
#[derive(Debug, Clone)]
pub struct MockIo {
    // Inputs
    pub floor: Option<u8>,
    pub floor_script: VecDeque<Option<u8>>,
    pub pressed: HashSet<(u8, CallType)>,
    pub stop: bool,
    pub obstruction: bool,

    // Outputs
    pub motor: Direction,
    pub motor_commands: Vec<Direction>,
    pub door_open: bool,
    pub lamps: HashMap<(u8, CallType), bool>,
    pub floor_indicator: Option<u8>,
    pub stop_lamp: bool,
}

impl MockIo {
    pub fn new() -> MockIo {
        MockIo {
            floor: None,
            floor_script: VecDeque::new(),
            pressed: HashSet::new(),
            stop: false,
            obstruction: false,
            motor: Direction::Stop,
            motor_commands: Vec::new(),
            door_open: false,
            lamps: HashMap::new(),
            floor_indicator: None,
            stop_lamp: false,
        }
    }

    pub fn at_floor(floor: u8) -> MockIo {
        MockIo {
            floor: Some(floor),
            ..MockIo::new()
        }
    }

    pub fn press(&mut self, floor: u8, call: CallType) {
        self.pressed.insert((floor, call));
    }

    pub fn release(&mut self, floor: u8, call: CallType) {
        self.pressed.remove(&(floor, call));
    }

    pub fn lamp(&self, floor: u8, call: CallType) -> bool {
        self.lamps.get(&(floor, call)).copied().unwrap_or(false)
    }

    pub fn any_lamp_lit(&self) -> bool {
        self.lamps.values().any(|&on| on)
    }
}

impl ElevatorIo for MockIo {
    fn floor_sensor(&mut self) -> Option<u8> {
        match self.floor_script.pop_front() {
            Some(reading) => reading,
            None => self.floor,
        }
    }

    fn call_button(&mut self, floor: u8, call: CallType) -> bool {
        self.pressed.contains(&(floor, call))
    }

    fn stop_button(&mut self) -> bool {
        self.stop
    }

    fn obstruction(&mut self) -> bool {
        self.obstruction
    }

    fn motor_direction(&mut self, direction: Direction) {
        self.motor = direction;
        self.motor_commands.push(direction);
    }

    fn door_light(&mut self, open: bool) {
        self.door_open = open;
    }

    fn call_button_light(&mut self, floor: u8, call: CallType, on: bool) {
        self.lamps.insert((floor, call), on);
    }

    fn floor_indicator(&mut self, floor: u8) {
        self.floor_indicator = Some(floor);
    }

    fn stop_button_light(&mut self, on: bool) {
        self.stop_lamp = on;
    }
}
