/***************************************/
/*        3rd party libraries          */
/***************************************/
use driver_rust::elevio::elev::{CAB, DIRN_DOWN, DIRN_STOP, DIRN_UP, HALL_DOWN, HALL_UP};
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorState {
    #[serde(rename = "standby")]
    Standby,
    #[serde(rename = "driving")]
    Driving,
    #[serde(rename = "doorOpen")]
    DoorOpen,
    #[serde(rename = "emergency")]
    Emergency,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    pub fn to_u8(&self) -> u8 {
        match *self {
            Direction::Up => DIRN_UP,
            Direction::Down => DIRN_DOWN,
            Direction::Stop => DIRN_STOP,
        }
    }

    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Stop => Direction::Stop,
        }
    }
}

/// Button panel a call originates from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CallType {
    HallUp,
    HallDown,
    Cab,
}

impl CallType {
    pub const ALL: [CallType; 3] = [CallType::HallUp, CallType::HallDown, CallType::Cab];

    pub fn to_u8(&self) -> u8 {
        match *self {
            CallType::HallUp => HALL_UP,
            CallType::HallDown => HALL_DOWN,
            CallType::Cab => CAB,
        }
    }

    /// There is no up button at the top floor and no down button at the ground floor.
    pub fn exists_at(&self, floor: u8, n_floors: u8) -> bool {
        match *self {
            CallType::HallUp => floor < n_floors.saturating_sub(1),
            CallType::HallDown => floor > 0,
            CallType::Cab => true,
        }
    }
}

/**
 * Snapshot of the controller published on every state transition.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub state: ElevatorState,
    pub floor: u8,
    pub direction: Direction,
    #[serde(rename = "upRequests")]
    pub up_requests: Vec<bool>,
    #[serde(rename = "downRequests")]
    pub down_requests: Vec<bool>,
}
