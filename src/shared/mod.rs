#[macro_use]
pub mod macros;
pub mod structs;

pub use structs::CallType;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::ElevatorState;
