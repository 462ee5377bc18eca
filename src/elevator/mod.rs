pub mod fsm;
pub mod hardware;
#[cfg(test)]
pub mod mock_io;
pub mod queue;
pub mod queue_tests;
pub mod timer;

pub use fsm::ElevatorFSM;
pub use hardware::{ElevatorDriver, ElevatorIo};
#[cfg(test)]
pub use mock_io::MockIo;
pub use queue::OrderQueue;
pub use timer::Timer;
