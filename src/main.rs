/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::thread::Builder;

/* Custom libraries */
use elevator::{ElevatorDriver, ElevatorFSM, ElevatorIo};
use shared::{Direction, ElevatorSnapshot};

/* Modules */
#[macro_use]
mod shared;
mod config;
mod elevator;

/* Command line */
#[derive(Parser, Debug)]
#[clap(author, version, about = "Controller for a single elevator cabin")]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Elevator server host, overrides the configuration file
    #[clap(long)]
    address: Option<String>,

    /// Elevator server port, overrides the configuration file
    #[clap(short, long)]
    port: Option<u16>,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let args = Args::parse();
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(address) = args.address {
        config.hardware.driver_address = address;
    }
    if let Some(port) = args.port {
        config.hardware.driver_port = port;
    }

    // Connect to the hardware
    let driver = unwrap_or_exit!(ElevatorDriver::connect(
        &config.hardware,
        config.elevator.n_floors
    ));

    // Initialize channels
    let (status_tx, status_rx) = cbc::unbounded::<ElevatorSnapshot>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Stop the motor from the handler itself, then let the control loop wind down
    let mut interrupt_driver = driver.clone();
    unwrap_or_exit!(ctrlc::set_handler(move || {
        info!("Terminating elevator");
        interrupt_driver.motor_direction(Direction::Stop);
        let _ = terminate_tx.send(());
    }));

    // Start the status logger
    let status_thread = Builder::new().name("status".into());
    unwrap_or_exit!(status_thread.spawn(move || {
        for snapshot in status_rx.iter() {
            match serde_json::to_string(&snapshot) {
                Ok(json) => debug!("Status: {}", json),
                Err(e) => warn!("Failed to serialize status: {}", e),
            }
        }
    }));

    // Start the elevator module
    let elevator_fsm = ElevatorFSM::new(&config.elevator, driver, status_tx, terminate_rx);

    let elevator_fsm_thread = Builder::new().name("elevator_fsm".into());
    let elevator_fsm_handle = unwrap_or_exit!(elevator_fsm_thread.spawn(move || elevator_fsm.run()));

    if elevator_fsm_handle.join().is_err() {
        error!("Elevator controller thread panicked");
        std::process::exit(1);
    }
}
