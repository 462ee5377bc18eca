use crate::config::ElevatorConfig;
use crate::elevator::{ElevatorIo, OrderQueue, Timer};
use crate::shared::{CallType, Direction, ElevatorSnapshot, ElevatorState};
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/**
 * Everything the controller decides on, owned by exactly one `ElevatorFSM`.
 *
 * # Fields
 * - `behaviour`:           Active state of the machine.
 * - `current_floor`:       Last floor a floor sensor fired at. Stale between floors.
 * - `motion`:              Direction of travel, kept while standing still to pick the next sweep.
 * - `door_open`:           Whether the door is currently commanded open.
 * - `door_timer`:          Door hold timer, re-armed on door open and on obstruction.
 * - `motor_watchdog`:      Optional timer re-armed on every floor sensor reading while driving.
 * - `stop_released_ticks`: Consecutive ticks the stop button has read released in emergency.
 * - `queue`:               Outstanding orders.
 */
#[derive(Debug, Clone)]
pub struct ControllerState {
    pub behaviour: ElevatorState,
    pub current_floor: u8,
    pub motion: Direction,
    pub door_open: bool,
    pub door_timer: Timer,
    pub motor_watchdog: Option<Timer>,
    pub stop_released_ticks: u32,
    pub queue: OrderQueue,
}

impl ControllerState {
    pub fn new(config: &ElevatorConfig) -> ControllerState {
        ControllerState {
            behaviour: ElevatorState::Standby,
            current_floor: 0,
            motion: Direction::Down,
            door_open: false,
            door_timer: Timer::new(Duration::from_millis(config.door_open_time)),
            motor_watchdog: config
                .motor_timeout
                .map(|timeout| Timer::new(Duration::from_millis(timeout))),
            stop_released_ticks: 0,
            queue: OrderQueue::new(config.n_floors),
        }
    }
}

/**
 * Controls a single elevator cabin.
 *
 * The `ElevatorFSM` polls the hardware once per tick, merges pressed buttons into the order
 * queue and runs the handler of the active state. Each handler issues at most one set of
 * hardware commands and moves the machine to its next state.
 *
 * The cabin serves calls in a directional sweep: it keeps travelling in `motion` while orders
 * remain ahead, and reverses only once they are exhausted.
 *
 * # Fields
 * - `io`:                  Hardware the controller reads and commands.
 * - `state`:               Controller state aggregate.
 * - `n_floors`:            Number of floors served.
 * - `stop_release_ticks`:  Released readings required before leaving emergency.
 * - `tick_period`:         Sleep between ticks in `run`.
 * - `status_tx`:           Publishes a snapshot on every state transition.
 * - `terminate_rx`:        Stops `home` and `run`, leaving the motor stopped.
 */
pub struct ElevatorFSM<H: ElevatorIo> {
    io: H,
    state: ControllerState,
    n_floors: u8,
    stop_release_ticks: u32,
    tick_period: Duration,
    status_tx: cbc::Sender<ElevatorSnapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl<H: ElevatorIo> ElevatorFSM<H> {
    pub fn new(
        config: &ElevatorConfig,
        io: H,
        status_tx: cbc::Sender<ElevatorSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorFSM<H> {
        ElevatorFSM {
            io,
            state: ControllerState::new(config),
            n_floors: config.n_floors,
            stop_release_ticks: config.stop_release_ticks,
            tick_period: Duration::from_millis(config.tick_period),
            status_tx,
            terminate_rx,
        }
    }

    /// Homes the cabin and runs the control loop until a terminate message arrives.
    pub fn run(mut self) {
        if self.home() {
            info!("Elevator ready, entering control loop");
            loop {
                self.tick(Instant::now());

                cbc::select! {
                    recv(self.terminate_rx) -> _ => break,
                    default(self.tick_period) => {}
                }
            }
        }

        self.io.motor_direction(Direction::Stop);
        info!("Elevator controller stopped");
    }

    /// Drives down until the floor 0 sensor fires, then opens the door there.
    ///
    /// Returns `false` if terminated before reaching floor 0.
    pub fn home(&mut self) -> bool {
        info!("Homing to floor 0");

        loop {
            match self.io.floor_sensor() {
                Some(0) => break,
                Some(floor) => self.io.floor_indicator(floor),
                None => {}
            }
            self.io.motor_direction(Direction::Down);

            cbc::select! {
                recv(self.terminate_rx) -> _ => return false,
                default(self.tick_period) => {}
            }
        }

        self.io.motor_direction(Direction::Stop);
        self.io.floor_indicator(0);
        self.state.current_floor = 0;
        self.state.motion = Direction::Down;
        self.open_door(Instant::now());
        self.state.behaviour = ElevatorState::DoorOpen;

        info!("Homing complete at floor 0");
        self.publish_status();
        true
    }

    /// Runs one evaluation of the state machine at time `now`.
    pub fn tick(&mut self, now: Instant) {
        let previous = self.state.behaviour;

        match self.state.behaviour {
            ElevatorState::Standby => self.tick_standby(now),
            ElevatorState::Driving => self.tick_driving(now),
            ElevatorState::DoorOpen => self.tick_door_open(now),
            ElevatorState::Emergency => self.tick_emergency(now),
        }

        if self.state.behaviour != previous {
            info!(
                "{:?} -> {:?} (floor {}, motion {:?})",
                previous, self.state.behaviour, self.state.current_floor, self.state.motion
            );
            self.publish_status();
        }
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            state: self.state.behaviour,
            floor: self.state.current_floor,
            direction: self.state.motion,
            up_requests: self.state.queue.up_requests().to_vec(),
            down_requests: self.state.queue.down_requests().to_vec(),
        }
    }

    /***************************************/
    /*           State handlers            */
    /***************************************/
    fn tick_standby(&mut self, now: Instant) {
        self.poll_orders();
        if self.check_stop_button() {
            return;
        }

        let floor = self.state.current_floor;
        let motion = self.state.motion;

        if self.state.queue.has_order_ahead(floor, motion) {
            self.start_driving(motion, now);
        } else if self.state.queue.has_order_ahead(floor, motion.opposite()) {
            self.start_driving(motion.opposite(), now);
        }
    }

    fn tick_driving(&mut self, now: Instant) {
        self.poll_orders();
        if self.check_stop_button() {
            return;
        }

        let floor = match self.io.floor_sensor() {
            Some(floor) => floor,
            None => {
                if self.watchdog_expired(now) {
                    self.trip_watchdog();
                } else {
                    self.io.motor_direction(self.state.motion);
                }
                return;
            }
        };

        self.state.current_floor = floor;
        self.io.floor_indicator(floor);
        if let Some(watchdog) = self.state.motor_watchdog.as_mut() {
            watchdog.start(now);
        }

        let motion = self.state.motion;
        let queue = &self.state.queue;
        let orders_beyond = queue.has_order_beyond(floor, motion);

        if queue.has_order_at(floor, motion) {
            self.stop_at_floor(floor, now);
        } else if queue.has_order_here(floor) && !orders_beyond {
            // End of the sweep, the call here is for the way back
            self.state.motion = motion.opposite();
            self.stop_at_floor(floor, now);
        } else if queue.is_empty() {
            self.io.motor_direction(Direction::Stop);
            self.state.behaviour = ElevatorState::Standby;
        } else if !orders_beyond {
            self.state.motion = motion.opposite();
            self.io.motor_direction(self.state.motion);
        } else {
            self.io.motor_direction(motion);
        }
    }

    fn tick_door_open(&mut self, now: Instant) {
        self.poll_orders();
        if self.check_stop_button() {
            return;
        }

        if self.io.obstruction() || !self.state.door_timer.is_running() {
            self.state.door_timer.start(now);
            self.io.door_light(true);
            return;
        }

        if self.state.door_timer.is_expired(now) {
            self.io.door_light(false);
            self.state.door_open = false;
            self.state.door_timer.stop();
            self.state.behaviour = ElevatorState::Standby;
        } else {
            self.io.door_light(true);
        }
    }

    fn tick_emergency(&mut self, now: Instant) {
        self.io.motor_direction(Direction::Stop);
        self.state.queue.clear_all();
        self.clear_all_order_lamps();

        if let Some(floor) = self.io.floor_sensor() {
            self.state.current_floor = floor;
            self.io.floor_indicator(floor);
            self.io.door_light(true);
            self.state.door_open = true;
        }

        if self.io.stop_button() {
            self.state.stop_released_ticks = 0;
            return;
        }

        self.state.stop_released_ticks += 1;
        if self.state.stop_released_ticks < self.stop_release_ticks {
            return;
        }

        self.io.stop_button_light(false);
        self.state.stop_released_ticks = 0;
        if self.state.door_open {
            self.state.door_timer.start(now);
            self.state.behaviour = ElevatorState::DoorOpen;
        } else {
            self.state.behaviour = ElevatorState::Standby;
        }
    }

    /***************************************/
    /*              Helpers                */
    /***************************************/

    // Level triggered, a held button keeps re-setting its order
    fn poll_orders(&mut self) {
        for floor in 0..self.n_floors {
            for call in CallType::ALL {
                if !call.exists_at(floor, self.n_floors) {
                    continue;
                }
                if self.io.call_button(floor, call) {
                    if !self.is_ordered(floor, call) {
                        debug!("New order: {:?} at floor {}", call, floor);
                    }
                    self.state.queue.set_order(floor, call);
                    self.io.call_button_light(floor, call, true);
                }
            }
        }
    }

    fn is_ordered(&self, floor: u8, call: CallType) -> bool {
        let queue = &self.state.queue;
        match call {
            CallType::HallUp => queue.has_order_at(floor, Direction::Up),
            CallType::HallDown => queue.has_order_at(floor, Direction::Down),
            CallType::Cab => {
                queue.has_order_at(floor, Direction::Up) && queue.has_order_at(floor, Direction::Down)
            }
        }
    }

    fn check_stop_button(&mut self) -> bool {
        if !self.io.stop_button() {
            return false;
        }

        warn!("Stop button pressed at floor {}", self.state.current_floor);
        self.io.motor_direction(Direction::Stop);
        self.io.stop_button_light(true);
        self.state.stop_released_ticks = 0;
        self.state.behaviour = ElevatorState::Emergency;
        true
    }

    fn start_driving(&mut self, direction: Direction, now: Instant) {
        self.state.motion = direction;
        self.io.motor_direction(direction);
        if let Some(watchdog) = self.state.motor_watchdog.as_mut() {
            watchdog.start(now);
        }
        self.state.behaviour = ElevatorState::Driving;
    }

    fn stop_at_floor(&mut self, floor: u8, now: Instant) {
        self.io.motor_direction(Direction::Stop);
        self.state.queue.clear(floor);
        self.clear_order_lamps(floor);
        self.open_door(now);
        self.state.behaviour = ElevatorState::DoorOpen;
    }

    fn open_door(&mut self, now: Instant) {
        self.io.door_light(true);
        self.state.door_open = true;
        self.state.door_timer.start(now);
    }

    fn clear_order_lamps(&mut self, floor: u8) {
        for call in CallType::ALL {
            if call.exists_at(floor, self.n_floors) {
                self.io.call_button_light(floor, call, false);
            }
        }
    }

    fn clear_all_order_lamps(&mut self) {
        for floor in 0..self.n_floors {
            self.clear_order_lamps(floor);
        }
    }

    fn watchdog_expired(&self, now: Instant) -> bool {
        self.state
            .motor_watchdog
            .as_ref()
            .map_or(false, |watchdog| watchdog.is_expired(now))
    }

    fn trip_watchdog(&mut self) {
        warn!(
            "No floor reached while driving {:?} from floor {}, stopping motor and dropping orders",
            self.state.motion, self.state.current_floor
        );
        self.io.motor_direction(Direction::Stop);
        self.state.queue.clear_all();
        self.clear_all_order_lamps();
        if let Some(watchdog) = self.state.motor_watchdog.as_mut() {
            watchdog.stop();
        }
        self.state.behaviour = ElevatorState::Standby;
    }

    fn publish_status(&self) {
        let _ = self.status_tx.send(self.snapshot());
    }

    /***************************************/
    /*           Test accessors            */
    /***************************************/
    #[cfg(test)]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    #[cfg(test)]
    pub fn io(&self) -> &H {
        &self.io
    }

    #[cfg(test)]
    pub fn io_mut(&mut self) -> &mut H {
        &mut self.io
    }
}
