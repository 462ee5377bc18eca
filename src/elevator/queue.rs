use crate::shared::{CallType, Direction};

/**
 * Outstanding calls, one flag per floor and travel direction.
 *
 * A set flag means the cabin must stop at that floor while travelling in that direction.
 * Cabin calls carry no direction and set both flags. The queue holds presence only, no
 * ordering between calls.
 *
 * Floors passed to the queue are assumed to be in `0..n_floors`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQueue {
    up_requested: Vec<bool>,
    down_requested: Vec<bool>,
}

impl OrderQueue {
    pub fn new(n_floors: u8) -> OrderQueue {
        OrderQueue {
            up_requested: vec![false; n_floors as usize],
            down_requested: vec![false; n_floors as usize],
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.up_requested.len() as u8
    }

    pub fn set_order(&mut self, floor: u8, call: CallType) {
        let floor = floor as usize;
        match call {
            CallType::HallUp => self.up_requested[floor] = true,
            CallType::HallDown => self.down_requested[floor] = true,
            CallType::Cab => {
                self.up_requested[floor] = true;
                self.down_requested[floor] = true;
            }
        }
    }

    /// Any order in `floor..n_floors`, `floor` included.
    pub fn has_order_above(&self, floor: u8) -> bool {
        (floor as usize..self.up_requested.len()).any(|f| self.has_order_here(f as u8))
    }

    /// Any order in `0..=floor`.
    pub fn has_order_below(&self, floor: u8) -> bool {
        (0..=floor as usize)
            .rev()
            .any(|f| self.has_order_here(f as u8))
    }

    pub fn has_order_at(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_requested[floor as usize],
            Direction::Down => self.down_requested[floor as usize],
            Direction::Stop => false,
        }
    }

    pub fn has_order_here(&self, floor: u8) -> bool {
        self.up_requested[floor as usize] || self.down_requested[floor as usize]
    }

    /// Work left when continuing from `floor` in `direction`, `floor` included.
    pub fn has_order_ahead(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.has_order_above(floor),
            Direction::Down => self.has_order_below(floor),
            Direction::Stop => false,
        }
    }

    /// Like `has_order_ahead`, but `floor` itself is excluded.
    pub fn has_order_beyond(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => floor + 1 < self.n_floors() && self.has_order_above(floor + 1),
            Direction::Down => floor > 0 && self.has_order_below(floor - 1),
            Direction::Stop => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.has_order_above(0)
    }

    pub fn clear(&mut self, floor: u8) {
        self.up_requested[floor as usize] = false;
        self.down_requested[floor as usize] = false;
    }

    pub fn clear_all(&mut self) {
        self.up_requested.iter_mut().for_each(|order| *order = false);
        self.down_requested.iter_mut().for_each(|order| *order = false);
    }

    pub fn up_requests(&self) -> &[bool] {
        &self.up_requested
    }

    pub fn down_requests(&self) -> &[bool] {
        &self.down_requested
    }
}
