/*
 * Unit tests for the order queue
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod queue_tests {
    use crate::elevator::OrderQueue;
    use crate::shared::CallType::{Cab, HallDown, HallUp};
    use crate::shared::Direction::{Down, Stop, Up};

    const N_FLOORS: u8 = 4;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = OrderQueue::new(N_FLOORS);

        assert!(queue.is_empty());
        assert_eq!(queue.n_floors(), N_FLOORS);
        for floor in 0..N_FLOORS {
            assert!(!queue.has_order_above(floor));
            assert!(!queue.has_order_below(floor));
        }
    }

    #[test]
    fn test_hall_up_sets_only_up() {
        for floor in 0..N_FLOORS {
            // Arrange
            let mut queue = OrderQueue::new(N_FLOORS);

            // Act
            queue.set_order(floor, HallUp);

            // Assert
            assert!(queue.has_order_at(floor, Up));
            assert!(!queue.has_order_at(floor, Down));
        }
    }

    #[test]
    fn test_hall_down_sets_only_down() {
        let mut queue = OrderQueue::new(N_FLOORS);

        queue.set_order(2, HallDown);

        assert!(queue.has_order_at(2, Down));
        assert!(!queue.has_order_at(2, Up));
    }

    #[test]
    fn test_hall_up_leaves_existing_down_untouched() {
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(1, HallDown);

        queue.set_order(1, HallUp);

        assert!(queue.has_order_at(1, Up));
        assert!(queue.has_order_at(1, Down));
    }

    #[test]
    fn test_cab_sets_both_directions() {
        let mut queue = OrderQueue::new(N_FLOORS);

        queue.set_order(3, Cab);

        assert!(queue.has_order_at(3, Up));
        assert!(queue.has_order_at(3, Down));
        assert!(!queue.has_order_at(3, Stop));
    }

    #[test]
    fn test_set_order_is_idempotent() {
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(1, Cab);
        let before = queue.clone();

        queue.set_order(1, Cab);
        queue.set_order(1, HallUp);

        assert_eq!(queue, before);
    }

    #[test]
    fn test_clear_removes_both_and_is_idempotent() {
        // Arrange
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(2, HallUp);
        queue.set_order(2, HallDown);
        queue.set_order(0, Cab);

        // Act
        queue.clear(2);
        let after_first = queue.clone();
        queue.clear(2);

        // Assert
        assert!(!queue.has_order_at(2, Up));
        assert!(!queue.has_order_at(2, Down));
        assert!(queue.has_order_at(0, Up));
        assert_eq!(queue, after_first);
    }

    #[test]
    fn test_above_and_below_are_inclusive() {
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(2, HallDown);

        assert!(queue.has_order_above(0));
        assert!(queue.has_order_above(2));
        assert!(!queue.has_order_above(3));

        assert!(queue.has_order_below(3));
        assert!(queue.has_order_below(2));
        assert!(!queue.has_order_below(1));
    }

    #[test]
    fn test_above_matches_definition_for_every_floor() {
        // Every single-order placement against every reference floor
        for order_floor in 0..N_FLOORS {
            let mut queue = OrderQueue::new(N_FLOORS);
            queue.set_order(order_floor, HallUp);

            for floor in 0..N_FLOORS {
                assert_eq!(queue.has_order_above(floor), order_floor >= floor);
                assert_eq!(queue.has_order_below(floor), order_floor <= floor);
            }
        }
    }

    #[test]
    fn test_beyond_excludes_reference_floor() {
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(1, Cab);

        assert!(queue.has_order_ahead(1, Up));
        assert!(!queue.has_order_beyond(1, Up));
        assert!(queue.has_order_beyond(0, Up));
        assert!(queue.has_order_beyond(2, Down));
        assert!(!queue.has_order_beyond(1, Down));
        assert!(!queue.has_order_beyond(3, Up));
        assert!(!queue.has_order_beyond(0, Down));
        assert!(!queue.has_order_ahead(1, Stop));
    }

    #[test]
    fn test_clear_all_empties_everything() {
        // Arrange
        let mut queue = OrderQueue::new(N_FLOORS);
        queue.set_order(0, HallUp);
        queue.set_order(1, Cab);
        queue.set_order(3, HallDown);

        // Act
        queue.clear_all();

        // Assert
        assert!(queue.is_empty());
        for floor in 0..N_FLOORS {
            assert!(!queue.has_order_above(floor));
            assert!(!queue.has_order_below(floor));
        }
        assert_eq!(queue.up_requests(), &[false; N_FLOORS as usize]);
        assert_eq!(queue.down_requests(), &[false; N_FLOORS as usize]);
    }
}
