/*
    Quadrature Encoder Resources
        The pulse counter is the only state shared between the edge handler
        and the control loop. The handler only adds, the loop only swaps to 0.
*/

use super::*;

/* --------------------------- Transition Table -------------------------- */
// Index = (previous AB << 2) | current AB
// Bounce (same state) and double transitions (both channels moved) count 0
pub const QUADRATURE_TABLE: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/* --------------------------- Accumulator -------------------------- */
pub struct QuadratureAccumulator {
    pulse_count: AtomicI32,
    last_state: AtomicU8,
}

impl QuadratureAccumulator {
    pub const fn new() -> Self {
        Self {
            pulse_count: AtomicI32::new(0),
            last_state: AtomicU8::new(0),
        }
    }

    /// Seeds the stored channel state with the current levels so the first
    /// edge after power-up decodes against the real position.
    pub fn prime(&self, level_a: bool, level_b: bool) {
        self.last_state.store(Self::state_of(level_a, level_b), Ordering::Relaxed);
    }

    /// Edge handler. Bounded and non-blocking, safe to call from interrupt context.
    #[inline]
    pub fn on_edge(&self, level_a: bool, level_b: bool) {
        let new_state = Self::state_of(level_a, level_b);
        let history = ((self.last_state.load(Ordering::Relaxed) << 2) | new_state) & 0x0F;
        self.last_state.store(new_state, Ordering::Relaxed);

        let increment = QUADRATURE_TABLE[history as usize];
        if increment != 0 {
            self.pulse_count.fetch_add(increment as i32, Ordering::AcqRel);
        }
    }

    /// Returns the ticks accumulated since the previous call and zeroes the counter
    /// in a single indivisible exchange.
    pub fn take(&self) -> i32 {
        return self.pulse_count.swap(0, Ordering::AcqRel);
    }

    pub fn pending(&self) -> i32 {
        return self.pulse_count.load(Ordering::Acquire);
    }

    #[inline]
    fn state_of(level_a: bool, level_b: bool) -> u8 {
        ((level_a as u8) << 1) | (level_b as u8)
    }
}

impl Default for QuadratureAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Gray code order that the table counts as +1 per step
    const FORWARD: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

    fn position_of(state: (bool, bool)) -> usize {
        FORWARD.iter().position(|s| *s == state).unwrap()
    }

    #[test]
    fn full_cycle_counts_four_quarter_steps() {
        let enc = QuadratureAccumulator::new();
        enc.prime(false, false);
        for step in 1..=4 {
            let (a, b) = FORWARD[step % 4];
            enc.on_edge(a, b);
        }
        assert_eq!(enc.take(), 4);

        for step in (0..4).rev() {
            let (a, b) = FORWARD[step];
            enc.on_edge(a, b);
        }
        assert_eq!(enc.take(), -4);
    }

    #[test]
    fn bounce_and_double_transitions_count_zero() {
        let enc = QuadratureAccumulator::new();
        enc.prime(false, false);
        enc.on_edge(false, false);
        enc.on_edge(true, true);
        enc.on_edge(false, false);
        enc.on_edge(false, false);
        assert_eq!(enc.pending(), 0);
    }

    #[test]
    fn table_is_antisymmetric() {
        for prev in 0..4usize {
            for next in 0..4usize {
                assert_eq!(QUADRATURE_TABLE[(prev << 2) | next], -QUADRATURE_TABLE[(next << 2) | prev]);
            }
        }
    }

    #[test]
    fn take_resets_counter() {
        let enc = QuadratureAccumulator::new();
        enc.on_edge(true, false);
        assert_eq!(enc.take(), 1);
        assert_eq!(enc.take(), 0);
    }

    #[test]
    fn concurrent_edges_are_never_lost() {
        let enc = QuadratureAccumulator::new();
        let edges = 20_000;

        let taken: i32 = std::thread::scope(|scope| {
            let producer = scope.spawn(|| {
                for step in 1..=edges {
                    let (a, b) = FORWARD[step % 4];
                    enc.on_edge(a, b);
                }
            });

            let mut total = 0;
            while !producer.is_finished() {
                total += enc.take();
            }
            total + enc.take()
        });

        assert_eq!(taken, edges as i32);
    }

    proptest! {
        // step: 1 forward, 3 backward, 0 bounce, 2 double transition
        #[test]
        fn net_count_matches_valid_steps(steps in proptest::collection::vec(0usize..4, 0..400)) {
            let enc = QuadratureAccumulator::new();
            enc.prime(false, false);
            let mut state = (false, false);
            let mut expected = 0i32;

            for step in steps {
                let next = FORWARD[(position_of(state) + step) % 4];
                match step {
                    1 => expected += 1,
                    3 => expected -= 1,
                    _ => {}
                }
                enc.on_edge(next.0, next.1);
                state = next;
            }

            prop_assert_eq!(enc.take(), expected);
        }

        #[test]
        fn take_is_exact_for_any_interleaving(
            batches in proptest::collection::vec(proptest::collection::vec(prop_oneof![Just(1usize), Just(3usize)], 0..50), 1..20)
        ) {
            let enc = QuadratureAccumulator::new();
            let mut state = (false, false);
            let mut accumulated = 0i32;
            let mut reported = 0i32;

            for batch in batches {
                for step in batch {
                    let next = FORWARD[(position_of(state) + step) % 4];
                    accumulated += if step == 1 { 1 } else { -1 };
                    enc.on_edge(next.0, next.1);
                    state = next;
                }
                reported += enc.take();
            }

            prop_assert_eq!(reported, accumulated);
            prop_assert_eq!(enc.pending(), 0);
        }
    }
}
