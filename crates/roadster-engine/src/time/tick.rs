use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// The simulation advances in fixed ticks regardless of the render frame
/// rate: each frame's (variable) delta time is accumulated, and the caller
/// runs one integrator step per whole tick reported by [`advance`]. The
/// fractional remainder carries into the next frame, so the long-run tick
/// rate tracks the monotonic clock instead of drifting the way a
/// fixed-delay reschedule loop does.
///
/// [`advance`]: TickAccumulator::advance
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    tick: Duration,
    accumulated: Duration,
    max_ticks_per_frame: u32,
}

impl TickAccumulator {
    /// The demo's simulation tick length: 20 ms, i.e. 50 Hz.
    pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

    pub fn new(tick: Duration) -> Self {
        debug_assert!(!tick.is_zero());
        Self {
            tick,
            accumulated: Duration::ZERO,
            // Catch-up bound after a long stall. Combined with the frame
            // clock's dt clamp this keeps a single frame from running an
            // unbounded burst of ticks.
            max_ticks_per_frame: 16,
        }
    }

    /// Adds `dt` of elapsed real time and returns how many whole ticks the
    /// simulation should run now.
    ///
    /// If the accumulated backlog exceeds the catch-up bound, the excess
    /// whole ticks are discarded: the simulation slows down rather than
    /// spiraling.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulated += dt;

        let mut ticks = 0;
        while self.accumulated >= self.tick && ticks < self.max_ticks_per_frame {
            self.accumulated -= self.tick;
            ticks += 1;
        }

        if self.accumulated >= self.tick {
            // Keep only the sub-tick remainder of the dropped backlog.
            let nanos = self.accumulated.as_nanos() % self.tick.as_nanos();
            self.accumulated = Duration::from_nanos(nanos as u64);
        }

        ticks
    }

    /// Drops any accumulated backlog. Useful when resuming after a pause.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut acc = TickAccumulator::new(ms(20));
        assert_eq!(acc.advance(ms(15)), 0);
        // 15 + 15 = 30 -> one tick, 10 ms remainder.
        assert_eq!(acc.advance(ms(15)), 1);
        assert_eq!(acc.advance(ms(15)), 1);
    }

    #[test]
    fn exact_tick_runs_once() {
        let mut acc = TickAccumulator::new(ms(20));
        assert_eq!(acc.advance(ms(20)), 1);
        assert_eq!(acc.advance(ms(20)), 1);
    }

    #[test]
    fn long_frame_runs_multiple_ticks() {
        let mut acc = TickAccumulator::new(ms(20));
        assert_eq!(acc.advance(ms(100)), 5);
    }

    #[test]
    fn stall_is_bounded_and_backlog_dropped() {
        let mut acc = TickAccumulator::new(ms(20));
        // A 10-second stall must not run 500 ticks.
        assert_eq!(acc.advance(ms(10_000)), 16);
        // The excess backlog was discarded, not deferred.
        assert_eq!(acc.advance(Duration::ZERO), 0);
    }

    #[test]
    fn remainder_survives_backlog_drop() {
        let mut acc = TickAccumulator::new(ms(20));
        // 16 ticks consumed, backlog dropped, 5 ms remainder kept.
        assert_eq!(acc.advance(ms(1000 + 5)), 16);
        assert_eq!(acc.advance(ms(15)), 1);
    }

    #[test]
    fn reset_drops_partial_accumulation() {
        let mut acc = TickAccumulator::new(ms(20));
        acc.advance(ms(19));
        acc.reset();
        assert_eq!(acc.advance(ms(19)), 0);
    }
}
