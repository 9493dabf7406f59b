use std::time::{Duration, Instant};

pub struct Sleeper {
    target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out whatever is left of the current frame. Returns false when the frame ran late.
    pub fn sleep(&mut self) -> bool {
        let remaining = match self.last_instant {
            Some(last_instant) => self.target_delta_time.checked_sub(last_instant.elapsed()),
            None => Some(self.target_delta_time),
        };

        let slept = match remaining {
            Some(remaining) if !remaining.is_zero() => {
                spin_sleep::sleep(remaining);
                true
            }
            _ => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn first_sleep_waits_a_whole_frame() {
        let mut sleeper = Sleeper::new(Duration::from_millis(20));

        let start = Instant::now();
        assert!(sleeper.sleep());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn late_frame_does_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_millis(5));
        sleeper.sleep();

        thread::sleep(Duration::from_millis(30));
        assert!(!sleeper.sleep());
    }

    #[test]
    fn zero_interval_never_sleeps() {
        let mut sleeper = Sleeper::new(Duration::ZERO);
        assert!(!sleeper.sleep());
        assert!(!sleeper.sleep());
    }
}
