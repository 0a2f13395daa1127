use log::warn;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    /// The snake filled the board
    Won,
}

/// Fixed tick-rate pacing combined with the play state
pub struct Control {
    tick_duration: Duration,
    last_update: Instant,

    // fraction of a tick that has elapsed but not yet
    // been accounted for (included next time)
    remainder: f64,

    // number of ticks that still need to be performed
    // to catch up with the current time
    missed_updates: Option<usize>,

    game_state: State,
}

impl Control {
    /// Ticks beyond this are dropped instead of being played
    /// back to back after a long stall
    const MAX_CATCH_UP: usize = 5;

    pub fn new(tick_rate: u32) -> Self {
        Self::new_at(tick_rate, Instant::now())
    }

    fn new_at(tick_rate: u32, now: Instant) -> Self {
        Self {
            tick_duration: Duration::from_secs_f64(1. / tick_rate.max(1) as f64),
            last_update: now,
            remainder: 0.,
            missed_updates: None,
            game_state: State::Playing,
        }
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    fn can_update_at(&mut self, now: Instant) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // how many ticks should have happened since the last call
                let ticks = now.duration_since(self.last_update).as_secs_f64()
                    / self.tick_duration.as_secs_f64()
                    + self.remainder;
                let mut missed_updates = ticks as usize;

                if missed_updates > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = now;

                    if missed_updates > Self::MAX_CATCH_UP {
                        warn!("falling behind, skipping {} ticks", missed_updates - Self::MAX_CATCH_UP);
                        missed_updates = Self::MAX_CATCH_UP;
                    }
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self) {
        self.game_state = State::Playing;
        self.last_update = Instant::now();
        self.remainder = 0.;
    }

    pub fn pause(&mut self) {
        self.game_state = State::Paused;
        self.missed_updates = None;
    }

    pub fn win(&mut self) {
        self.game_state = State::Won;
        self.missed_updates = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_updates(control: &mut Control, now: Instant) -> usize {
        let mut n = 0;
        while control.can_update_at(now) {
            n += 1;
        }
        n
    }

    #[test]
    fn test_ticks_follow_elapsed_time() {
        let start = Instant::now();
        let mut control = Control::new_at(20, start);

        assert_eq!(count_updates(&mut control, start + Duration::from_millis(10)), 0);
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(60)), 1);
        // 60ms -> 160ms is two ticks (plus the 10ms remainder)
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(160)), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let start = Instant::now();
        let mut control = Control::new_at(20, start);
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(10)), Control::MAX_CATCH_UP);
    }

    #[test]
    fn test_no_updates_unless_playing() {
        let start = Instant::now();
        let mut control = Control::new_at(20, start);
        control.pause();
        assert_eq!(control.state(), State::Paused);
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(1)), 0);

        control.win();
        assert_eq!(control.state(), State::Won);
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(1)), 0);
    }
}
