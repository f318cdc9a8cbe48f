//! Minute tick handling

use chrono::{Datelike, Timelike};

use crate::{
    background::BackgroundIndex,
    clock::{self, Locale},
    state::PresentationState,
};

/// Minutes past the hour on which the background rotates.
const ROTATION_INTERVAL: u8 = 15;

/// Whether the background rotates on `minute` past the hour.
pub fn advances_background(minute: u8) -> bool {
    minute % ROTATION_INTERVAL == 0
}

/// Outcome of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Refresh {
    pub background_changed: bool,
}

/// Turns minute ticks into presentation state.
pub struct RefreshController {
    state: PresentationState,
}

impl RefreshController {
    pub fn new(background: BackgroundIndex) -> Self {
        Self {
            state: PresentationState::new(background),
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    /// Update the labels for `now` and rotate the background on quarter hours.
    pub fn on_minute_tick<T, L>(&mut self, now: &T, locale: &L) -> Refresh
    where
        T: Datelike + Timelike,
        L: Locale + ?Sized,
    {
        let time = clock::format_time(now, locale.clock_style());
        let date = clock::format_date(now);

        let mut background = self.state.background_index();
        let background_changed = advances_background(clock::minute_of(&time));
        if background_changed {
            background = background.advance();
            debug!("Background rotated to {}", background.get());
        }

        self.state.publish(time, date, background);

        Refresh { background_changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockStyle;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 22)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn controller(index: u8) -> RefreshController {
        RefreshController::new(BackgroundIndex::new(index).unwrap())
    }

    #[test]
    fn quarter_hours_rotate() {
        for minute in 0..60u8 {
            let expected = matches!(minute, 0 | 15 | 30 | 45);
            assert_eq!(advances_background(minute), expected, "minute {}", minute);
        }
    }

    #[test]
    fn tick_publishes_labels() {
        let mut controller = controller(0);
        controller.on_minute_tick(&at(14, 5), &ClockStyle::TwentyFourHour);
        assert_eq!(controller.state().displayed_time(), "14:05");
        assert_eq!(controller.state().displayed_date(), "22 JAN");

        controller.on_minute_tick(&at(14, 6), &ClockStyle::TwelveHour);
        assert_eq!(controller.state().displayed_time(), "02:06");
    }

    #[test]
    fn rotates_only_on_quarter_hours() {
        let mut controller = controller(2);
        let mut steps = [0u8; 3];
        for (step, minute) in steps.iter_mut().zip([14, 15, 16]) {
            controller.on_minute_tick(&at(10, minute), &ClockStyle::TwentyFourHour);
            *step = controller.state().background_index().get();
        }
        assert_eq!(steps, [2, 3, 3]);
    }

    #[test]
    fn rotation_wraps() {
        let mut controller = controller(3);
        let refresh = controller.on_minute_tick(&at(8, 45), &ClockStyle::TwentyFourHour);
        assert!(refresh.background_changed);
        assert_eq!(controller.state().background_index().get(), 0);
    }

    #[test]
    fn full_day_stays_in_range() {
        for seed in 0..4 {
            let mut controller = controller(seed);
            let mut rotations = 0u32;
            for hour in 0..24 {
                for minute in 0..60 {
                    let refresh =
                        controller.on_minute_tick(&at(hour, minute), &ClockStyle::TwelveHour);
                    rotations += refresh.background_changed as u32;
                    assert!(controller.state().background_index().get() < 4);
                }
            }
            assert_eq!(rotations, 96);
            // 96 rotations is a whole number of cycles
            assert_eq!(controller.state().background_index().get(), seed);
        }
    }
}
