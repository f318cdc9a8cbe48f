//! Presentation state read by the renderer

use crate::{
    background::{Background, BackgroundIndex},
    clock::{DateText, TimeText},
};

/// What the current frame shows.
///
/// Only the [`RefreshController`](crate::controller::RefreshController)
/// writes it; everything else gets a shared reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationState {
    displayed_time: TimeText,
    displayed_date: DateText,
    background: BackgroundIndex,
}

impl PresentationState {
    /// Placeholder labels until the first tick.
    pub(crate) fn new(background: BackgroundIndex) -> Self {
        Self {
            displayed_time: TimeText::from("22:22"),
            displayed_date: DateText::from("22 JAN"),
            background,
        }
    }

    pub fn displayed_time(&self) -> &str {
        &self.displayed_time
    }

    pub fn displayed_date(&self) -> &str {
        &self.displayed_date
    }

    pub fn background_index(&self) -> BackgroundIndex {
        self.background
    }

    pub fn background(&self) -> Background {
        self.background.background()
    }

    pub(crate) fn publish(&mut self, time: TimeText, date: DateText, background: BackgroundIndex) {
        self.displayed_time = time;
        self.displayed_date = date;
        self.background = background;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_placeholders() {
        let state = PresentationState::new(BackgroundIndex::new(1).unwrap());
        assert_eq!(state.displayed_time(), "22:22");
        assert_eq!(state.displayed_date(), "22 JAN");
        assert_eq!(state.background(), Background::Grass);
    }

    #[test]
    fn publish_replaces_everything() {
        let mut state = PresentationState::new(BackgroundIndex::new(0).unwrap());
        state.publish(
            TimeText::from("09:15"),
            DateText::from("01 MAR"),
            BackgroundIndex::new(3).unwrap(),
        );
        assert_eq!(state.displayed_time(), "09:15");
        assert_eq!(state.displayed_date(), "01 MAR");
        assert_eq!(state.background_index().get(), 3);
    }
}
