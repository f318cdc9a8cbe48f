use chrono::{Duration, NaiveDate, NaiveDateTime};
use watchface::{
    controller::advances_background, BackgroundIndex, ClockStyle, RefreshController, Session,
    StaticAssets,
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 22)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn index_after(start: u8, minutes: &[u32]) -> Vec<u8> {
    let mut controller = RefreshController::new(BackgroundIndex::new(start).unwrap());
    minutes
        .iter()
        .map(|minute| {
            controller.on_minute_tick(&at(12, *minute), &ClockStyle::TwentyFourHour);
            controller.state().background_index().get()
        })
        .collect()
}

#[test]
fn background_holds_then_rotates_at_quarter_past() {
    assert_eq!(index_after(2, &[14, 15, 16]), [2, 3, 3]);
}

#[test]
fn background_wraps_at_quarter_to() {
    assert_eq!(index_after(3, &[45]), [0]);
}

#[test]
fn twelve_hour_clock_rotates_on_the_same_minutes() {
    for minute in 0..60u32 {
        let mut h12 = RefreshController::new(BackgroundIndex::new(0).unwrap());
        let mut h24 = RefreshController::new(BackgroundIndex::new(0).unwrap());
        let a = h12.on_minute_tick(&at(13, minute), &ClockStyle::TwelveHour);
        let b = h24.on_minute_tick(&at(13, minute), &ClockStyle::TwentyFourHour);
        assert_eq!(a, b);
        assert_eq!(a.background_changed, advances_background(minute as u8));
    }
}

#[test]
fn session_runs_across_midnight() {
    let mut assets = StaticAssets::new(ClockStyle::TwentyFourHour);
    {
        let mut session = Session::start(&mut assets, 1_705_932_300).unwrap();
        let start = session.state().background_index().get();

        let mut now = at(23, 50);
        let mut rotations = 0;
        for _ in 0..20 {
            rotations += session.on_minute_tick(&now).background_changed as u8;
            now += Duration::minutes(1);
        }

        // 00:00 is the only quarter hour in 23:50..00:10
        assert_eq!(rotations, 1);
        assert_eq!(session.state().background_index().get(), (start + 1) % 4);
        assert_eq!(session.state().displayed_time(), "00:09");
        assert_eq!(session.state().displayed_date(), "23 JAN");
    }
    assert_eq!(assets.live_handles(), 0);
}
