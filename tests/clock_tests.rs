use std::num::NonZeroU64;

use rail_itinerary::clock::{add_elapsed, elapsed_minutes, render_arrival, ClockTime, UNREACHED_CLOCK};
use rail_itinerary::Error;

fn velocity(v: u64) -> NonZeroU64 {
    NonZeroU64::new(v).unwrap()
}

#[test]
fn test_elapsed_minutes_truncates() {
    assert_eq!(elapsed_minutes(9, velocity(2)), 4);
    assert_eq!(elapsed_minutes(10, velocity(2)), 5);
    assert_eq!(elapsed_minutes(1, velocity(2)), 0);
    assert_eq!(elapsed_minutes(0, velocity(7)), 0);
}

#[test]
fn test_add_elapsed_pads_minutes() {
    assert_eq!(add_elapsed("08:00", 5).unwrap(), "08:05");
    assert_eq!(add_elapsed("08:00", 0).unwrap(), "08:00");
}

#[test]
fn test_add_elapsed_rolls_over_hours_and_midnight() {
    assert_eq!(add_elapsed("23:55", 10).unwrap(), "00:05");
    assert_eq!(add_elapsed("10:45", 30).unwrap(), "11:15");
    assert_eq!(add_elapsed("09:59", 1).unwrap(), "10:00");
    assert_eq!(add_elapsed("22:30", 150).unwrap(), "01:00");
}

#[test]
fn test_add_elapsed_discards_whole_days() {
    assert_eq!(add_elapsed("12:00", 24 * 60).unwrap(), "12:00");
    assert_eq!(add_elapsed("12:00", 3 * 24 * 60 + 61).unwrap(), "13:01");
    // Total for very large inputs
    assert_eq!(
        add_elapsed("00:00", u64::MAX).unwrap(),
        ClockTime::from_hm(0, 0)
            .unwrap()
            .add_minutes(u64::MAX % 1440)
            .to_string()
    );
}

#[test]
fn test_parse_rejects_malformed_times() {
    for input in ["0800", "08-00", "8:00", "08:0", "ab:cd", "08:5x", "", "08:000", "24:00", "12:60"] {
        let err = ClockTime::parse_hhmm(input).unwrap_err();
        assert!(
            matches!(err, Error::InvalidTime { .. }),
            "{:?} should be rejected, got {:?}",
            input,
            err
        );
    }
    assert!(add_elapsed("10.00", 5).is_err());
}

#[test]
fn test_parse_and_display() {
    let time: ClockTime = "07:09".parse().unwrap();
    assert_eq!(time.hour(), 7);
    assert_eq!(time.minute(), 9);
    assert_eq!(time.to_string(), "07:09");
    assert_eq!("00:00".parse::<ClockTime>().unwrap().to_string(), "00:00");
    assert_eq!("23:59".parse::<ClockTime>().unwrap().to_string(), "23:59");
}

#[test]
fn test_render_arrival_placeholder() {
    assert_eq!(render_arrival(None), UNREACHED_CLOCK);
    assert_eq!(render_arrival(ClockTime::from_hm(6, 3)), "06:03");
}
