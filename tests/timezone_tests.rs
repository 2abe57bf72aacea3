use nba_reminder::error::BotError;
use nba_reminder::timezone::convert;

#[test]
fn converts_eastern_evening_across_spring_forward() {
    // 2024-03-10 is the US spring-forward date: 19:30 EDT is 00:30 CET the
    // next day (Europe switches three weeks later).
    let stamp = convert("2024-03-10", "19:30", "US/Eastern", "Europe/Paris").unwrap();
    assert_eq!(stamp.to_string(), "2024-03-11 00:30");
}

#[test]
fn converts_winter_time_with_six_hour_offset() {
    let stamp = convert("2024-01-15", "19:30", "US/Eastern", "Europe/Paris").unwrap();
    assert_eq!(stamp.to_string(), "2024-01-16 01:30");
}

#[test]
fn round_trip_recovers_original_wall_clock() {
    let paris = convert("2024-03-10", "19:30", "US/Eastern", "Europe/Paris").unwrap();
    let back = convert(
        &paris.date.format("%Y-%m-%d").to_string(),
        &paris.time.format("%H:%M").to_string(),
        "Europe/Paris",
        "US/Eastern",
    )
    .unwrap();
    assert_eq!(back.to_string(), "2024-03-10 19:30");
}

#[test]
fn conversion_is_deterministic() {
    // 2025-11-02 is the US fall-back date.
    let a = convert("2025-11-02", "12:00", "US/Eastern", "Europe/Paris").unwrap();
    let b = convert("2025-11-02", "12:00", "US/Eastern", "Europe/Paris").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "2025-11-02 18:00");
}

#[test]
fn rejects_nonexistent_spring_forward_time() {
    // 02:30 does not exist on the US spring-forward date.
    let err = convert("2024-03-10", "02:30", "US/Eastern", "Europe/Paris").unwrap_err();
    assert!(matches!(err, BotError::InvalidInput(_)), "got: {err}");
}

#[test]
fn rejects_malformed_date() {
    let err = convert("2024-13-01", "19:30", "US/Eastern", "Europe/Paris").unwrap_err();
    assert!(matches!(err, BotError::InvalidInput(_)), "got: {err}");
}

#[test]
fn rejects_malformed_time() {
    let err = convert("2024-03-10", "25:61", "US/Eastern", "Europe/Paris").unwrap_err();
    assert!(matches!(err, BotError::InvalidInput(_)), "got: {err}");
}

#[test]
fn rejects_unknown_zone_name() {
    let err = convert("2024-03-10", "19:30", "US/Nowhere", "Europe/Paris").unwrap_err();
    assert!(matches!(err, BotError::InvalidInput(_)), "got: {err}");
}
