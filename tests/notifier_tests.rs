use chrono::NaiveDate;
use nba_reminder::fetcher::parse_reply;
use nba_reminder::model::game::GameRecord;
use nba_reminder::model::watch::WatchKind;
use nba_reminder::notifier::render_digest;
use nba_reminder::store::ScheduleStore;

#[test]
fn digest_for_spring_forward_game_end_to_end() {
    // Reply -> parse -> persist -> read back -> render.
    let raw = r#"[{"date":"2024-03-10","opponent":"Boston Celtics","home":true,"team_rank":1,"opponent_rank":2,"time_et":"19:30","watch":"full","summary":"Rivalry game"}]"#;
    let outcome = parse_reply(raw);

    let mut store = ScheduleStore::open_in_memory().unwrap();
    store.insert_batch(&outcome.games).unwrap();
    let games = store.list_ordered_by_date().unwrap();
    assert_eq!(games.len(), 1);

    let digest = render_digest(&games);
    assert!(digest.contains("2024-03-10"), "digest was: {digest}");
    // DST-adjusted Paris kickoff, one day later.
    assert!(digest.contains("2024-03-11 00:30"), "digest was: {digest}");
    assert!(digest.contains("🏠"), "digest was: {digest}");
    assert!(digest.contains("Boston Celtics"), "digest was: {digest}");
    assert!(digest.contains("FULL"), "digest was: {digest}");
    assert!(digest.contains("Rivalry game"), "digest was: {digest}");
}

fn record(opponent: &str, home: bool, summary: Option<&str>) -> GameRecord {
    GameRecord {
        id: 1,
        date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
        opponent: opponent.to_string(),
        home,
        team_rank: None,
        opponent_rank: None,
        time_et: "20:00".to_string(),
        time_paris: "2024-03-13 02:00".to_string(),
        watch: WatchKind::Condensed,
        summary: summary.map(str::to_string),
        created_at: "2024-03-04 12:00:00".to_string(),
    }
}

#[test]
fn away_game_uses_arena_glyph() {
    let digest = render_digest(&[record("Denver Nuggets", false, Some("Road test"))]);
    assert!(
        digest.contains("**2024-03-12 2024-03-13 02:00** 🏟️ vs *Denver Nuggets* → **CONDENSED**"),
        "digest was: {digest}"
    );
    assert!(digest.contains("_Road test_"), "digest was: {digest}");
}

#[test]
fn missing_summary_omits_the_summary_line() {
    let digest = render_digest(&[record("Denver Nuggets", true, None)]);
    assert!(!digest.contains('_'), "digest was: {digest}");
}

#[test]
fn empty_store_renders_header_only() {
    let digest = render_digest(&[]);
    assert!(digest.contains("Cavaliers schedule"));
    assert!(!digest.contains("vs"));
}
