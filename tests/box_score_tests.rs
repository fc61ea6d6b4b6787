mod common;

use nba_box_scores_rust::box_score::{format_field_goal_percentage, format_minutes, logo_url, transform, transform_body};
use nba_box_scores_rust::error::TransformError;

use common::{box_score_at, box_score_with_minutes, box_score_without_stat, load_box_score, FakeProvider};

#[test]
fn transforms_sample_box_score() {
    let game = transform_body(&load_box_score()).expect("transform failed");

    let record = &game.record;
    assert_eq!(record.away_team, "Bucks");
    assert_eq!(record.away_score, 105);
    assert_eq!(record.away_logo_url, "https://cdn.nba.com/logos/nba/1610612749/global/D/logo.svg");
    assert_eq!(record.home_team, "Celtics");
    assert_eq!(record.home_score, 117);
    assert_eq!(record.home_logo_url, "https://cdn.nba.com/logos/nba/1610612738/global/D/logo.svg");

    assert_eq!(game.away_stats.len(), 2);
    assert_eq!(game.home_stats.len(), 2);

    let tatum = &game.home_stats[0];
    assert_eq!(tatum.jersey_number, "0");
    assert_eq!(tatum.name, "Jayson Tatum");
    assert_eq!(tatum.position, "SF");
    assert_eq!(tatum.points, 31);
    assert_eq!(tatum.rebounds, 9);
    assert_eq!(tatum.assists, 4);
    assert_eq!(tatum.blocks, 1);
    assert_eq!(tatum.field_goal_percentage, "45.6%");
    assert_eq!(tatum.fouls, 2);
    assert_eq!(tatum.turnovers, 3);
    assert_eq!(tatum.minutes_played, "0:36:12");

    // Away roster keeps provider order
    assert_eq!(game.away_stats[0].name, "Giannis Antetokounmpo");
    assert_eq!(game.away_stats[1].minutes_played, "0:12:34");
}

#[test]
fn missing_position_defaults_to_sentinel() {
    let game = transform_body(&load_box_score()).unwrap();
    let horford = &game.home_stats[1];
    assert_eq!(horford.name, "Al Horford");
    assert_eq!(horford.position, "N/A");
}

#[test]
fn winter_tip_off_is_shifted_one_hour() {
    let game = transform_body(&box_score_at("2024-01-10T00:30:00Z")).unwrap();
    assert_eq!(game.record.date, "2024-01-10");
    assert_eq!(game.record.time, "01:30:00");
}

#[test]
fn summer_tip_off_is_shifted_two_hours() {
    let game = transform_body(&box_score_at("2024-06-10T00:30:00Z")).unwrap();
    assert_eq!(game.record.date, "2024-06-10");
    assert_eq!(game.record.time, "02:30:00");
}

#[test]
fn late_utc_tip_off_rolls_into_next_local_day() {
    let game = transform_body(&box_score_at("2024-01-09T23:30:00Z")).unwrap();
    assert_eq!(game.record.date, "2024-01-10");
    assert_eq!(game.record.time, "00:30:00");
}

#[test]
fn missing_statistic_is_a_transform_failure() {
    let result = transform_body(&box_score_without_stat("reboundsTotal"));
    assert!(matches!(result, Err(TransformError::Parse(_))), "got {:?}", result);
}

#[test]
fn malformed_json_is_a_transform_failure() {
    let result = transform_body("{\"game\": ");
    assert!(matches!(result, Err(TransformError::Parse(_))));
}

#[test]
fn bad_game_time_is_a_transform_failure() {
    let result = transform_body(&box_score_at("yesterday evening"));
    assert!(matches!(result, Err(TransformError::GameTime { .. })));
}

#[test]
fn unknown_game_is_a_fetch_failure() {
    let provider = FakeProvider::with_games(&[]);
    let result = transform(&provider, "0022300999");
    assert!(matches!(result, Err(TransformError::Fetch(_))));
}

#[test]
fn field_goal_percentage_formatting() {
    assert_eq!(format_field_goal_percentage(0.456), "45.6%");
    assert_eq!(format_field_goal_percentage(0.5), "50.0%");
    assert_eq!(format_field_goal_percentage(0.375), "37.5%");
    assert_eq!(format_field_goal_percentage(0.4444), "44.44%");
    assert_eq!(format_field_goal_percentage(0.0), "0.0%");
    assert_eq!(format_field_goal_percentage(1.0), "100.0%");
}

#[test]
fn minutes_formatting() {
    assert_eq!(format_minutes("PT12M34.00S").unwrap(), "0:12:34");
    assert_eq!(format_minutes("PT00M00.00S").unwrap(), "0:00:00");
    assert_eq!(format_minutes("PT05M59.90S").unwrap(), "0:05:59");
}

#[test]
fn malformed_minutes_are_rejected() {
    for raw in [
        "",
        "12:34",
        "PT12M",
        "PTxxM10.00S",
        "PT12M-3.00S",
        "PT12M60.00S",
        "PT1MNaNS",
        "PT1M1e300S",
        "PT307445734561825862M00.00S",
    ] {
        assert!(
            matches!(format_minutes(raw), Err(TransformError::Minutes(_))),
            "expected {:?} to be rejected",
            raw
        );
    }
}

#[test]
fn largest_representable_minutes_still_format() {
    // 307445734561825860 minutes is the last whole-minute count that fits in u64 seconds.
    assert_eq!(
        format_minutes("PT307445734561825860M00.00S").unwrap(),
        "5124095576030431:00:00"
    );
}

#[test]
fn out_of_range_minutes_fail_the_game() {
    let result = transform_body(&box_score_with_minutes("PT1M1e300S"));
    assert!(matches!(result, Err(TransformError::Minutes(_))), "got {:?}", result);
}

#[test]
fn logo_url_is_template_substitution() {
    assert_eq!(logo_url(1610612747), "https://cdn.nba.com/logos/nba/1610612747/global/D/logo.svg");
}
