use crate::*;

const ROSTER: &str = r#"[
    {"id": 1, "name": "Bede O.", "position": "Forward", "active": true},
    {"id": 2, "name": "Aderinsola K.", "position": "Midfielder", "active": true},
    {"id": 3, "name": "Marcus R.", "position": "Defender", "active": true},
    {"id": 4, "name": "John D.", "active": true},
    {"id": 5, "name": "Sarah L.", "position": "Winger", "active": true}
]"#;

const SESSIONS: &str = r#"[
    {
        "id": 101, "date": "2026-01-28", "type": "match",
        "teams": [
            {"name": "Orange", "coach": "Coach Michael", "score": 3, "players": [
                {"name": "Bede O.", "goals": 2, "assists": 1, "yellow": 0, "red": 0, "role": "starter"},
                {"name": "Sarah L.", "goals": 1, "assists": 0, "yellow": 0, "red": 0, "role": "starter"}
            ]},
            {"name": "Blue", "coach": "Coach David", "score": 1, "players": [
                {"name": "Aderinsola K.", "goals": 1, "assists": 0, "yellow": 0, "red": 0, "role": "starter"},
                {"name": "Marcus R.", "goals": 0, "assists": 1, "yellow": 0, "red": 0, "role": "starter"}
            ]}
        ]
    },
    {
        "id": 102, "date": "2026-02-01", "type": "training", "coach": "Coach Michael",
        "teams": [
            {"name": "Orange", "score": 2, "players": [
                {"name": "Sarah L.", "goals": 2, "assists": 0, "yellow": 0, "red": 0, "role": "starter"},
                {"name": "John D.", "goals": 0, "assists": 1, "yellow": 0, "red": 0, "role": "starter"}
            ]},
            {"name": "Blue", "score": 2, "players": [
                {"name": "Bede O.", "goals": 1, "assists": 1, "yellow": 0, "red": 0, "role": "starter"},
                {"name": "Marcus R.", "goals": 1, "assists": 0, "yellow": 1, "red": 0, "role": "starter"},
                {"name": "Visitor", "goals": 3}
            ]}
        ]
    }
]"#;

fn fixture() -> (Vec<Session>, Vec<Player>) {
    (
        serde_json::from_str(SESSIONS).unwrap(),
        serde_json::from_str(ROSTER).unwrap(),
    )
}

fn points_of(lines: &[PlayerStatLine], name: &str) -> f64 {
    lines.iter().find(|l| l.name == name).unwrap().total_points
}

#[test]
fn test_dashboard_fixture_totals() {
    let (sessions, players) = fixture();
    let lines = compute_stats(&sessions, &players);

    // 1 + 4 + 1, then 1 + 2 + 1
    assert_eq!(points_of(&lines, "Bede O."), 10.0);
    // 1 + 2, then 1 + 4
    assert_eq!(points_of(&lines, "Sarah L."), 8.0);
    assert_eq!(points_of(&lines, "Aderinsola K."), 3.0);
    // 1 + 3, then 1 + 3 - 2
    assert_eq!(points_of(&lines, "Marcus R."), 6.0);
    // No position on the roster: scored as a midfielder.
    assert_eq!(points_of(&lines, "John D."), 3.0);

    let john = lines.iter().find(|l| l.name == "John D.").unwrap();
    assert_eq!(john.position, "Midfielder");
    assert!(lines.iter().all(|l| l.attendance_points == 0.0));
}

#[test]
fn test_leaders_from_fixture() {
    let (sessions, players) = fixture();
    let leaders = top_leaders(&compute_stats(&sessions, &players));
    assert_eq!(leaders.top_points.unwrap().name, "Bede O.");
    assert_eq!(leaders.top_scorer.unwrap().name, "Bede O.");
    assert_eq!(leaders.top_assister.unwrap().name, "Bede O.");
    assert_eq!(leaders.appearance_king.unwrap().name, "Bede O.");
}

#[test]
fn test_stat_lines_serialize_camel_case() {
    let (sessions, players) = fixture();
    let lines = compute_stats(&sessions, &players);
    let value = serde_json::to_value(&lines[0]).unwrap();
    assert_eq!(value["totalPoints"], 10.0);
    assert_eq!(value["yellowCards"], 0);
    assert_eq!(value["attendancePoints"], 0.0);
}

#[test]
fn test_goalkeeper_clean_sheet_example() {
    let keeper = Player::new(9, "Kim G.", "Goalkeeper");
    let mut record = ParticipationRecord::starter("Kim G.");
    record.goals = Some(1);
    let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let session = Session::new(1, date, SessionType::Match)
        .with_team(TeamRecord::new("Orange", 1).with_player(record))
        .with_team(TeamRecord::new("Blue", 0));
    let lines = compute_stats(&[session], &[keeper]);
    assert_eq!(lines[0].total_points, 10.0);
}

#[test]
fn test_csv_matches_aggregator_per_session() {
    let (sessions, _) = fixture();
    let csv = to_csv(&sessions).unwrap();
    let rows: Vec<_> = csv.lines().collect();
    assert_eq!(rows[0], CSV_HEADER.join(","));
    assert_eq!(rows.len(), 1 + 9);
    // Records carry no position, so every row is scored as a midfielder.
    assert_eq!(rows[1], "101,2026-01-28,match,Orange,Bede O.,,starter,2,1,0,0,0,7");
    assert_eq!(rows[9], "102,2026-02-01,training,Blue,Visitor,,,3,,,,0,7");
}
