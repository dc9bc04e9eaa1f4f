use debt_settler::core::error::ValidationError;
use debt_settler::core::participant::ParticipantId;
use debt_settler::core::position::NetPositions;
use debt_settler::io::input::SessionInput;
use debt_settler::optimization::settlement::{SettlementConfig, SettlementEngine};
use debt_settler::session::{settle_session, SettlementReport};
use debt_settler::settle;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tuples(start: &[Decimal], end: &[Decimal]) -> Vec<(usize, usize, Decimal)> {
    settle(start, end)
        .unwrap()
        .iter()
        .map(|t| t.as_tuple())
        .collect()
}

#[test]
fn simple_two_party_case() {
    assert_eq!(
        tuples(&[dec!(100), dec!(200)], &[dec!(150), dec!(150)]),
        vec![(1, 0, dec!(50))]
    );
}

#[test]
fn three_party_redistribution() {
    assert_eq!(
        tuples(&[dec!(100), dec!(150), dec!(200)], &[dec!(90), dec!(160), dec!(200)]),
        vec![(0, 1, dec!(10))]
    );
}

#[test]
fn no_op_case() {
    assert!(tuples(&[dec!(100), dec!(100)], &[dec!(100), dec!(100)]).is_empty());
}

#[test]
fn imbalanced_total_is_rejected() {
    let err = settle(&[dec!(10), dec!(20)], &[dec!(15), dec!(14)]).unwrap_err();
    assert!(matches!(err, ValidationError::ImbalancedTotal { .. }));
}

#[test]
fn length_mismatch_is_rejected() {
    let err = settle(&[dec!(10), dec!(20), dec!(30)], &[dec!(15), dec!(45)]).unwrap_err();
    assert!(matches!(err, ValidationError::LengthMismatch { .. }));
}

#[test]
fn fractional_quantities_settle() {
    let start = [dec!(99.5), dec!(200.5)];
    let end = [dec!(150), dec!(150)];
    let plan = settle(&start, &end).unwrap();

    let positions = NetPositions::from_quantities(&start, &end).unwrap();
    assert!(positions.is_settled_by(&plan));
    assert_eq!(plan.net_effect(ParticipantId::new(0)), dec!(50.5));
}

/// A full poker night: six players, uneven results, one player flat.
#[test]
fn poker_night_pipeline() {
    let input = SessionInput {
        start: "200, 200, 200, 200, 200, 200".to_string(),
        end: "35, 410, 200, 120.5, 279.5, 155".to_string(),
        names: Some("Ana, Ben, Cleo, Dev, Eli, Fay".to_string()),
        unit_value: Some("0.10".to_string()),
    };

    let session = input.validate().unwrap();
    let start = session.start.clone();
    let end = session.end.clone();
    let report = settle_session(&session, &SettlementConfig::default()).unwrap();

    // nets: Ana -165, Ben +210, Cleo 0, Dev -79.5, Eli +79.5, Fay -45
    let positions = NetPositions::from_quantities(&start, &end).unwrap();
    let plan = SettlementEngine::settle(&start, &end).unwrap();
    assert!(positions.is_settled_by(&plan));
    assert!(plan.len() <= positions.creditors().count() + positions.debtors().count() - 1);

    let lines: Vec<(String, String, Decimal)> = report
        .transfers()
        .iter()
        .map(|t| (t.from.clone(), t.to.clone(), t.amount))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Ana".to_string(), "Ben".to_string(), dec!(165)),
            ("Dev".to_string(), "Ben".to_string(), dec!(45)),
            ("Dev".to_string(), "Eli".to_string(), dec!(34.5)),
            ("Fay".to_string(), "Eli".to_string(), dec!(45)),
        ]
    );
    assert!(report.transfers().iter().all(|t| t.from != "Cleo" && t.to != "Cleo"));
    assert_eq!(report.transfers()[2].converted_amount, Some(dec!(3.45)));
    assert_eq!(report.total_moved(), dec!(289.5));
}

#[test]
fn name_count_checked_before_engine() {
    let input = SessionInput {
        start: "10, 20".to_string(),
        end: "15, 15".to_string(),
        names: Some("Solo".to_string()),
        unit_value: None,
    };
    let err = input.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "the number of names must match the number of participants (1 names for 2 participants)"
    );
}

/// Reports are plain values a caller can stash and restore between requests.
#[test]
fn report_json_round_trip() {
    let session = SessionInput {
        start: "100, 200".to_string(),
        end: "150, 150".to_string(),
        names: Some("Alice, Bob".to_string()),
        unit_value: None,
    }
    .validate()
    .unwrap();

    let report = settle_session(&session, &SettlementConfig::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["transfers"][0]["from"], "Bob");
    assert_eq!(parsed["transfers"][0]["to"], "Alice");
    assert_eq!(parsed["transfers"][0]["amount"], "50");

    let restored: SettlementReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id(), report.id());
    assert_eq!(restored.transfers(), report.transfers());
}
