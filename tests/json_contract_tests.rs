use savings_projection::api::{
    PROJECTION_SNAPSHOT_JSON_SCHEMA_V1, ProjectionSnapshot, ValueMode,
};
use savings_projection::core::ScenarioKey;
use savings_projection::{ProjectionError, ProjectionInputs, ProjectionSession, ValidationError};

fn snapshot_for(inputs: &ProjectionInputs) -> ProjectionSnapshot {
    let mut session = ProjectionSession::new();
    session.compute(inputs).expect("compute");
    session.snapshot().expect("snapshot")
}

#[test]
fn contract_v1_round_trips_snapshot() {
    let snapshot = snapshot_for(&ProjectionInputs::default().with_inflation(4.0));
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"],
        serde_json::json!(PROJECTION_SNAPSHOT_JSON_SCHEMA_V1)
    );
    assert_eq!(
        value["snapshot"]["value_mode"],
        serde_json::json!("inflation-adjusted")
    );

    let parsed = ProjectionSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.state.value_mode(), ValueMode::InflationAdjusted);
}

#[test]
fn bare_snapshot_payload_is_accepted() {
    let snapshot = snapshot_for(&ProjectionInputs::default());
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let parsed = ProjectionSnapshot::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn scenarios_serialize_in_display_order() {
    let snapshot = snapshot_for(&ProjectionInputs::default().with_horizon_months(3));
    let json = serde_json::to_string(&snapshot).expect("serialize");

    let positions: Vec<usize> = ScenarioKey::ALL
        .iter()
        .map(|key| json.find(&format!("\"{}\"", key.as_str())).expect("key present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let snapshot = snapshot_for(&ProjectionInputs::default());
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let tampered = json.replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);

    let err = ProjectionSnapshot::from_json_compat_str(&tampered).expect_err("v7 unsupported");
    assert!(matches!(err, ProjectionError::InvalidData(message) if message.contains("7")));
}

#[test]
fn truncated_series_are_rejected() {
    let snapshot = snapshot_for(&ProjectionInputs::default().with_horizon_months(2));
    let mut value = serde_json::to_value(&snapshot).expect("to value");
    value["state"]["horizon_months"] = serde_json::json!(5);

    let err = ProjectionSnapshot::from_json_compat_str(&value.to_string())
        .expect_err("length mismatch");
    assert!(matches!(err, ProjectionError::InvalidData(_)));
}

#[test]
fn mismatched_month_zero_is_rejected() {
    let snapshot = snapshot_for(&ProjectionInputs::default().with_horizon_months(2));
    let mut value = serde_json::to_value(&snapshot).expect("to value");
    value["state"]["scenarios"]["var"][0] = serde_json::json!(999.0);

    assert!(ProjectionSnapshot::from_json_compat_str(&value.to_string()).is_err());
}

#[test]
fn snapshot_summary_matches_session_summary() {
    let mut session = ProjectionSession::new();
    session
        .compute(&ProjectionInputs::default().with_horizon_months(60))
        .expect("compute");
    let snapshot = session.snapshot().expect("snapshot");
    assert_eq!(Some(snapshot.summary()), session.summary());
}

#[test]
fn malformed_json_reports_invalid_data() {
    let err = ProjectionSnapshot::from_json_compat_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ProjectionError::InvalidData(_)));
}

#[test]
fn overflowed_balances_survive_the_contract() {
    let snapshot = snapshot_for(
        &ProjectionInputs::default()
            .with_horizon_months(600)
            .with_variable_income_annual_rate(1e9),
    );
    let final_value = snapshot
        .state
        .scenarios()
        .final_value(ScenarioKey::VariableIncome)
        .expect("final value");
    assert_eq!(final_value, f64::INFINITY);

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"inf\""));

    let parsed = ProjectionSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);
}

#[test]
fn restored_state_is_validated_like_inputs() {
    let snapshot = snapshot_for(&ProjectionInputs::default().with_horizon_months(2));
    let value = serde_json::to_value(&snapshot).expect("to value");

    let mut negative = value.clone();
    negative["state"]["initial_capital"] = serde_json::json!(-5.0);
    let err = ProjectionSnapshot::from_json_compat_str(&negative.to_string())
        .expect_err("negative capital");
    assert!(matches!(
        err,
        ProjectionError::Validation(ValidationError::NegativeValue {
            field: "initialCapital"
        })
    ));

    let mut too_long = value.clone();
    too_long["state"]["horizon_months"] = serde_json::json!(601);
    let err = ProjectionSnapshot::from_json_compat_str(&too_long.to_string())
        .expect_err("horizon above 600");
    assert!(matches!(
        err,
        ProjectionError::Validation(ValidationError::HorizonOutOfRange { horizon_months: 601 })
    ));

    let mut stale_rate = value.clone();
    stale_rate["state"]["monthly_inflation_rate"] = serde_json::json!(0.01);
    assert!(matches!(
        ProjectionSnapshot::from_json_compat_str(&stale_rate.to_string()),
        Err(ProjectionError::InvalidData(_))
    ));

    let mut wrong_mode = value;
    wrong_mode["value_mode"] = serde_json::json!("inflation-adjusted");
    assert!(matches!(
        ProjectionSnapshot::from_json_compat_str(&wrong_mode.to_string()),
        Err(ProjectionError::InvalidData(_))
    ));
}
