use rust_decimal::Decimal;
use savings_projection::api::{DecimalProjectionInputs, validate_projection_inputs};
use savings_projection::{ProjectionError, ProjectionInputs, ProjectionSession};

fn decimal_inputs(horizon: Decimal) -> DecimalProjectionInputs {
    DecimalProjectionInputs {
        initial_capital: Decimal::new(1_000, 0),
        periodic_contribution: Decimal::new(200, 0),
        horizon_months: horizon,
        savings_annual_rate: Decimal::new(6, 0),
        alternative_annual_rate: Decimal::new(10, 0),
        real_asset_annual_rate: Decimal::new(8, 0),
        variable_income_annual_rate: Decimal::new(12, 0),
        inflation_enabled: false,
        inflation_annual_rate: Some(Decimal::new(4, 0)),
    }
}

#[test]
fn defaults_match_calculator_form() {
    let inputs = ProjectionInputs::default();
    assert_eq!(inputs.initial_capital, 1_000.0);
    assert_eq!(inputs.periodic_contribution, 200.0);
    assert_eq!(inputs.horizon_months, 24);
    assert_eq!(inputs.savings_annual_rate, 6.0);
    assert_eq!(inputs.alternative_annual_rate, 10.0);
    assert_eq!(inputs.real_asset_annual_rate, 8.0);
    assert_eq!(inputs.variable_income_annual_rate, 12.0);
    assert!(!inputs.inflation_enabled);
    assert_eq!(inputs.active_inflation_rate(), None);
    assert_eq!(
        inputs.with_inflation_enabled(true).active_inflation_rate(),
        Some(4.0)
    );
}

#[test]
fn json_inputs_fill_missing_fields_with_defaults() {
    let inputs = ProjectionInputs::from_json_str(
        r#"{ "initialCapital": 5000, "horizonMonths": 120, "inflationEnabled": true }"#,
    )
    .expect("parse inputs");

    assert_eq!(inputs.initial_capital, 5_000.0);
    assert_eq!(inputs.horizon_months, 120);
    assert_eq!(inputs.periodic_contribution, 200.0);
    assert_eq!(inputs.active_inflation_rate(), Some(4.0));
}

#[test]
fn malformed_json_inputs_are_invalid_data() {
    let err = ProjectionInputs::from_json_str(r#"{ "horizonMonths": -3 }"#)
        .expect_err("negative horizon cannot be parsed");
    assert!(matches!(err, ProjectionError::InvalidData(_)));
}

#[test]
fn decimal_inputs_convert_to_float_inputs() {
    let inputs = decimal_inputs(Decimal::new(24, 0))
        .to_projection_inputs()
        .expect("convert");
    assert_eq!(inputs, ProjectionInputs::default());
}

#[test]
fn fractional_horizon_rounds_half_away_from_zero() {
    let inputs = decimal_inputs(Decimal::new(125, 1))
        .to_projection_inputs()
        .expect("convert");
    assert_eq!(inputs.horizon_months, 13);

    let inputs = decimal_inputs(Decimal::new(124, 1))
        .to_projection_inputs()
        .expect("convert");
    assert_eq!(inputs.horizon_months, 12);
}

#[test]
fn negative_decimal_horizon_fails_range_validation() {
    let inputs = decimal_inputs(Decimal::new(-12, 0))
        .to_projection_inputs()
        .expect("convert");
    assert_eq!(inputs.horizon_months, 0);
    assert!(validate_projection_inputs(&inputs).is_err());
}

#[test]
fn decimal_inputs_drive_a_session() {
    let inputs = decimal_inputs(Decimal::new(36, 0))
        .to_projection_inputs()
        .expect("convert");
    let mut session = ProjectionSession::new();
    let state = session.compute(&inputs).expect("compute");
    assert_eq!(state.horizon_months(), 36);
}
