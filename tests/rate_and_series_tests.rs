use approx::assert_relative_eq;
use savings_projection::core::{
    AccrualModel, SimulationParams, annual_to_monthly_rate, simulate, simulate_compound,
    simulate_simple_interest,
};

#[test]
fn monthly_rate_compounds_to_annual_rate() {
    for annual in [0.0, 0.5, 6.0, 10.0, 12.0, 150.0] {
        let monthly = annual_to_monthly_rate(annual);
        assert!(monthly >= 0.0);
        assert_relative_eq!(
            (1.0 + monthly).powi(12),
            1.0 + annual / 100.0,
            max_relative = 1e-12
        );
    }
}

#[test]
fn compound_series_follows_annuity_due_recurrence() {
    let monthly = annual_to_monthly_rate(10.0);
    let series = simulate_compound(SimulationParams::new(1_000.0, 200.0, 24, monthly));

    assert_eq!(series.len(), 25);
    assert_eq!(series.values()[0], 1_000.0);

    let mut expected = 1_000.0;
    for month in 1..=24 {
        expected = (expected + 200.0) * (1.0 + monthly);
        assert_eq!(series.values()[month], expected);
    }
}

#[test]
fn annuity_due_differs_from_annuity_immediate() {
    let monthly = annual_to_monthly_rate(10.0);
    let series = simulate_compound(SimulationParams::new(0.0, 100.0, 12, monthly));

    let mut immediate = 0.0;
    for _ in 0..12 {
        immediate = immediate * (1.0 + monthly) + 100.0;
    }
    assert!(series.last().expect("final month") > immediate);
}

#[test]
fn simple_interest_series_follows_contributed_principal_recurrence() {
    let monthly = annual_to_monthly_rate(10.0);
    let series = simulate_simple_interest(SimulationParams::new(1_000.0, 200.0, 24, monthly));

    assert_eq!(series.len(), 25);
    let mut balance = 1_000.0;
    let mut contributed = 1_000.0;
    for month in 1..=24 {
        contributed += 200.0;
        balance += 200.0 + contributed * monthly;
        assert_eq!(series.values()[month], balance);
    }
}

#[test]
fn simple_interest_without_rate_or_contribution_is_flat() {
    let series = simulate(
        SimulationParams::new(750.0, 0.0, 36, 0.0),
        AccrualModel::SimpleInterest,
    );
    assert!(series.values().iter().all(|value| *value == 750.0));
}

#[test]
fn compound_beats_simple_interest_for_same_rate() {
    let params = SimulationParams::new(1_000.0, 200.0, 120, annual_to_monthly_rate(10.0));
    let compound = simulate(params, AccrualModel::Compound);
    let simple = simulate(params, AccrualModel::SimpleInterest);
    assert!(compound.last() > simple.last());
}
