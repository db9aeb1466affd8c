use criterion::{Criterion, criterion_group, criterion_main};
use savings_projection::api::{ChartKind, ProjectionInputs, ProjectionSession};
use savings_projection::core::{
    SimulationParams, SurfaceLayout, annual_to_monthly_rate, deflate_series, simulate_compound,
};
use savings_projection::render::NullRenderer;
use std::hint::black_box;

fn bench_compound_simulation_600(c: &mut Criterion) {
    let params = SimulationParams::new(1_000.0, 200.0, 600, annual_to_monthly_rate(10.0));

    c.bench_function("compound_simulation_600", |b| {
        b.iter(|| {
            let _ = simulate_compound(black_box(params));
        })
    });
}

fn bench_deflate_series_600(c: &mut Criterion) {
    let params = SimulationParams::new(1_000.0, 200.0, 600, annual_to_monthly_rate(10.0));
    let nominal = simulate_compound(params);

    c.bench_function("deflate_series_600", |b| {
        b.iter(|| {
            let _ = deflate_series(black_box(&nominal), black_box(4.0));
        })
    });
}

fn bench_session_compute_600(c: &mut Criterion) {
    let inputs = ProjectionInputs::default()
        .with_horizon_months(600)
        .with_inflation(4.0);

    c.bench_function("session_compute_600", |b| {
        b.iter(|| {
            let mut session = ProjectionSession::new();
            let _ = session.compute(black_box(&inputs)).expect("valid inputs");
        })
    });
}

fn bench_comparison_frame_600(c: &mut Criterion) {
    let mut session = ProjectionSession::new();
    session
        .compute(&ProjectionInputs::default().with_horizon_months(600))
        .expect("valid inputs");
    let layout = SurfaceLayout::for_host_width(1_280, 2.0);
    let mut renderer = NullRenderer::default();

    c.bench_function("comparison_frame_600", |b| {
        b.iter(|| {
            session
                .render_chart(ChartKind::Comparison, black_box(layout), &mut renderer)
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_compound_simulation_600,
    bench_deflate_series_600,
    bench_session_compute_600,
    bench_comparison_frame_600
);
criterion_main!(benches);
