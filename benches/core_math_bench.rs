use criterion::{Criterion, criterion_group, criterion_main};
use simviz::api::{Dashboard, DashboardConfig, PanelKind, SimulationMethod, SimulationResponse};
use simviz::core::{BandGeometry, BandPoint, ChartLayout, scale};
use std::hint::black_box;

fn bench_scale(c: &mut Criterion) {
    c.bench_function("scale_linear", |b| {
        b.iter(|| {
            scale(
                black_box(4_321.123),
                black_box(0.0),
                black_box(10_000.0),
                black_box(32.0),
                black_box(388.0),
            )
        })
    });
}

fn bench_band_geometry_10k(c: &mut Criterion) {
    let layout = ChartLayout::default();
    let points: Vec<BandPoint> = (0..10_000)
        .map(|i| {
            let n = f64::from(i + 1) * 20.0;
            let half_width = 1.96 / n.sqrt();
            BandPoint::new(n, 0.5, 0.5 - half_width, 0.5 + half_width)
        })
        .collect();

    c.bench_function("band_geometry_10k", |b| {
        b.iter(|| {
            let _ = BandGeometry::fit(black_box(&points), black_box(layout))
                .expect("fit should succeed");
        })
    });
}

fn bench_dashboard_view(c: &mut Criterion) {
    let mut dashboard = Dashboard::new(DashboardConfig::default()).expect("dashboard init");
    let sample_sizes: Vec<u64> = (1..=500).map(|i| i * 10).collect();
    let response = SimulationResponse {
        method: SimulationMethod::Standard,
        estimate: 0.5,
        variance: 0.001,
        ci_low: 0.49,
        ci_high: 0.51,
        samples_used: 5_000,
        estimate_series: vec![0.5; sample_sizes.len()],
        variance_series: vec![0.001; sample_sizes.len()],
        ci_low_series: vec![0.49; sample_sizes.len()],
        ci_high_series: vec![0.51; sample_sizes.len()],
        trace: (0..2_000).map(|i| f64::from(i % 7) / 7.0).collect(),
        autocorrelation: (0..50).map(|lag| 0.9_f64.powi(lag)).collect(),
        sample_sizes,
    };
    for _ in 0..16 {
        let ticket = dashboard.begin_run(PanelKind::Convergence).expect("run");
        dashboard.complete_run(&ticket, Ok(response.clone()));
    }

    c.bench_function("dashboard_view_full", |b| {
        b.iter(|| {
            let _ = dashboard.view().expect("view should build");
        })
    });
}

criterion_group!(
    benches,
    bench_scale,
    bench_band_geometry_10k,
    bench_dashboard_view
);
criterion_main!(benches);
