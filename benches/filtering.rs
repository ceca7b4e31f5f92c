use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::df;
use weatherboard::{apply_filters, columns, summarize, FilterParams, Snapshot};

fn synthetic_snapshot(rows: usize) -> Snapshot {
    let hostnames: Vec<String> = (0..rows).map(|i| format!("pi-{}", i % 8)).collect();
    let ips: Vec<String> = (0..rows)
        .map(|i| format!("192.168.{}.{}", i % 4, i % 250))
        .collect();
    let temps: Vec<f64> = (0..rows).map(|i| 50.0 + (i % 50) as f64).collect();
    let humidity: Vec<f64> = (0..rows).map(|i| 30.0 + (i % 60) as f64).collect();
    let pressure: Vec<f64> = (0..rows).map(|i| 990.0 + (i % 40) as f64).collect();

    let frame = df!(
        columns::HOSTNAME => hostnames,
        columns::IPADDRESS => ips,
        columns::TEMPERATURE => temps,
        columns::HUMIDITY => humidity,
        columns::PRESSURE => pressure,
    )
    .unwrap();
    Snapshot::new(frame, Utc::now())
}

fn bench_pipeline(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(10_000);
    let params = FilterParams {
        hosts: Some(vec!["pi-1".to_string(), "pi-3".to_string()]),
        temperature: Some((60.0, 90.0)),
        ip_search: Some("192.168.2".to_string()),
    };
    let view = apply_filters(&snapshot, &params).unwrap();

    c.bench_function("apply_filters", |b| {
        b.iter(|| apply_filters(black_box(&snapshot), black_box(&params)).unwrap())
    });
    c.bench_function("summarize", |b| b.iter(|| summarize(black_box(&view)).unwrap()));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
