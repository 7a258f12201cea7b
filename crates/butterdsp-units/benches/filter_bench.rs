// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for filter processing and analysis.

use butterdsp_units::filters::butterworth::ButterworthFilter;
use butterdsp_units::filters::config::FilterConfiguration;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const BUF_SIZE: usize = 1024;

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(len: usize) -> Vec<f64> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f64 / (i32::MAX as f64)
        })
        .collect()
}

fn bandpass(order: usize) -> FilterConfiguration {
    let mut cfg = FilterConfiguration::new();
    cfg.set_highpass(true)
        .set_high_cutoff(300.0)
        .set_low_cutoff(3000.0)
        .set_sample_rate(48000.0)
        .set_order(order);
    cfg
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("butterworth_apply");
    let input = white_noise(BUF_SIZE);

    for &order in &[2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("lowpass", order), &order, |b, &order| {
            let mut filt = ButterworthFilter::new();
            filt.set_sample_rate(48000.0).set_low_cutoff(1000.0).set_order(order);
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    acc += filt.apply(black_box(x));
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("butterworth_process");
    let input = white_noise(BUF_SIZE);
    let mut output = vec![0.0f64; BUF_SIZE];

    for &order in &[4usize, 8, 16] {
        group.bench_with_input(BenchmarkId::new("bandpass", order), &order, |b, &order| {
            let mut filt = ButterworthFilter::with_configuration(bandpass(order));
            b.iter(|| filt.process(black_box(&mut output), black_box(&input)));
        });
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_response");

    for &points in &[128usize, 1024, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &points| {
            let mut filt = ButterworthFilter::with_configuration(bandpass(8));
            b.iter(|| {
                // Force a fresh analysis each iteration.
                filt.set_order(9);
                filt.set_order(8);
                filt.frequency_response(black_box(points)).len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply, bench_process, bench_analysis);
criterion_main!(benches);
