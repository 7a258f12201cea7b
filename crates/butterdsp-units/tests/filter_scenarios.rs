// SPDX-License-Identifier: LGPL-3.0-or-later
//
// End-to-end scenarios for the Butterworth filter: mode selection, streaming,
// analysis non-interference and response normalization, driven with seeded
// random signals and configurations.

use butterdsp_units::error::AnalysisError;
use butterdsp_units::filters::butterworth::ButterworthFilter;
use butterdsp_units::filters::config::FilterConfiguration;
use butterdsp_units::filters::designer::{FilterMode, design};
use butterdsp_units::filters::engine::FilterEngine;
use butterdsp_units::util::response_analyzer::ResponseAnalyzer;
use float_cmp::assert_approx_eq;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn noise(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// A random configuration with both edges strictly inside `(0, Fs/2)`.
fn random_band(rng: &mut ChaCha8Rng) -> FilterConfiguration {
    let fs = [1.0, 100.0, 8000.0, 48000.0][rng.gen_range(0..4)];
    let lo = rng.gen_range(0.02..0.2) * fs;
    let hi = rng.gen_range(0.25..0.45) * fs;
    let mut cfg = FilterConfiguration::new();
    cfg.set_lowpass(true)
        .set_highpass(true)
        .set_high_cutoff(lo)
        .set_low_cutoff(hi)
        .set_sample_rate(fs)
        .set_order(rng.gen_range(1..=12));
    cfg
}

#[test]
fn valid_band_edges_select_bandpass() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0001);
    for _ in 0..200 {
        let mut cfg = random_band(&mut rng);
        assert_eq!(design(&cfg).mode(), FilterMode::BandPass, "{cfg:?}");

        cfg.set_highpass(false);
        assert_eq!(design(&cfg).mode(), FilterMode::LowPass, "{cfg:?}");
    }
}

#[test]
fn concrete_lowpass_scenario() {
    let mut filt = ButterworthFilter::new();
    filt.set_order(4)
        .set_sample_rate(1.0)
        .set_low_cutoff(0.25)
        .set_lowpass(true)
        .set_highpass(false);

    assert_eq!(filt.mode(), FilterMode::LowPass);
    assert_eq!(filt.num_stages(), 2);
    assert_eq!(filt.num_coefs(), 2);
    assert_eq!(filt.filter_delay(), 2);
}

#[test]
fn lowpass_step_settles_to_unity() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0002);
    for _ in 0..20 {
        let fs = 1000.0;
        let mut filt = ButterworthFilter::new();
        filt.set_sample_rate(fs)
            .set_low_cutoff(rng.gen_range(20.0..400.0))
            .set_order(rng.gen_range(1..=8));
        assert_eq!(filt.mode(), FilterMode::LowPass);

        let mut y = 0.0;
        for _ in 0..5000 {
            y = filt.apply(1.0);
        }
        assert_approx_eq!(f64, y, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn highpass_blocks_dc() {
    let mut filt = ButterworthFilter::new();
    filt.set_lowpass(false).set_highpass(true).set_high_cutoff(0.1).set_order(6);
    let mut y = 1.0;
    for _ in 0..2000 {
        y = filt.apply(1.0);
    }
    assert!(y.abs() < 1e-9, "HP output at DC should vanish, got {y}");
}

#[test]
fn analysis_does_not_disturb_stream() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0003);
    for _ in 0..25 {
        let cfg = random_band(&mut rng);
        let input = noise(&mut rng, 300);

        let mut plain = ButterworthFilter::with_configuration(cfg);
        let mut probed = ButterworthFilter::with_configuration(cfg);

        for &x in &input[..299] {
            plain.apply(x);
            probed.apply(x);
        }
        probed.filter_delay();
        probed.frequency_response(200);

        let last = input[299];
        assert_eq!(plain.apply(last), probed.apply(last), "{cfg:?}");
    }
}

#[test]
fn block_and_sample_processing_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0004);
    let cfg = random_band(&mut rng);
    let input = noise(&mut rng, 1024);

    let mut by_sample = ButterworthFilter::with_configuration(cfg);
    let expected: Vec<f64> = input.iter().map(|&x| by_sample.apply(x)).collect();

    let mut by_block = ButterworthFilter::with_configuration(cfg);
    let mut out = vec![0.0; input.len()];
    for (dst, src) in out.chunks_mut(100).zip(input.chunks(100)) {
        by_block.process(dst, src);
    }
    assert_eq!(out, expected);
}

#[test]
fn reset_twice_leaves_zero_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0005);
    let mut filt = ButterworthFilter::with_configuration(random_band(&mut rng));
    filt.reset();
    assert!(filt.state().is_clear());
    for x in noise(&mut rng, 64) {
        filt.apply(x);
    }
    filt.reset();
    filt.reset();
    assert!(filt.state().is_clear());
}

#[test]
fn response_is_normalized_for_every_mode() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB17E_0006);
    for i in 0..60 {
        let mut cfg = random_band(&mut rng);
        match i % 3 {
            0 => {}
            1 => {
                cfg.set_highpass(false);
            }
            _ => {
                cfg.set_lowpass(false);
            }
        }
        let mut filt = ButterworthFilter::with_configuration(cfg);
        assert!(!filt.mode().is_bypass());

        let points = rng.gen_range(8..300);
        let db = filt.frequency_response(points);
        assert_eq!(db.len(), points.next_power_of_two());
        let peak = db.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(peak, 0.0, "{cfg:?}");
    }
}

#[test]
fn bypass_response_is_all_zero() {
    let mut filt = ButterworthFilter::new();
    filt.set_low_cutoff(0.7);
    assert_eq!(filt.mode(), FilterMode::Bypass);
    for k in [1usize, 4, 10, 64, 100] {
        let db = filt.frequency_response(k);
        assert_eq!(db.len(), k.next_power_of_two());
        assert!(db.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn analyzer_rejects_non_power_of_two() {
    let mut engine = FilterEngine::new(design(&FilterConfiguration::default()));
    let mut analyzer = ResponseAnalyzer::new();
    assert_eq!(
        analyzer.analyze(&mut engine, 200, true),
        Err(AnalysisError::InvalidSize(200))
    );
    assert_eq!(
        AnalysisError::InvalidSize(200).to_string(),
        "analysis size 200 is not a power of two >= 2"
    );
}

#[test]
fn configuration_loads_from_json() {
    let cfg: FilterConfiguration = serde_json::from_str(
        r#"{
            "lowpass": true,
            "highpass": true,
            "low_cutoff": 3000.0,
            "high_cutoff": 300.0,
            "sample_rate": 48000.0,
            "order": 8
        }"#,
    )
    .unwrap();
    let mut filt = ButterworthFilter::with_configuration(cfg);
    assert_eq!(filt.mode(), FilterMode::BandPass);
    assert_eq!(filt.num_stages(), 2);
    assert!(filt.filter_delay() > 0);
}
