//! End-to-end tests for unfolding, staircase queries, and spectral rigidity.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use levelstat::prelude::*;

// ============================================================================
// Unfolding
// ============================================================================

#[test]
fn test_unfolded_mean_spacing_is_unity() {
    let mut rng = StdRng::seed_from_u64(11);
    let raw: Vec<f64> = (0..500).map(|_| rng.gen::<f64>() * 250.0).collect();

    let spectrum = UnfoldedSpectrum::unfold(&raw).unwrap();
    let spacings = spectrum.spacings();
    let mean = spacings.iter().sum::<f64>() / spacings.len() as f64;

    assert_relative_eq!(mean, 1.0, epsilon = 1e-9);
}

#[test]
fn test_unfolding_picket_fence_is_a_noop() {
    let raw: Vec<f64> = (0..50).map(|i| i as f64).collect();

    let spectrum = UnfoldedSpectrum::unfold(&raw).unwrap();
    assert_eq!(spectrum.levels(), raw.as_slice());
}

#[test]
fn test_unfold_rejects_bad_inputs() {
    assert!(matches!(
        UnfoldedSpectrum::unfold(&[1.0_f64]),
        Err(SpectralError::InsufficientData { got: 1, min: 2 })
    ));
    assert!(matches!(
        UnfoldedSpectrum::unfold(&[4.0_f64, 4.0, 4.0]),
        Err(SpectralError::DegenerateSpectrum)
    ));
    assert!(matches!(
        UnfoldedSpectrum::unfold(&[0.0_f64, f64::NAN]),
        Err(SpectralError::NonFiniteValue(_))
    ));
}

// ============================================================================
// Staircase
// ============================================================================

#[test]
fn test_staircase_monotone_with_boundary_counts() {
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();
    let staircase = spectrum.staircase();

    assert_eq!(staircase.count(-0.5), 0);
    assert_eq!(staircase.count(9.0), 10);
    assert_eq!(staircase.count(42.0), 10);

    let mut previous = 0;
    for step in 0..200 {
        let energy = -1.0 + 0.06 * step as f64;
        let current = staircase.count(energy);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_staircase_samples_track_the_level_count() {
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();
    let samples = staircase_samples(&spectrum, 0.0, 9.0, 10).unwrap();

    assert_eq!(samples.len(), 10);
    for (index, &(energy, count)) in samples.iter().enumerate() {
        assert_relative_eq!(energy, index as f64, epsilon = 1e-12);
        assert_eq!(count, index + 1);
    }
}

// ============================================================================
// Reference Spectra
// ============================================================================

#[test]
fn test_poisson_spectrum_is_reproducible_for_a_fixed_seed() {
    let mut first_rng = StdRng::seed_from_u64(7);
    let mut second_rng = StdRng::seed_from_u64(7);

    let first = PoissonSpectrum::<f64>::sample(1000, &mut first_rng).unwrap();
    let second = PoissonSpectrum::<f64>::sample(1000, &mut second_rng).unwrap();

    assert_eq!(first.levels(), second.levels());
}

#[test]
fn test_poisson_spectrum_has_unit_mean_spacing() {
    let mut rng = StdRng::seed_from_u64(3);
    let spectrum = PoissonSpectrum::<f64>::sample(2000, &mut rng).unwrap();

    let spacings = spectrum.spacings();
    let mean = spacings.iter().sum::<f64>() / spacings.len() as f64;
    assert_relative_eq!(mean, 1.0, epsilon = 1e-9);
}

#[test]
fn test_picket_fence_spacings_are_all_one() {
    let spectrum = PicketFenceSpectrum::<f64>::new(100).unwrap();
    let spacings = nearest_neighbour_spacings(spectrum.levels());

    assert!(spacings.iter().all(|&s| s == 1.0));
}

// ============================================================================
// Rigidity: Boundary Cases
// ============================================================================

#[test]
fn test_zero_window_has_zero_rigidity() {
    let estimator = Rigidity::new().build().unwrap();
    let picket = PicketFenceSpectrum::<f64>::new(100).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let poisson = PoissonSpectrum::<f64>::sample(100, &mut rng).unwrap();
    let empirical = UnfoldedSpectrum::unfold(&[0.4, 1.3, 2.1, 3.3, 4.6]).unwrap();

    assert_eq!(estimator.delta3(&picket, 0.0).unwrap(), 0.0);
    assert_eq!(estimator.delta3(&poisson, 0.0).unwrap(), 0.0);
    assert_eq!(estimator.delta3(&empirical, 0.0).unwrap(), 0.0);
}

#[test]
fn test_two_point_windows_fit_exactly() {
    // A 2-point grid is fitted exactly by the detrending line, so the
    // squared residuals vanish and the rigidity collapses to zero.
    let estimator = Rigidity::new()
        .centers(2)
        .samples_per_window(2)
        .build()
        .unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();

    assert_eq!(estimator.delta3(&spectrum, 2.0).unwrap(), 0.0);
}

#[test]
fn test_window_spanning_the_whole_spectrum_is_accepted() {
    let estimator = Rigidity::new().centers(10).build().unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();

    let delta3 = estimator.delta3(&spectrum, 9.0).unwrap();
    assert!(delta3.is_finite() && delta3 >= 0.0);
}

#[test]
fn test_oversized_and_negative_windows_are_rejected() {
    let estimator = Rigidity::new().build().unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();

    assert!(matches!(
        estimator.delta3(&spectrum, 20.0),
        Err(SpectralError::WindowTooLarge { .. })
    ));
    assert!(matches!(
        estimator.delta3(&spectrum, -1.0),
        Err(SpectralError::InvalidWindowLength(_))
    ));
}

// ============================================================================
// Rigidity: Asymptotics
// ============================================================================

#[test]
fn test_picket_fence_rigidity_saturates_near_one_twelfth() {
    let estimator = Rigidity::new().build().unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(1000).unwrap();

    let delta3 = estimator.delta3(&spectrum, 15.0).unwrap();
    assert!(
        (delta3 - picket_fence_delta3::<f64>()).abs() < 0.01,
        "picket-fence rigidity {} should saturate near 1/12",
        delta3
    );
}

#[test]
fn test_poisson_rigidity_tracks_linear_growth() {
    let mut rng = StdRng::seed_from_u64(42);
    let spectrum = PoissonSpectrum::<f64>::sample(1000, &mut rng).unwrap();
    let estimator = Rigidity::new().build().unwrap();

    let window = 10.0;
    let delta3 = estimator.delta3(&spectrum, window).unwrap();
    let expected = poisson_delta3(window);

    assert!(
        (delta3 - expected).abs() < 0.35 * expected,
        "Poisson rigidity {} should approximate L/15 = {}",
        delta3,
        expected
    );
    // Far above the picket-fence saturation value: the two statistics
    // separate cleanly at this window length.
    assert!(delta3 > 3.0 * picket_fence_delta3::<f64>());
}

// ============================================================================
// Rigidity: Curves and Determinism
// ============================================================================

#[test]
fn test_curve_matches_pointwise_evaluation() {
    let estimator = Rigidity::new()
        .centers(50)
        .samples_per_window(20)
        .build()
        .unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(200).unwrap();
    let windows = [0.0, 1.0, 2.5, 5.0, 10.0];

    let curve = estimator.curve(&spectrum, &windows).unwrap();

    assert_eq!(curve.windows, windows.to_vec());
    assert_eq!(curve.len(), windows.len());
    for (&window, &value) in windows.iter().zip(curve.delta3.iter()) {
        assert_eq!(value, estimator.delta3(&spectrum, window).unwrap());
    }
}

#[test]
fn test_parallel_and_sequential_results_are_identical() {
    let spectrum = PicketFenceSpectrum::<f64>::new(300).unwrap();
    let windows = linspace(0.0, 12.0, 7);

    let parallel = Rigidity::new().centers(80).build().unwrap();
    let sequential = Rigidity::new().centers(80).parallel(false).build().unwrap();

    let parallel_curve = parallel.curve(&spectrum, &windows).unwrap();
    let sequential_curve = sequential.curve(&spectrum, &windows).unwrap();

    assert_eq!(parallel_curve.delta3, sequential_curve.delta3);
}

#[test]
fn test_curve_aborts_on_first_oversized_window() {
    let estimator = Rigidity::new().centers(10).build().unwrap();
    let spectrum = PicketFenceSpectrum::<f64>::new(10).unwrap();

    assert!(matches!(
        estimator.curve(&spectrum, &[1.0, 50.0, 2.0]),
        Err(SpectralError::WindowTooLarge { .. })
    ));
}

#[test]
fn test_single_precision_spectra_are_supported() {
    let estimator = Rigidity::new()
        .centers(50)
        .samples_per_window(20)
        .build()
        .unwrap();
    let spectrum = PicketFenceSpectrum::<f32>::new(100).unwrap();

    let delta3 = estimator.delta3(&spectrum, 5.0_f32).unwrap();
    assert!(delta3.is_finite() && delta3 >= 0.0);
}

// ============================================================================
// Builder Validation
// ============================================================================

#[test]
fn test_builder_rejects_undersized_sampling_counts() {
    assert!(matches!(
        Rigidity::new().centers(1).build(),
        Err(SpectralError::InvalidWindowCount {
            parameter: "centers",
            got: 1,
            min: 2
        })
    ));
    assert!(matches!(
        Rigidity::new().samples_per_window(0).build(),
        Err(SpectralError::InvalidWindowCount {
            parameter: "samples_per_window",
            got: 0,
            min: 2
        })
    ));
}

#[test]
fn test_builder_rejects_duplicate_parameters() {
    assert!(matches!(
        Rigidity::new().centers(10).centers(20).build(),
        Err(SpectralError::DuplicateParameter {
            parameter: "centers"
        })
    ));
}

#[test]
fn test_builder_defaults() {
    let estimator = Rigidity::new().build().unwrap();

    assert_eq!(estimator.centers(), 500);
    assert_eq!(estimator.samples_per_window(), 50);
}
