// =========================================================================
// FALSIFY-EM: error-metric invariants (MSE / RMSE / MAE)
//
// Each test tries to falsify one algebraic property the evaluation loop
// depends on. A failure message names the property that fell.
// =========================================================================

use super::*;

/// FALSIFY-EM-001: MSE = 0 for perfect predictions
#[test]
fn falsify_em_001_mse_zero_for_perfect() {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];

    let error = mse(&y, &y);
    assert!(
        error.abs() < 1e-9,
        "FALSIFIED EM-001: MSE={error} for perfect predictions, expected 0.0"
    );
}

/// FALSIFY-EM-002: MSE ≥ 0 always
#[test]
fn falsify_em_002_mse_nonnegative() {
    let y_true = [1.0, -2.0, 3.0, -4.0];
    let y_pred = [-1.0, 2.0, -3.0, 4.0];

    let error = mse(&y_pred, &y_true);
    assert!(error >= 0.0, "FALSIFIED EM-002: MSE={error} < 0");
}

/// FALSIFY-EM-003: RMSE² = MSE
#[test]
fn falsify_em_003_rmse_squares_to_mse() {
    let y_true = [3.0, 0.0, 6.0, 9.0];
    let y_pred = [1.0, 2.0, 3.0, 7.0];

    let r = rmse(&y_pred, &y_true);
    let m = mse(&y_pred, &y_true);
    assert!(
        (r * r - m).abs() < 1e-4,
        "FALSIFIED EM-003: RMSE²={} != MSE={m}",
        r * r
    );
}

/// FALSIFY-EM-004: MAE ≤ RMSE (Jensen)
#[test]
fn falsify_em_004_mae_bounded_by_rmse() {
    let y_true = [5.0, 1.0, 4.0, 2.0, 3.0];
    let y_pred = [4.5, 3.0, 4.0, 0.5, 3.5];

    let a = mae(&y_pred, &y_true);
    let r = rmse(&y_pred, &y_true);
    assert!(a <= r + 1e-6, "FALSIFIED EM-004: MAE={a} > RMSE={r}");
}

/// FALSIFY-EM-005: metrics are translation-invariant in the error
#[test]
fn falsify_em_005_shift_invariance() {
    let y_true = [1.0, 2.0, 3.0];
    let y_pred = [1.5, 2.5, 3.5];
    let y_true_shifted = [11.0, 12.0, 13.0];
    let y_pred_shifted = [11.5, 12.5, 13.5];

    let a = mae(&y_pred, &y_true);
    let b = mae(&y_pred_shifted, &y_true_shifted);
    assert!(
        (a - b).abs() < 1e-6,
        "FALSIFIED EM-005: MAE changed under constant shift ({a} vs {b})"
    );
}

mod em_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-EM-002-prop: MSE ≥ 0 for any paired scores
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_em_002_prop_mse_nonnegative(
            n in 1..=20usize,
            seed in 0..500u32,
        ) {
            let y_true: Vec<f32> = (0..n)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 5.0)
                .collect();
            let y_pred: Vec<f32> = (0..n)
                .map(|i| ((i as f32 + seed as f32 + 1.0) * 0.53).cos() * 5.0)
                .collect();
            let error = mse(&y_pred, &y_true);
            prop_assert!(
                error >= 0.0,
                "FALSIFIED EM-002-prop: MSE={} < 0",
                error
            );
        }
    }

    /// FALSIFY-EM-004-prop: MAE ≤ RMSE for any paired scores
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_em_004_prop_mae_bounded_by_rmse(
            n in 1..=20usize,
            seed in 0..500u32,
        ) {
            let y_true: Vec<f32> = (0..n)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 5.0)
                .collect();
            let y_pred: Vec<f32> = (0..n)
                .map(|i| ((i as f32 + seed as f32 + 1.0) * 0.53).cos() * 5.0)
                .collect();
            let a = mae(&y_pred, &y_true);
            let r = rmse(&y_pred, &y_true);
            prop_assert!(
                a <= r + 1e-5,
                "FALSIFIED EM-004-prop: MAE={} > RMSE={}",
                a,
                r
            );
        }
    }
}
