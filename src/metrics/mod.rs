//! Regression error metrics.
//!
//! Batch metrics (MSE, RMSE, MAE) over paired slices of predicted and actual
//! scores. The evaluation loop computes these once per evaluated item, over
//! whatever subset of withheld ratings actually produced a prediction.

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true` - `y_pred)²`
///
/// # Examples
///
/// ```
/// use recomendar::metrics::mse;
///
/// let y_true = [3.0, -0.5, 2.0, 7.0];
/// let y_pred = [2.5, 0.0, 2.0, 8.0];
/// let error = mse(&y_pred, &y_true);
/// assert!(error < 1.0);
/// ```
///
/// # Panics
///
/// Panics if slices have different lengths or are empty.
#[must_use]
pub fn mse(y_pred: &[f32], y_true: &[f32]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices cannot be empty");

    let n = y_true.len() as f32;

    let sum_sq_error: f32 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    sum_sq_error / n
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// RMSE = sqrt(MSE)
///
/// # Examples
///
/// ```
/// use recomendar::metrics::rmse;
///
/// let y_true = [4.0, 2.0];
/// let y_pred = [5.0, 1.0];
/// assert!((rmse(&y_pred, &y_true) - 1.0).abs() < 1e-6);
/// ```
///
/// # Panics
///
/// Panics if slices have different lengths or are empty.
#[must_use]
pub fn rmse(y_pred: &[f32], y_true: &[f32]) -> f32 {
    mse(y_pred, y_true).sqrt()
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|y_true` - `y_pred`|
///
/// # Examples
///
/// ```
/// use recomendar::metrics::mae;
///
/// let y_true = [3.0, -0.5, 2.0, 7.0];
/// let y_pred = [2.5, 0.0, 2.0, 8.0];
/// let error = mae(&y_pred, &y_true);
/// assert!(error < 1.0);
/// ```
///
/// # Panics
///
/// Panics if slices have different lengths or are empty.
#[must_use]
pub fn mae(y_pred: &[f32], y_true: &[f32]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Slices must have same length");
    assert!(!y_true.is_empty(), "Slices cannot be empty");

    let n = y_true.len() as f32;

    let sum_abs_error: f32 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();

    sum_abs_error / n
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_error_contract.rs"]
mod tests_error_contract;
