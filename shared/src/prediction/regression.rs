//! Ordinary least squares over a daily series

/// Straight line fitted to values indexed by day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change per day
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, 1.0 for an exact fit
    pub r_squared: f64,
    /// Standard error of the slope estimate
    pub slope_std_error: f64,
}

impl LinearFit {
    /// Fit `values[i]` against `i`; needs at least three points
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 3 || values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let count = n as f64;
        let mean_x = (count - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / count;

        let (sxx, sxy) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxx, sxy), (i, y)| {
                let dx = i as f64 - mean_x;
                (sxx + dx * dx, sxy + dx * (y - mean_y))
            });
        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let (ss_res, ss_tot) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(ss_res, ss_tot), (i, y)| {
                let residual = y - (intercept + slope * i as f64);
                (ss_res + residual * residual, ss_tot + (y - mean_y).powi(2))
            });

        let r_squared = if ss_tot > 0.0 {
            (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let slope_std_error = (ss_res / (count - 2.0) / sxx).sqrt();

        Some(Self {
            slope,
            intercept,
            r_squared,
            slope_std_error,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
