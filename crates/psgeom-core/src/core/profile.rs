/// Smallest magnitude an angle denominator may take before `atan2` is evaluated.
pub const MIN_ANGLE_OFFSET: f64 = 1e-5;

#[inline]
pub fn tanh_interface(signed_distance: f64, width: f64) -> f64 {
    ((signed_distance / width).tanh() + 1.0) / 2.0
}

#[inline]
pub fn heaviside(x: f64, threshold: f64) -> f64 {
    if x < threshold { 0.0 } else { 1.0 }
}

/// `H(x, left) - H(x, right)`: 1 on `[left, right)`, 0 elsewhere when `left <= right`.
#[inline]
pub fn step_window(x: f64, left: f64, right: f64) -> f64 {
    heaviside(x, left) - heaviside(x, right)
}

#[inline]
pub fn clamp_away_from_zero(value: f64, min_magnitude: f64) -> f64 {
    if value.abs() < min_magnitude {
        min_magnitude.copysign(value)
    } else {
        value
    }
}

#[inline]
pub fn affine(indicator: f64, low: f64, high: f64) -> f64 {
    low + indicator * (high - low)
}
