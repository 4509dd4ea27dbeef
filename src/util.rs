pub fn sum_vector(vec: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in vec { sum += i }
    sum
}

pub fn mean(vec: &[f64]) -> f64 {
    if vec.is_empty() { return 0.0; }
    sum_vector(vec) / vec.len() as f64
}

// Rounds half away from zero to `places` decimals
pub fn round_to(val: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (val * factor).round() / factor
}
