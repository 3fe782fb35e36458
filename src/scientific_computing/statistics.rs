// summary statistics over repeated simulation runs

pub fn mean(data:&[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>()/data.len() as f64)
}

// n-1 denominator, needs at least two samples
pub fn sample_variance(data:&[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let n = data.len() as f64;
    let mean = mean(data)?;
    let ss:f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Some(ss/(n - 1.0))
}

pub fn sample_std_dev(data:&[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}
