//! Trailing window statistics over columns with gaps.
//!
//! A window yields a value only when all of its `window` entries are defined,
//! so a leading gap of `g` rows pushes the first result out to row
//! `g + window - 1`.

/// Trailing arithmetic mean.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        Some(w.iter().sum::<f64>() / w.len() as f64)
    })
}

/// Trailing sample standard deviation (`n - 1` denominator). Needs a window
/// of at least two.
pub fn rolling_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        let n = w.len();
        if n < 2 {
            return None;
        }
        let mean = w.iter().sum::<f64>() / n as f64;
        let ss: f64 = w.iter().map(|x| (x - mean) * (x - mean)).sum();
        Some((ss / (n - 1) as f64).sqrt())
    })
}

fn rolling<F>(values: &[Option<f64>], window: usize, stat: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return out;
    }
    let mut buf = Vec::with_capacity(window);
    for end in window - 1..values.len() {
        buf.clear();
        buf.extend(values[end + 1 - window..=end].iter().map_while(|v| *v));
        if buf.len() == window {
            out[end] = stat(&buf);
        }
    }
    out
}
