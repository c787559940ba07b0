use argminmax::ArgMinMax;

/// (min, max) of a non-empty slice. NaNs are ignored by argminmax.
#[inline]
pub fn min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index): (usize, usize) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

#[inline]
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Interpolates between `a` and `b`. Written so that t = 0 gives `a` and t = 1 gives `b` exactly.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// `count` equally spaced values over [start, end], both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count).map(|i| lerp(start, end, i as f64 / last)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(15.0, 45.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 15.0);
        assert_eq!(xs[99], 45.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn min_max_finds_extremes() {
        assert_eq!(min_max(&[10.0, 12.0, 11.0, 15.0, 9.0]), Some((9.0, 15.0)));
        assert_eq!(min_max(&[]), None);
    }
}
