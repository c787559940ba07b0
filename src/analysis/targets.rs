use serde::{Deserialize, Serialize};

use crate::analysis::error::{IndicatorError, IndicatorResult};
use crate::config::ChangePct;

/// Two user-chosen price targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetParams {
    pub targets: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetDistance {
    pub target: f64,
    /// target - current
    pub absolute: f64,
    pub change_pct: ChangePct,
}

/// Relative distance from `current_price` to each target, in input order.
pub fn target_distances(
    targets: &[f64],
    current_price: f64,
) -> IndicatorResult<Vec<TargetDistance>> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(IndicatorError::invalid("current_price", current_price));
    }
    targets
        .iter()
        .map(|&target| {
            if !target.is_finite() || target <= 0.0 {
                return Err(IndicatorError::invalid("target", target));
            }
            let absolute = target - current_price;
            Ok(TargetDistance {
                target,
                absolute,
                change_pct: ChangePct::new(absolute / current_price),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_keep_sign_and_order() {
        let d = target_distances(&[40.0, 25.0], 32.0).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].absolute, 8.0);
        assert_eq!(d[0].change_pct.value(), 0.25);
        assert!(d[1].change_pct.value() < 0.0);
    }

    #[test]
    fn zero_current_price_is_rejected() {
        assert_eq!(
            target_distances(&[10.0], 0.0),
            Err(IndicatorError::InvalidParameter {
                name: "current_price",
                value: 0.0
            })
        );
    }

    #[test]
    fn non_positive_target_is_rejected() {
        assert!(matches!(
            target_distances(&[10.0, -1.0], 5.0),
            Err(IndicatorError::InvalidParameter { name: "target", .. })
        ));
    }
}
