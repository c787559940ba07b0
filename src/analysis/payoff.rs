//! Expiry payoff of a put/call combination (the strangle) and its break-evens.

use serde::{Deserialize, Serialize};

use crate::analysis::error::{IndicatorError, IndicatorResult};
use crate::config::{ANALYSIS, PayoffRange};
use crate::utils::maths_utils;

/// Strikes and premiums of one put leg and one call leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrangleParams {
    pub put_strike: f64,
    pub put_premium: f64,
    pub call_strike: f64,
    pub call_premium: f64,
}

impl StrangleParams {
    pub fn total_premium(&self) -> f64 {
        self.put_premium + self.call_premium
    }

    /// Every leg finite and positive, put strike at or below call strike.
    /// The closed-form break-evens are zeros of the payoff only under these conditions.
    pub fn validate(&self) -> IndicatorResult<()> {
        let legs = [
            ("put_strike", self.put_strike),
            ("put_premium", self.put_premium),
            ("call_strike", self.call_strike),
            ("call_premium", self.call_premium),
        ];
        for (name, value) in legs {
            if !value.is_finite() || value <= 0.0 {
                return Err(IndicatorError::invalid(name, value));
            }
        }
        if self.put_strike > self.call_strike {
            return Err(IndicatorError::InvertedStrikes {
                put_strike: self.put_strike,
                call_strike: self.call_strike,
            });
        }
        Ok(())
    }

    /// Closed form: the put strike moved down by both premiums
    pub fn breakeven_put(&self) -> f64 {
        self.put_strike - self.put_premium - self.call_premium
    }

    /// Closed form: the call strike moved up by both premiums
    pub fn breakeven_call(&self) -> f64 {
        self.call_strike + self.put_premium + self.call_premium
    }
}

/// max(Kp - P, 0) - pp + max(P - Kc, 0) - pc
pub fn payoff_at(params: &StrangleParams, price: f64) -> f64 {
    let put_leg = (params.put_strike - price).max(0.0) - params.put_premium;
    let call_leg = (price - params.call_strike).max(0.0) - params.call_premium;
    put_leg + call_leg
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub price: f64,
    pub payoff: f64,
}

/// Samples split by where they sit relative to the two break-evens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayoffRegions {
    /// price < breakeven_put
    pub below: Vec<PayoffPoint>,
    /// breakeven_put <= price <= breakeven_call
    pub between: Vec<PayoffPoint>,
    /// price > breakeven_call
    pub above: Vec<PayoffPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    pub params: StrangleParams,
    pub current_price: f64,
    pub samples: Vec<PayoffPoint>,
    pub breakeven_put: f64,
    pub breakeven_call: f64,
}

impl PayoffCurve {
    pub fn total_premium(&self) -> f64 {
        self.params.total_premium()
    }

    pub fn payoff_at_current(&self) -> f64 {
        payoff_at(&self.params, self.current_price)
    }

    pub fn regions(&self) -> PayoffRegions {
        let mut regions = PayoffRegions::default();
        for point in &self.samples {
            if point.price < self.breakeven_put {
                regions.below.push(*point);
            } else if point.price <= self.breakeven_call {
                regions.between.push(*point);
            } else {
                regions.above.push(*point);
            }
        }
        regions
    }

    /// (lowest, highest) sampled price
    pub fn price_span(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.price, self.samples.last()?.price))
    }

    /// (lowest, highest) sampled payoff
    pub fn payoff_span(&self) -> Option<(f64, f64)> {
        let payoffs: Vec<f64> = self.samples.iter().map(|p| p.payoff).collect();
        maths_utils::min_max(&payoffs)
    }
}

/// Payoff sampled over the configured range around `current_price`.
pub fn payoff_curve(params: &StrangleParams, current_price: f64) -> IndicatorResult<PayoffCurve> {
    payoff_curve_with(params, current_price, &ANALYSIS.payoff)
}

pub fn payoff_curve_with(
    params: &StrangleParams,
    current_price: f64,
    range: &PayoffRange,
) -> IndicatorResult<PayoffCurve> {
    params.validate()?;
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(IndicatorError::invalid("current_price", current_price));
    }
    if range.sample_count == 0 {
        return Err(IndicatorError::invalid("sample_count", 0.0));
    }

    let samples = maths_utils::linspace(
        current_price * range.low_factor,
        current_price * range.high_factor,
        range.sample_count,
    )
    .into_iter()
    .map(|price| PayoffPoint {
        price,
        payoff: payoff_at(params, price),
    })
    .collect();

    Ok(PayoffCurve {
        params: *params,
        current_price,
        samples,
        breakeven_put: params.breakeven_put(),
        breakeven_call: params.breakeven_call(),
    })
}
