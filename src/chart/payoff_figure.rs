//! Figure model for the payoff-at-expiry chart.

use eframe::egui::Color32;

use crate::analysis::{PayoffCurve, PayoffPoint};
use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoffRegionKind {
    /// Left of the put break-even
    BelowPut,
    BetweenBreakevens,
    /// Right of the call break-even
    AboveCall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoffSegment {
    pub kind: PayoffRegionKind,
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoffFigure {
    pub title: String,
    pub segments: Vec<PayoffSegment>,
    pub current_price: f64,
    pub current_label: String,
    pub breakeven_put: f64,
    pub breakeven_call: f64,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

impl PayoffFigure {
    pub fn build(curve: &PayoffCurve) -> Self {
        let regions = curve.regions();
        let segments = [
            (
                PayoffRegionKind::BelowPut,
                UI_TEXT.label_region_below_put,
                PLOT_CONFIG.payoff_loss_color,
                regions.below,
            ),
            (
                PayoffRegionKind::BetweenBreakevens,
                UI_TEXT.label_region_between,
                PLOT_CONFIG.payoff_inner_color,
                regions.between,
            ),
            (
                PayoffRegionKind::AboveCall,
                UI_TEXT.label_region_above_call,
                PLOT_CONFIG.payoff_loss_color,
                regions.above,
            ),
        ]
        .into_iter()
        .filter(|(_, _, _, points)| !points.is_empty())
        .map(|(kind, label, color, points)| PayoffSegment {
            kind,
            label: label.to_string(),
            color,
            points: to_plot_points(&points),
        })
        .collect();

        let x_bounds = curve
            .price_span()
            .unwrap_or((curve.current_price * 0.5, curve.current_price * 1.5));
        let (lo, hi) = curve.payoff_span().unwrap_or((-1.0, 1.0));
        // Keep the zero line on screen
        let (lo, hi) = (lo.min(0.0), hi.max(0.0));
        let pad = ((hi - lo) * PLOT_CONFIG.plot_y_padding_pct).max(0.01);

        Self {
            title: UI_TEXT.payoff_chart_title.to_string(),
            segments,
            current_price: curve.current_price,
            current_label: format!("{}: {:.2}", UI_TEXT.label_current_price, curve.current_price),
            breakeven_put: curve.breakeven_put,
            breakeven_call: curve.breakeven_call,
            x_bounds,
            y_bounds: (lo - pad, hi + pad),
        }
    }

    /// Text lines shown under the chart
    pub fn readouts(&self) -> [(&'static str, String); 2] {
        [
            (UI_TEXT.label_breakeven_put, format!("{:.2}", self.breakeven_put)),
            (UI_TEXT.label_breakeven_call, format!("{:.2}", self.breakeven_call)),
        ]
    }
}

fn to_plot_points(points: &[PayoffPoint]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.price, p.payoff]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{StrangleParams, payoff_curve};

    fn curve() -> PayoffCurve {
        let params = StrangleParams {
            put_strike: 28.0,
            put_premium: 1.2,
            call_strike: 34.0,
            call_premium: 0.9,
        };
        payoff_curve(&params, 30.0).unwrap()
    }

    #[test]
    fn three_regions_in_price_order() {
        let fig = PayoffFigure::build(&curve());
        let kinds: Vec<PayoffRegionKind> = fig.segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PayoffRegionKind::BelowPut,
                PayoffRegionKind::BetweenBreakevens,
                PayoffRegionKind::AboveCall
            ]
        );
        let total: usize = fig.segments.iter().map(|s| s.points.len()).sum();
        assert_eq!(total, 100);
        assert_eq!(fig.segments[0].color, PLOT_CONFIG.payoff_loss_color);
        assert_eq!(fig.segments[1].color, PLOT_CONFIG.payoff_inner_color);
    }

    #[test]
    fn readouts_show_breakevens() {
        let fig = PayoffFigure::build(&curve());
        let [(_, put), (_, call)] = fig.readouts();
        assert_eq!(put, "25.90");
        assert_eq!(call, "36.10");
        assert_eq!(fig.current_label, format!("{}: 30.00", UI_TEXT.label_current_price));
    }

    #[test]
    fn bounds_contain_zero_and_sampled_range() {
        let fig = PayoffFigure::build(&curve());
        assert_eq!(fig.x_bounds, (15.0, 45.0));
        assert!(fig.y_bounds.0 < 0.0 && fig.y_bounds.1 > 0.0);
    }
}
