//! The track form: raw text fields and their validation into a request.

use thiserror::Error;

use crate::analysis::{StrangleParams, TargetParams};
use crate::config::PresentationMode;
use crate::domain::Ticker;
use crate::models::InstrumentParams;
use crate::ui::UI_TEXT;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("enter a ticker symbol")]
    EmptyTicker,

    #[error("{field}: `{raw}` is not a number")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("put strike {put_strike} must not be above call strike {call_strike}")]
    InvertedStrikes { put_strike: f64, call_strike: f64 },
}

/// A validated form, ready to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    pub ticker: Ticker,
    pub params: InstrumentParams,
}

/// Text as typed. Nothing is parsed until `validate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputForm {
    pub ticker: String,
    pub put_strike: String,
    pub put_premium: String,
    pub call_strike: String,
    pub call_premium: String,
    pub targets: [String; 2],
}

impl InputForm {
    /// Checks every field the mode needs and reports all problems at once.
    pub fn validate(&self, mode: PresentationMode) -> Result<TrackRequest, Vec<InputError>> {
        let mut errors = Vec::new();

        let ticker = Ticker::parse(&self.ticker);
        if ticker.is_none() {
            errors.push(InputError::EmptyTicker);
        }

        let mut field = |name: &'static str, raw: &str| match parse_positive(name, raw) {
            Ok(v) => Some(v),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let params = match mode {
            PresentationMode::OptionsPayoff => {
                let put_strike = field(UI_TEXT.label_put_strike, &self.put_strike);
                let put_premium = field(UI_TEXT.label_put_premium, &self.put_premium);
                let call_strike = field(UI_TEXT.label_call_strike, &self.call_strike);
                let call_premium = field(UI_TEXT.label_call_premium, &self.call_premium);
                match (put_strike, put_premium, call_strike, call_premium) {
                    (Some(put_strike), Some(put_premium), Some(call_strike), Some(call_premium)) => {
                        if put_strike > call_strike {
                            errors.push(InputError::InvertedStrikes {
                                put_strike,
                                call_strike,
                            });
                        }
                        Some(InstrumentParams::Strangle(StrangleParams {
                            put_strike,
                            put_premium,
                            call_strike,
                            call_premium,
                        }))
                    }
                    _ => None,
                }
            }
            PresentationMode::PriceTargets => {
                let first = field("Target 1", &self.targets[0]);
                let second = field("Target 2", &self.targets[1]);
                match (first, second) {
                    (Some(a), Some(b)) => Some(InstrumentParams::Targets(TargetParams {
                        targets: [a, b],
                    })),
                    _ => None,
                }
            }
        };

        match (ticker, params) {
            (Some(ticker), Some(params)) if errors.is_empty() => Ok(TrackRequest { ticker, params }),
            _ => Err(errors),
        }
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    // Accept a decimal comma ("1,25") as typed on pt-BR keyboards
    let normalised = trimmed.replace(',', ".");
    let value: f64 = normalised.parse().map_err(|_| InputError::NotANumber {
        field,
        raw: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strangle_form() -> InputForm {
        InputForm {
            ticker: "bbas3.sa".into(),
            put_strike: "28".into(),
            put_premium: "1,2".into(),
            call_strike: "34".into(),
            call_premium: "0.9".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_strangle_form() {
        let req = strangle_form().validate(PresentationMode::OptionsPayoff).unwrap();
        assert_eq!(req.ticker.as_str(), "BBAS3.SA");
        assert_eq!(
            req.params,
            InstrumentParams::Strangle(StrangleParams {
                put_strike: 28.0,
                put_premium: 1.2,
                call_strike: 34.0,
                call_premium: 0.9,
            })
        );
    }

    #[test]
    fn empty_ticker_is_rejected() {
        let form = InputForm {
            ticker: "  ".into(),
            ..strangle_form()
        };
        assert_eq!(
            form.validate(PresentationMode::OptionsPayoff),
            Err(vec![InputError::EmptyTicker])
        );
    }

    #[test]
    fn zero_and_garbage_fields_are_all_reported() {
        let form = InputForm {
            put_strike: "0".into(),
            call_premium: "abc".into(),
            ..strangle_form()
        };
        let errors = form.validate(PresentationMode::OptionsPayoff).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], InputError::NotPositive { value, .. } if value == 0.0));
        assert!(matches!(errors[1], InputError::NotANumber { .. }));
    }

    #[test]
    fn infinity_is_not_a_price() {
        let form = InputForm {
            call_strike: "inf".into(),
            ..strangle_form()
        };
        let errors = form.validate(PresentationMode::OptionsPayoff).unwrap_err();
        assert!(matches!(errors[0], InputError::NotFinite { .. }));
    }

    #[test]
    fn inverted_strikes_are_rejected() {
        let form = InputForm {
            put_strike: "34".into(),
            call_strike: "28".into(),
            ..strangle_form()
        };
        assert_eq!(
            form.validate(PresentationMode::OptionsPayoff),
            Err(vec![InputError::InvertedStrikes {
                put_strike: 34.0,
                call_strike: 28.0
            }])
        );
    }

    #[test]
    fn target_mode_ignores_strangle_fields() {
        let form = InputForm {
            ticker: "AAPL".into(),
            targets: ["250".into(), "180.5".into()],
            ..Default::default()
        };
        let req = form.validate(PresentationMode::PriceTargets).unwrap();
        assert_eq!(
            req.params,
            InstrumentParams::Targets(TargetParams {
                targets: [250.0, 180.5]
            })
        );
    }

    #[test]
    fn negative_target_is_rejected() {
        let form = InputForm {
            ticker: "AAPL".into(),
            targets: ["-5".into(), "10".into()],
            ..Default::default()
        };
        assert!(form.validate(PresentationMode::PriceTargets).is_err());
    }
}
