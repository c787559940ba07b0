use anyhow::{Context, Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use strike_scope::analysis::{PayoffCurve, StrangleParams, payoff_curve_with};
use strike_scope::config::{ANALYSIS, PayoffRange};

/// Prints the expiry payoff of a long strangle as a table, without fetching any market data.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    put_strike: f64,
    #[arg(long)]
    put_premium: f64,
    #[arg(long)]
    call_strike: f64,
    #[arg(long)]
    call_premium: f64,
    /// Price the sample range is centred on
    #[arg(long)]
    price: f64,
    #[arg(long, default_value_t = 11)]
    rows: usize,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Payoff")]
    payoff: String,
    #[tabled(rename = "Region")]
    region: &'static str,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let curve = sample_curve(&args)?;

    println!("{}", Table::new(rows(&curve)).with(Style::rounded()));
    println!(
        "Break-evens: {:.2} / {:.2}   Total premium: {:.2}   Payoff at {:.2}: {:+.2}",
        curve.breakeven_put,
        curve.breakeven_call,
        curve.total_premium(),
        curve.current_price,
        curve.payoff_at_current()
    );
    Ok(())
}

/// Rejects bad legs before any payoff is computed.
fn sample_curve(args: &Args) -> Result<PayoffCurve> {
    if args.rows < 2 {
        bail!("--rows must be at least 2 (got {})", args.rows);
    }

    let params = StrangleParams {
        put_strike: args.put_strike,
        put_premium: args.put_premium,
        call_strike: args.call_strike,
        call_premium: args.call_premium,
    };
    params.validate().context("Invalid strangle")?;

    let range = PayoffRange {
        sample_count: args.rows,
        ..ANALYSIS.payoff
    };
    payoff_curve_with(&params, args.price, &range).context("Could not sample the payoff curve")
}

fn rows(curve: &PayoffCurve) -> Vec<Row> {
    let regions = curve.regions();
    let tagged = [
        ("below put break-even", regions.below),
        ("between break-evens", regions.between),
        ("above call break-even", regions.above),
    ];

    tagged
        .into_iter()
        .flat_map(|(region, points)| {
            points.into_iter().map(move |p| Row {
                price: format!("{:.2}", p.price),
                payoff: format!("{:+.2}", p.payoff),
                region,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(put_strike: f64, put_premium: f64, call_strike: f64, call_premium: f64) -> Args {
        Args {
            put_strike,
            put_premium,
            call_strike,
            call_premium,
            price: 30.0,
            rows: 11,
        }
    }

    #[test]
    fn valid_legs_give_one_row_per_sample() {
        let curve = sample_curve(&args(28.0, 1.2, 34.0, 0.9)).unwrap();
        let table = rows(&curve);
        assert_eq!(table.len(), 11);
        assert_eq!(table[0].price, "15.00");
        assert_eq!(table[0].region, "below put break-even");
        assert_eq!(table[10].region, "above call break-even");
    }

    #[test]
    fn negative_and_zero_legs_are_rejected() {
        assert!(sample_curve(&args(-28.0, 0.0, 34.0, -0.9)).is_err());
        assert!(sample_curve(&args(28.0, 1.2, 34.0, 0.0)).is_err());
        assert!(sample_curve(&args(28.0, f64::NAN, 34.0, 0.9)).is_err());
    }

    #[test]
    fn inverted_strikes_are_rejected() {
        assert!(sample_curve(&args(34.0, 1.2, 28.0, 0.9)).is_err());
    }

    #[test]
    fn too_few_rows_is_rejected() {
        let mut a = args(28.0, 1.2, 34.0, 0.9);
        a.rows = 1;
        assert!(sample_curve(&a).is_err());
    }
}
