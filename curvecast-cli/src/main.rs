//! Curvecast CLI — fit a symbol's price history and predict from it.
//!
//! Modes:
//! - Interactive (no flags): prompt loop asking for symbol, range, then prediction
//!   dates until 'n', next symbol until 'q'.
//! - One-shot: `curvecast --symbol AAPL --range 10y [--date 20270115] [--json]`

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use curvecast_core::data::YahooChartSource;
use curvecast_core::domain::date::{ordinal_to_date, parse_compact_date};
use curvecast_core::domain::RangeCode;
use curvecast_core::pipeline::{FitView, Pipeline};

#[derive(Parser)]
#[command(
    name = "curvecast",
    about = "Curvecast — polynomial price fitting and prediction"
)]
struct Cli {
    /// Ticker symbol. Enables one-shot mode; omit for the prompt loop.
    #[arg(long, requires = "range")]
    symbol: Option<String>,

    /// History window: digits plus 'm' or 'y' (e.g. 3m, 10y).
    #[arg(long)]
    range: Option<String>,

    /// Prediction date (YYYYMMDD).
    #[arg(long, requires = "symbol")]
    date: Option<String>,

    /// Emit the fit as JSON instead of the text summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut pipeline = Pipeline::new(YahooChartSource::new());

    match (cli.symbol, cli.range) {
        (Some(symbol), Some(range)) => one_shot(&mut pipeline, &symbol, &range, cli.date, cli.json),
        (None, Some(_)) => bail!("--range requires --symbol"),
        _ => interactive(&mut pipeline),
    }
}

fn one_shot(
    pipeline: &mut Pipeline<YahooChartSource>,
    symbol: &str,
    range: &str,
    date: Option<String>,
    json: bool,
) -> Result<()> {
    let Ok(range) = range.parse::<RangeCode>() else {
        bail!("invalid range '{range}': must end in 'm' (months) or 'y' (years)");
    };

    {
        let view = pipeline.produce_fit(symbol, range.as_str())?;
        if json {
            print_fit_json(symbol, &range, &view)?;
        } else {
            print_fit_summary(symbol, &range, &view);
        }
    }

    if let Some(date_str) = date {
        let prediction = pipeline.produce_prediction(&date_str)?;
        let date = parse_compact_date(&date_str)?;
        println!(
            "Predicted price for '{symbol}' on {} is {:.2}",
            date.format("%b %d, %Y"),
            prediction.price
        );
    }

    Ok(())
}

fn interactive(pipeline: &mut Pipeline<YahooChartSource>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(symbol) = prompt(&mut lines, ">> Symbol to investigate (or 'q' to quit): ")?
        else {
            break;
        };
        if symbol.eq_ignore_ascii_case("q") {
            break;
        }
        if symbol.is_empty() {
            continue;
        }

        println!("Range of history to fit, e.g. '3m' for 3 months, '10y' for 10 years.");
        let Some(range_input) = prompt(&mut lines, ">> Range: ")? else {
            break;
        };
        let range: RangeCode = match range_input.parse() {
            Ok(r) => r,
            Err(e) => {
                println!("{e}. Start over.");
                continue;
            }
        };

        match pipeline.produce_fit(&symbol, range.as_str()) {
            Ok(view) => print_fit_summary(&symbol, &range, &view),
            Err(e) => {
                println!("{e}. Start over.");
                continue;
            }
        }

        loop {
            let Some(input) =
                prompt(&mut lines, ">> Date to predict (YYYYMMDD, or 'n' for next symbol): ")?
            else {
                return Ok(());
            };
            if input.eq_ignore_ascii_case("n") {
                break;
            }

            let date = match parse_compact_date(&input) {
                Ok(d) => d,
                Err(e) => {
                    println!("{e}. Try again.");
                    continue;
                }
            };

            match pipeline.predict_at(date) {
                Ok(prediction) => println!(
                    "Predicted price for '{symbol}' based on {range} of history on {} is {:.2}",
                    date.format("%b %d, %Y"),
                    prediction.price
                ),
                Err(e) => {
                    println!("{e}");
                    break;
                }
            }
        }
    }

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None), // EOF
    }
}

fn print_fit_summary(symbol: &str, range: &RangeCode, view: &FitView<'_>) {
    println!();
    println!("=== Fit: {symbol} ({range}) ===");
    println!("Points:     {}", view.series.len());

    if let Some((first, last)) = view.series.date_span() {
        let window = match (ordinal_to_date(first), ordinal_to_date(last)) {
            (Some(a), Some(b)) => format!("{} to {}", a.format("%Y%m%d"), b.format("%Y%m%d")),
            _ => format!("ordinal {first} to {last}"),
        };
        println!("Window:     {window}");
    }

    if let Some(last_close) = view.series.close.last() {
        println!("Last close: {last_close:.2}");
    }

    let c = view.polynomial.coefficients();
    println!("Polynomial: c5={:+.6e} c4={:+.6e} c3={:+.6e}", c[0], c[1], c[2]);
    println!("            c2={:+.6e} c1={:+.6e} c0={:+.6e}", c[3], c[4], c[5]);
    println!(
        "Linear:     slope={:+.6}/day intercept={:+.4}",
        view.linear.slope, view.linear.intercept
    );
    println!();
}

fn print_fit_json(symbol: &str, range: &RangeCode, view: &FitView<'_>) -> Result<()> {
    let doc = serde_json::json!({
        "symbol": symbol,
        "range": range.as_str(),
        "points": view.series.len(),
        "series": view.series,
        "polynomial": view.polynomial,
        "linear": view.linear,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
