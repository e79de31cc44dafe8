//! End-to-end pipeline tests against a canned chartdata response.

use curvecast_core::data::{DataError, QuoteSource};
use curvecast_core::pipeline::{Pipeline, PipelineError};

/// A realistic chartdata payload: preamble, header rows, then records.
const CHARTDATA: &str = "\
uri:/instrument/1.0/aapl/chartdata;type=quote;range=3m/csv
ticker:aapl
Company-Name:Apple Inc.
Exchange-Name:NMS
unit:DAY
timestamp:
first-trade:19801212
last-trade:20170512
currency:USD
previous_close_price:156.1000
Date:20170213,20170224
labels:20170213,20170216,20170221,20170224
values:Date,close,high,low,open,volume
close:133.2900,136.6600
high:133.8800,136.7900
low:132.3000,135.2800
open:133.0800,136.4300
volume:20065500,36253700
20170213,133.2900,133.8800,132.3000,133.0800,23035400
20170214,135.0200,135.0900,133.2500,133.4700,33226200
20170215,135.5100,136.2700,134.6200,135.5200,35623100
20170216,135.3400,135.9000,134.8400,135.6700,22584600
20170217,135.7200,135.7400,135.2800,135.3400,22198200
20170221,136.7000,136.7500,135.9800,136.2300,24507200
20170222,137.1100,137.1200,136.1100,136.4300,20836900
20170223,136.5300,137.4800,136.3000,137.3800,20788200
20170224,136.6600,136.7500,135.9100,135.9100,21776600
";

struct CannedSource(String);

impl CannedSource {
    fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl QuoteSource for CannedSource {
    fn fetch(&self, _symbol: &str, _range: &str) -> Result<String, DataError> {
        Ok(self.0.clone())
    }
}

struct DeadSource;

impl QuoteSource for DeadSource {
    fn fetch(&self, symbol: &str, _range: &str) -> Result<String, DataError> {
        Err(DataError::Retrieval(format!("no route to host for {symbol}")))
    }
}

#[test]
fn produce_fit_parses_headers_away_and_fits() {
    let mut pipeline = Pipeline::new(CannedSource::new(CHARTDATA));
    let view = pipeline.produce_fit("AAPL", "3m").unwrap();

    // 9 record lines; the values/labels header rows must not leak through.
    assert_eq!(view.series.len(), 9);
    assert_eq!(view.polynomial.coefficients().len(), 6);

    // The line and polynomial both track the same mildly-rising window.
    assert!(view.linear.slope.is_finite());
}

#[test]
fn prediction_near_fitted_window_tracks_observed_prices() {
    let mut pipeline = Pipeline::new(CannedSource::new(CHARTDATA));
    pipeline.produce_fit("AAPL", "3m").unwrap();

    // A date inside the fitted window: the estimate is a least-squares
    // value, not an interpolation, but it must stay in a plausible band
    // around the observed closes (132–138).
    let prediction = pipeline.produce_prediction("20170217").unwrap();
    assert!(
        prediction.price > 120.0 && prediction.price < 150.0,
        "price = {}",
        prediction.price
    );
}

#[test]
fn prediction_is_recomputed_identically_each_call() {
    let mut pipeline = Pipeline::new(CannedSource::new(CHARTDATA));
    pipeline.produce_fit("AAPL", "3m").unwrap();

    let a = pipeline.produce_prediction("20170601").unwrap();
    let b = pipeline.produce_prediction("20170601").unwrap();
    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.date_ordinal, b.date_ordinal);
}

#[test]
fn dashed_date_is_invalid_compact_date_is_accepted() {
    let mut pipeline = Pipeline::new(CannedSource::new(CHARTDATA));
    pipeline.produce_fit("AAPL", "3m").unwrap();

    assert!(matches!(
        pipeline.produce_prediction("2017-06-01"),
        Err(PipelineError::InvalidDate(_))
    ));
    assert!(pipeline.produce_prediction("20170601").is_ok());
}

#[test]
fn retrieval_error_surfaces_and_leaves_no_series() {
    let mut pipeline = Pipeline::new(DeadSource);
    let err = pipeline.produce_fit("AAPL", "3m").unwrap_err();

    assert!(matches!(err, PipelineError::Data(DataError::Retrieval(_))));
    assert!(pipeline.series().is_none());
    assert!(pipeline.fit_view().is_none());
}

#[test]
fn headers_only_payload_is_empty_series() {
    let text = "uri:/instrument/1.0/zzz/chartdata\nerror:No data\n";
    let mut pipeline = Pipeline::new(CannedSource::new(text));
    let err = pipeline.produce_fit("ZZZ", "3m").unwrap_err();
    assert!(matches!(err, PipelineError::Data(DataError::EmptySeries)));
}

#[test]
fn view_accessors_expose_renderer_inputs() {
    let mut pipeline = Pipeline::new(CannedSource::new(CHARTDATA));
    pipeline.produce_fit("AAPL", "3m").unwrap();

    // A rendering collaborator needs all three values read-only.
    let series = pipeline.series().unwrap();
    let polynomial = pipeline.polynomial().unwrap();
    let linear = pipeline.linear().unwrap();

    let (first, last) = series.date_span().unwrap();
    assert!(first < last);
    assert!(polynomial.value_at(first).is_finite());
    assert!(linear.value_at(last).is_finite());
}
