use simviz::RequestError;
use simviz::api::{
    DistributionKind, SimulationMethod, SimulationRequest, SimulationResponse,
};
use simviz::core::{BandPoint, DataPoint};

const RESPONSE_JSON: &str = r#"{
    "method": "importance",
    "estimate": 0.52,
    "variance": 0.0025,
    "ci_low": 0.45,
    "ci_high": 0.58,
    "samples_used": 20,
    "sample_sizes": [10, 20],
    "estimate_series": [0.5, 0.52],
    "variance_series": [0.004, 0.0025],
    "ci_low_series": [0.4, 0.45],
    "ci_high_series": [0.6, 0.58],
    "trace": [0.2, 0.4],
    "autocorrelation": [1.0, 0.3, 0.1]
}"#;

#[test]
fn request_serializes_with_wire_names() {
    let request = SimulationRequest::default()
        .with_method(SimulationMethod::MetropolisHastings)
        .with_distribution(DistributionKind::Uniform);

    let json = serde_json::to_value(request).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "method": "metropolis-hastings",
            "distribution": "uniform",
            "dimensions": 2,
            "samples": 5000,
            "seed": null
        })
    );
}

#[test]
fn request_bounds_match_the_service() {
    let request = SimulationRequest::default();
    assert!(request.validate().is_ok());
    assert!(request.with_dimensions(0).validate().is_err());
    assert!(request.with_dimensions(21).validate().is_err());
    assert!(request.with_samples(99).validate().is_err());
    assert!(request.with_samples(200_001).validate().is_err());
    assert!(request.with_samples(200_000).with_dimensions(20).validate().is_ok());
}

#[test]
fn response_parses_and_builds_series() {
    let response = SimulationResponse::from_json_str(RESPONSE_JSON).expect("valid body");
    assert_eq!(response.method, SimulationMethod::Importance);

    let series = response.series().expect("aligned columns");
    assert_eq!(
        series.convergence,
        vec![
            BandPoint::new(10.0, 0.5, 0.4, 0.6),
            BandPoint::new(20.0, 0.52, 0.45, 0.58),
        ]
    );
    assert_eq!(
        series.variance,
        vec![DataPoint::new(10.0, 0.004), DataPoint::new(20.0, 0.0025)]
    );
    assert_eq!(
        series.trace,
        vec![DataPoint::new(1.0, 0.2), DataPoint::new(2.0, 0.4)]
    );
    assert_eq!(series.autocorrelation[0], DataPoint::new(0.0, 1.0));
    assert_eq!(series.autocorrelation.len(), 3);
}

#[test]
fn trace_and_autocorrelation_are_optional_on_the_wire() {
    let mut body: serde_json::Value = serde_json::from_str(RESPONSE_JSON).expect("json");
    let object = body.as_object_mut().expect("object");
    object.remove("trace");
    object.remove("autocorrelation");

    let response =
        SimulationResponse::from_json_str(&body.to_string()).expect("optional columns");
    assert!(response.trace.is_empty());
    assert!(response.autocorrelation.is_empty());
}

#[test]
fn misaligned_columns_are_malformed() {
    let body = RESPONSE_JSON.replace("\"variance_series\": [0.004, 0.0025]", "\"variance_series\": [0.004]");
    let err = SimulationResponse::from_json_str(&body).expect_err("misaligned");
    assert!(matches!(err, RequestError::MalformedResponse(_)));
    assert!(err.to_string().contains("variance_series"));
}

#[test]
fn missing_fields_are_malformed() {
    let err = SimulationResponse::from_json_str(r#"{"estimate": 1.0}"#).expect_err("missing");
    assert!(matches!(err, RequestError::MalformedResponse(_)));
}

#[test]
fn non_finite_values_are_malformed() {
    let mut response = SimulationResponse::from_json_str(RESPONSE_JSON).expect("valid body");
    response.trace[1] = f64::NAN;
    let err = response.validate().expect_err("nan trace");
    assert!(err.to_string().contains("trace[1]"));
}
