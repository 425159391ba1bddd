use simviz::api::{
    API_BASE_URL_ENV, ChartPalette, DEFAULT_API_BASE_URL, Dashboard, DashboardConfig, PanelKind,
};
use simviz::core::{ChartLayout, Viewport};

#[test]
fn default_config_targets_local_service_with_all_panels() {
    let config = DashboardConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.panels, PanelKind::ALL.to_vec());
    assert_eq!(config.chart_layout, ChartLayout::default());
    assert!(config.validate().is_ok());
}

#[test]
fn config_round_trips_through_json() {
    let config = DashboardConfig::default()
        .with_api_base_url("http://sim.internal:9000")
        .with_chart_layout(ChartLayout::new(Viewport::new(640, 320), 24.0))
        .with_panels([PanelKind::Convergence, PanelKind::Standard]);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"convergence\""));
    assert!(json.contains("\"#8a5d2a\""));

    let parsed = DashboardConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.api_base_url, config.api_base_url);
    assert_eq!(parsed.chart_layout, config.chart_layout);
    assert_eq!(parsed.panels, config.panels);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = DashboardConfig::from_json_str(r#"{"panels": ["importance-sampling"]}"#)
        .expect("parse");
    assert_eq!(parsed.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(parsed.panels, vec![PanelKind::ImportanceSampling]);
    assert_eq!(parsed.palette, ChartPalette::default());
}

#[test]
fn invalid_configs_are_rejected() {
    let duplicate = DashboardConfig::default()
        .with_panels([PanelKind::Standard, PanelKind::Standard]);
    assert!(Dashboard::new(duplicate).is_err());

    let empty = DashboardConfig::default().with_panels([]);
    assert!(empty.validate().is_err());

    let cramped = DashboardConfig::default()
        .with_chart_layout(ChartLayout::new(Viewport::new(40, 40), 20.0));
    assert!(cramped.validate().is_err());

    let palette = ChartPalette {
        stroke_width: 0.0,
        ..ChartPalette::default()
    };
    assert!(DashboardConfig::default().with_palette(palette).validate().is_err());

    assert!(DashboardConfig::from_json_str("{\"palette\": {\"band\": \"tan\"}}").is_err());
}

#[test]
fn env_override_applies_trimmed_url_and_ignores_blank_values() {
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var(API_BASE_URL_ENV, "  http://sim.example:8080  ") };
    let config = DashboardConfig::default().with_env_overrides();
    assert_eq!(config.api_base_url, "http://sim.example:8080");

    for blank in ["", "   "] {
        unsafe { std::env::set_var(API_BASE_URL_ENV, blank) };
        let config = DashboardConfig::default().with_env_overrides();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    unsafe { std::env::remove_var(API_BASE_URL_ENV) };
    let config = DashboardConfig::default().with_env_overrides();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}
