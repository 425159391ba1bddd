pub mod band_series;
pub mod history;
pub mod line_series;
pub mod scale;
pub mod series_builder;
pub mod types;

pub use band_series::{BandGeometry, band_value_domain, project_band_geometry};
pub use history::{HistoryBuffer, HistorySeries, MIN_CHARTABLE_HISTORY};
pub use line_series::{LineGeometry, PathVertex, project_line_path};
pub use scale::{LinearScale, scale};
pub use series_builder::{indexed_points, zip_band_points, zip_points};
pub use types::{BandPoint, ChartLayout, DataPoint, Domain, Viewport};
