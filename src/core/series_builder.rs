use crate::core::{BandPoint, DataPoint};
use crate::error::{ChartError, ChartResult};

fn ensure_aligned(columns: &[(&str, usize)]) -> ChartResult<usize> {
    let Some(&(first_name, expected)) = columns.first() else {
        return Ok(0);
    };
    for &(name, len) in &columns[1..] {
        if len != expected {
            return Err(ChartError::InvalidData(format!(
                "column `{name}` has {len} samples but `{first_name}` has {expected}"
            )));
        }
    }
    Ok(expected)
}

/// Zips an explicit x column with a y column.
///
/// Columns must have equal length; a mismatch fails fast instead of
/// truncating.
pub fn zip_points(xs: &[f64], ys: &[f64]) -> ChartResult<Vec<DataPoint>> {
    ensure_aligned(&[("x", xs.len()), ("y", ys.len())])?;
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| DataPoint::new(x, y))
        .collect())
}

/// Zips the four columns of a banded series, preserving input order.
pub fn zip_band_points(
    xs: &[f64],
    ys: &[f64],
    lows: &[f64],
    highs: &[f64],
) -> ChartResult<Vec<BandPoint>> {
    let len = ensure_aligned(&[
        ("x", xs.len()),
        ("y", ys.len()),
        ("low", lows.len()),
        ("high", highs.len()),
    ])?;
    Ok((0..len)
        .map(|i| BandPoint::new(xs[i], ys[i], lows[i], highs[i]))
        .collect())
}

/// Plots values against their position, with the first value at `first_x`.
#[must_use]
pub fn indexed_points(values: &[f64], first_x: f64) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| DataPoint::new(first_x + i as f64, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{indexed_points, zip_band_points, zip_points};
    use crate::core::{BandPoint, DataPoint};

    #[test]
    fn mismatched_columns_fail_fast() {
        let err = zip_points(&[1.0, 2.0], &[1.0]).expect_err("length mismatch");
        assert!(err.to_string().contains("`y` has 1 samples"));

        assert!(zip_band_points(&[1.0], &[1.0], &[0.5], &[]).is_err());
    }

    #[test]
    fn band_zip_keeps_index_alignment() {
        let points = zip_band_points(&[10.0, 20.0], &[0.5, 0.52], &[0.4, 0.45], &[0.6, 0.58])
            .expect("aligned");
        assert_eq!(
            points,
            vec![
                BandPoint::new(10.0, 0.5, 0.4, 0.6),
                BandPoint::new(20.0, 0.52, 0.45, 0.58),
            ]
        );
    }

    #[test]
    fn indexed_points_start_at_requested_offset() {
        let points = indexed_points(&[3.0, 4.0], 1.0);
        assert_eq!(points, vec![DataPoint::new(1.0, 3.0), DataPoint::new(2.0, 4.0)]);
        assert!(indexed_points(&[], 0.0).is_empty());
    }
}
