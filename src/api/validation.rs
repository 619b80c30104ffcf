use std::collections::HashSet;

use crate::core::Segment;
use crate::error::{ChartError, ChartResult};

use super::DragPieConfig;

pub(super) fn validate_config(config: &DragPieConfig) -> ChartResult<()> {
    if !config.size.is_finite() || config.size <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "size must be finite and > 0".to_owned(),
        ));
    }
    if !config.corner_radius.is_finite() || config.corner_radius < 0.0 {
        return Err(ChartError::InvalidConfig(
            "corner radius must be finite and >= 0".to_owned(),
        ));
    }
    if !config.arc_tolerance.is_finite() || config.arc_tolerance <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "arc tolerance must be finite and > 0".to_owned(),
        ));
    }

    validate_bound_pair("segment", config.segment_minimum, config.segment_maximum)?;
    validate_bound_pair("category", config.category_minimum, config.category_maximum)?;

    for (name, maximum) in [
        ("segment scale maximum", config.segment_scale_maximum),
        ("category scale maximum", config.category_scale_maximum),
    ] {
        if let Some(maximum) = maximum {
            if !maximum.is_finite() || maximum <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
    }

    if let Some(prefix) = &config.id_prefix {
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ChartError::InvalidConfig(
                "id prefix must be non-empty and contain no whitespace".to_owned(),
            ));
        }
    }

    for color in &config.category_colors {
        color
            .validate()
            .map_err(|e| ChartError::InvalidConfig(format!("category color: {e}")))?;
    }

    Ok(())
}

fn validate_bound_pair(kind: &str, minimum: Option<f64>, maximum: Option<f64>) -> ChartResult<()> {
    for (side, value) in [("minimum", minimum), ("maximum", maximum)] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "{kind} {side} must be finite"
                )));
            }
        }
    }
    if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
        if minimum > maximum {
            return Err(ChartError::InvalidConfig(format!(
                "{kind} minimum must be <= {kind} maximum"
            )));
        }
    }
    Ok(())
}

/// Segment ids key rendered shapes, so they must be unique.
pub(super) fn validate_segment_ids(data: &[Segment]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(data.len());
    for segment in data {
        if !seen.insert(segment.id.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate segment id `{}`",
                segment.id
            )));
        }
    }
    Ok(())
}
