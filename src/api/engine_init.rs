use rand::Rng;
use tracing::debug;

use crate::core::{ArcGenerator, Segment};
use crate::error::ChartResult;
use crate::interaction::{DragGesture, InteractionState};
use crate::render::{OrdinalColorScale, RenderFrame, Renderer, ShapeReconciler};

use super::bounds::{INNER_RADIUS, OUTER_RADIUS, resolve_bounds_and_scales};
use super::validation::{validate_config, validate_segment_ids};
use super::{DragPie, DragPieConfig, PieHooks};

impl<R: Renderer> DragPie<R> {
    /// Creates a chart with default accessors and no event callbacks, then
    /// performs the initial draw.
    pub fn new(renderer: R, data: Vec<Segment>, config: DragPieConfig) -> ChartResult<Self> {
        Self::with_hooks(renderer, data, config, PieHooks::default())
    }

    /// Creates a chart with custom accessors and event callbacks, then
    /// performs the initial draw.
    pub fn with_hooks(
        renderer: R,
        data: Vec<Segment>,
        config: DragPieConfig,
        hooks: PieHooks,
    ) -> ChartResult<Self> {
        validate_config(&config)?;
        validate_segment_ids(&data)?;

        let (bounds, scales) = resolve_bounds_and_scales(&config, &data, hooks.accessors.as_ref())?;
        let id_prefix = config.id_prefix.clone().unwrap_or_else(generate_id_prefix);
        let segment_arc = ArcGenerator::new(INNER_RADIUS, OUTER_RADIUS)
            .with_corner_radius(config.corner_radius)
            .with_tolerance(config.arc_tolerance);
        let colors = OrdinalColorScale::new(config.category_colors.clone());

        debug!(
            segments = data.len(),
            id_prefix = %id_prefix,
            ?bounds,
            "creating drag pie"
        );

        let mut chart = Self {
            renderer,
            last_frame: RenderFrame::new(config.size, OUTER_RADIUS),
            config,
            accessors: hooks.accessors,
            events: hooks.events,
            data,
            bounds,
            scales,
            colors,
            segment_arc,
            interaction: InteractionState::default(),
            gesture: DragGesture::default(),
            reconciler: ShapeReconciler::new(),
            id_prefix,
        };
        chart.draw()?;
        Ok(chart)
    }
}

/// Random token keeping element ids of separate charts apart.
fn generate_id_prefix() -> String {
    let token: u32 = rand::rng().random();
    format!("drag-pie-{token:08x}")
}

#[cfg(test)]
mod tests {
    use super::generate_id_prefix;

    #[test]
    fn generated_prefixes_differ() {
        let first = generate_id_prefix();
        let second = generate_id_prefix();
        assert_ne!(first, second);

        let token = first.strip_prefix("drag-pie-").expect("prefix");
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
