use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, ScenePrimitive, ShapeKey};

/// Renderer that keeps an SVG element per key and serializes a document.
///
/// Elements are written in the draw order of the last finished frame; the
/// chart group is scaled and translated so local coordinates centered on
/// the pie fill the `size` x `size` viewport.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    elements: IndexMap<ShapeKey, String>,
    order: Vec<ShapeKey>,
    size: f64,
    extent_radius: f64,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn element(&self, key: &ShapeKey) -> Option<&str> {
        self.elements.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serializes the current element set as a standalone SVG document.
    #[must_use]
    pub fn document(&self) -> String {
        let scale = if self.extent_radius > 0.0 {
            self.size / self.extent_radius / 2.0
        } else {
            1.0
        };

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\">",
            size = self.size
        ));
        out.push_str(&format!(
            "<g transform=\"scale({scale}) translate({r},{r})\">",
            r = self.extent_radius
        ));
        for key in &self.order {
            if let Some(element) = self.elements.get(key) {
                out.push_str(element);
            }
        }
        out.push_str("</g></svg>");
        out
    }

    fn markup(primitive: &ScenePrimitive) -> String {
        match primitive {
            ScenePrimitive::Arc(arc) => {
                let fill = arc
                    .fill
                    .map(|color| format!(" style=\"fill:{}\"", color.to_css()))
                    .unwrap_or_default();
                format!(
                    "<path id=\"{}\" class=\"{}\" d=\"{}\"{fill}/>",
                    escape_xml(&arc.element_id),
                    arc.css_classes(),
                    arc.path.to_svg()
                )
            }
            ScenePrimitive::Label(label) => format!(
                "<text id=\"{}\" class=\"drag-pie-label drag-pie-label{}\">\
                 <textPath href=\"#{}\">{}</textPath></text>",
                escape_xml(&label.element_id),
                label.segment_index,
                escape_xml(&label.path_element_id),
                escape_xml(&label.text)
            ),
        }
    }
}

impl Renderer for SvgRenderer {
    fn create(&mut self, primitive: &ScenePrimitive) -> ChartResult<()> {
        if self.elements.contains_key(primitive.key()) {
            return Err(ChartError::Render(format!(
                "element `{}` already exists",
                primitive.element_id()
            )));
        }
        self.elements
            .insert(primitive.key().clone(), Self::markup(primitive));
        Ok(())
    }

    fn update(&mut self, primitive: &ScenePrimitive) -> ChartResult<()> {
        let Some(element) = self.elements.get_mut(primitive.key()) else {
            return Err(ChartError::Render(format!(
                "element `{}` does not exist",
                primitive.element_id()
            )));
        };
        *element = Self::markup(primitive);
        Ok(())
    }

    fn remove(&mut self, key: &ShapeKey) -> ChartResult<()> {
        self.elements.shift_remove(key);
        Ok(())
    }

    fn finish_frame(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.size = frame.size;
        self.extent_radius = frame.extent_radius;
        self.order = frame
            .primitives
            .iter()
            .map(|primitive| primitive.key().clone())
            .collect();
        Ok(())
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
