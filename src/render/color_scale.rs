use indexmap::IndexMap;

use crate::render::Color;

/// Ten-color categorical palette used when no colors are configured.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Ordinal mapping from keys to colors.
///
/// Keys receive colors in first-seen order and the range repeats once
/// exhausted, so a key keeps its color for the lifetime of the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    range: Vec<Color>,
    domain: IndexMap<String, usize>,
}

impl OrdinalColorScale {
    #[must_use]
    pub fn new(range: Vec<Color>) -> Self {
        let range = if range.is_empty() {
            CATEGORY10.to_vec()
        } else {
            range
        };
        Self {
            range,
            domain: IndexMap::new(),
        }
    }

    pub fn color_for(&mut self, key: &str) -> Color {
        let slot = match self.domain.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.domain.len();
                self.domain.insert(key.to_owned(), slot);
                slot
            }
        };
        self.range[slot % self.range.len()]
    }

    #[must_use]
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.keys().map(String::as_str)
    }

    #[must_use]
    pub fn range(&self) -> &[Color] {
        &self.range
    }
}
