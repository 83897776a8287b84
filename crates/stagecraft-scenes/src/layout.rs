//! Random row composition for the text/image scene
//!
//! Pure functions: they produce a [`LayoutRow`] describing what to draw and
//! where, and leave node creation to the scene.

use serde::{Deserialize, Serialize};
use stagecraft_core::{SceneRng, Vec2};
use stagecraft_stage::TextureHandle;

/// One slot in a layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    Text { content: String, font_size: f32 },
    Image { texture: TextureHandle, scale: f32 },
}

/// A placed element. `position` is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct RowElement {
    pub content: RowContent,
    pub size: Vec2,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub elements: Vec<RowElement>,
    pub total_width: f32,
}

/// Resources and sizing rules a row is composed from
pub struct RowCatalog<'a> {
    pub texts: &'a [String],
    pub images: &'a [TextureHandle],
    pub layouts: &'a [Vec<SlotKind>],
    pub font_size_min: f32,
    pub font_size_max: f32,
    pub base_font_size: f32,
    pub base_image_size: f32,
}

/// Build a row from a uniformly chosen layout.
///
/// Images are scaled to the largest font size among the text elements built
/// *before* them in the row, or to `base_font_size` if none precede them.
/// Returns `None` when the catalog cannot fill the chosen layout.
pub fn compose_row(
    rng: &mut SceneRng,
    catalog: &RowCatalog<'_>,
    measure_text: impl Fn(&str, f32) -> Vec2,
) -> Option<LayoutRow> {
    let layout = rng.pick(catalog.layouts)?;

    let mut elements = Vec::with_capacity(layout.len());
    let mut max_font_size: Option<f32> = None;
    let mut total_width = 0.0;

    for slot in layout {
        let element = match slot {
            SlotKind::Text => {
                let content = rng.pick(catalog.texts)?.clone();
                // Whole pixel sizes, but never outside the configured bounds
                let font_size = rng
                    .range(catalog.font_size_min, catalog.font_size_max)
                    .round()
                    .max(catalog.font_size_min)
                    .min(catalog.font_size_max);
                max_font_size = Some(max_font_size.map_or(font_size, |m: f32| m.max(font_size)));
                let size = measure_text(&content, font_size);
                RowElement {
                    content: RowContent::Text { content, font_size },
                    size,
                    position: Vec2::ZERO,
                }
            }
            SlotKind::Image => {
                let texture = rng.pick(catalog.images)?.clone();
                let scale = max_font_size.unwrap_or(catalog.base_font_size) / catalog.base_image_size;
                let size = Vec2::new(texture.width * scale, texture.height * scale);
                RowElement {
                    content: RowContent::Image { texture, scale },
                    size,
                    position: Vec2::ZERO,
                }
            }
        };
        total_width += element.size.x;
        elements.push(element);
    }

    Some(LayoutRow {
        elements,
        total_width,
    })
}

/// Place elements left to right, each vertically centered, the whole row
/// horizontally centered within `available`.
pub fn arrange_row(row: &mut LayoutRow, available: Vec2) {
    let mut x = (available.x - row.total_width) / 2.0;
    for element in &mut row.elements {
        element.position = Vec2::new(x, (available.y - element.size.y) / 2.0);
        x += element.size.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagecraft_core::TextureId;

    fn measure(content: &str, font_size: f32) -> Vec2 {
        Vec2::new(content.len() as f32 * font_size * 0.5, font_size)
    }

    fn image(w: f32, h: f32) -> TextureHandle {
        TextureHandle::new(TextureId(1), "img.png", w, h)
    }

    fn catalog<'a>(
        texts: &'a [String],
        images: &'a [TextureHandle],
        layouts: &'a [Vec<SlotKind>],
    ) -> RowCatalog<'a> {
        RowCatalog {
            texts,
            images,
            layouts,
            font_size_min: 16.0,
            font_size_max: 48.0,
            base_font_size: 24.0,
            base_image_size: 64.0,
        }
    }

    #[test]
    fn leading_image_uses_base_font_size() {
        let texts = vec!["abc".to_string()];
        let images = vec![image(64.0, 64.0)];
        let layouts = vec![vec![SlotKind::Image, SlotKind::Text]];
        let mut rng = SceneRng::new(1);

        let row = compose_row(&mut rng, &catalog(&texts, &images, &layouts), measure).unwrap();
        match &row.elements[0].content {
            RowContent::Image { scale, .. } => assert!((scale - 24.0 / 64.0).abs() < 1e-6),
            other => panic!("expected image, got {other:?}"),
        }
        assert_eq!(row.elements[0].size, Vec2::new(24.0, 24.0));
    }

    #[test]
    fn trailing_image_matches_largest_preceding_font() {
        let texts = vec!["ab".to_string()];
        let images = vec![image(64.0, 32.0)];
        let layouts = vec![vec![SlotKind::Text, SlotKind::Text, SlotKind::Image]];
        let mut rng = SceneRng::new(77);

        let row = compose_row(&mut rng, &catalog(&texts, &images, &layouts), measure).unwrap();
        let largest = row
            .elements
            .iter()
            .filter_map(|e| match e.content {
                RowContent::Text { font_size, .. } => Some(font_size),
                RowContent::Image { .. } => None,
            })
            .fold(0.0f32, f32::max);
        match &row.elements[2].content {
            RowContent::Image { scale, .. } => assert!((scale - largest / 64.0).abs() < 1e-6),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn font_sizes_within_range() {
        let texts = vec!["x".to_string()];
        let layouts = vec![vec![SlotKind::Text, SlotKind::Text, SlotKind::Text]];
        let mut rng = SceneRng::new(5);
        for _ in 0..100 {
            let row = compose_row(&mut rng, &catalog(&texts, &[], &layouts), measure).unwrap();
            for e in &row.elements {
                if let RowContent::Text { font_size, .. } = e.content {
                    assert!((16.0..=48.0).contains(&font_size));
                }
            }
        }
    }

    #[test]
    fn fractional_font_bounds_are_respected() {
        let texts = vec!["x".to_string()];
        let layouts = vec![vec![SlotKind::Text, SlotKind::Text]];
        let mut cat = catalog(&texts, &[], &layouts);
        cat.font_size_min = 16.6;
        cat.font_size_max = 16.9;
        let mut rng = SceneRng::new(5);
        for _ in 0..50 {
            let row = compose_row(&mut rng, &cat, measure).unwrap();
            for e in &row.elements {
                if let RowContent::Text { font_size, .. } = e.content {
                    assert!((16.6..=16.9).contains(&font_size), "font size {font_size}");
                }
            }
        }
    }

    #[test]
    fn total_width_is_sum_of_elements() {
        let texts = vec!["hello".to_string(), "hi".to_string()];
        let images = vec![image(64.0, 64.0)];
        let layouts = vec![vec![SlotKind::Text, SlotKind::Image, SlotKind::Text]];
        let mut rng = SceneRng::new(12);
        let row = compose_row(&mut rng, &catalog(&texts, &images, &layouts), measure).unwrap();
        let sum: f32 = row.elements.iter().map(|e| e.size.x).sum();
        assert!((row.total_width - sum).abs() < 1e-4);
    }

    #[test]
    fn missing_resources_yield_none() {
        let layouts = vec![vec![SlotKind::Image, SlotKind::Image]];
        let mut rng = SceneRng::new(2);
        assert!(compose_row(&mut rng, &catalog(&[], &[], &layouts), measure).is_none());
        assert!(compose_row(&mut rng, &catalog(&[], &[], &[]), measure).is_none());
    }

    #[test]
    fn arrange_centers_row() {
        let mut row = LayoutRow {
            elements: vec![
                RowElement {
                    content: RowContent::Text {
                        content: "a".into(),
                        font_size: 20.0,
                    },
                    size: Vec2::new(100.0, 20.0),
                    position: Vec2::ZERO,
                },
                RowElement {
                    content: RowContent::Image {
                        texture: image(50.0, 60.0),
                        scale: 1.0,
                    },
                    size: Vec2::new(50.0, 60.0),
                    position: Vec2::ZERO,
                },
            ],
            total_width: 150.0,
        };
        arrange_row(&mut row, Vec2::new(650.0, 400.0));

        assert_eq!(row.elements[0].position, Vec2::new(250.0, 190.0));
        assert_eq!(row.elements[1].position, Vec2::new(350.0, 170.0));
        let right_edge = row.elements[1].position.x + row.elements[1].size.x;
        assert!((650.0 - right_edge - row.elements[0].position.x).abs() < 1e-4);
    }
}
