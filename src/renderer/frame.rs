//! CPU-side frame assembly
//!
//! Turns [`Canvas`] calls into a vertex list in arena pixel coordinates.
//! Everything samples the sprite atlas; rectangles and text use its white texel.

use glam::{IVec2, Vec2};

use super::font;
use super::shapes::{quad, solid_quad};
use super::vertex::Vertex;
use crate::assets::AtlasLayout;
use crate::scene::{Canvas, Color, SpriteKey, colors};

/// Font pixel size on screen
pub const TEXT_SCALE: i32 = 4;

/// A finished frame, ready for upload
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: Color,
    pub vertices: Vec<Vertex>,
}

pub struct FrameBuilder<'a> {
    layout: &'a AtlasLayout,
    frame: Frame,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(layout: &'a AtlasLayout) -> Self {
        Self {
            layout,
            frame: Frame {
                clear: colors::BACKGROUND,
                vertices: Vec::with_capacity(64),
            },
        }
    }

    pub fn finish(self) -> Frame {
        self.frame
    }
}

impl Canvas for FrameBuilder<'_> {
    fn clear(&mut self, color: Color) {
        self.frame.clear = color;
        self.frame.vertices.clear();
    }

    fn sprite(&mut self, key: SpriteKey, top_left: IVec2) {
        let region = self.layout.region(key);
        let (uv_min, uv_max) = self.layout.uv(region);
        let min = top_left.as_vec2();
        let max = min + region.size.as_vec2();
        self.frame
            .vertices
            .extend_from_slice(&quad(min, max, uv_min, uv_max, [1.0; 4]));
    }

    fn fill_rect(&mut self, top_left: IVec2, size: IVec2, color: Color) {
        let min = top_left.as_vec2();
        let max = (top_left + size).as_vec2();
        self.frame
            .vertices
            .extend_from_slice(&solid_quad(min, max, self.layout.white_uv(), color));
    }

    fn text_centered(&mut self, text: &str, center: IVec2, color: Color) {
        let size = font::text_size(text) * TEXT_SCALE;
        let origin = center - size / 2;
        let uv = self.layout.white_uv();
        let scale = TEXT_SCALE as f32;
        for run in font::runs(text) {
            let min = origin.as_vec2() + run.start.as_vec2() * scale;
            let max = min + Vec2::new(run.len as f32, 1.0) * scale;
            self.frame
                .vertices
                .extend_from_slice(&solid_quad(min, max, uv, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBundle, SpriteAtlas};
    use crate::scene;
    use crate::sim::{MatchRules, MatchState, Side};
    use image::{Rgba, RgbaImage};

    fn atlas() -> SpriteAtlas {
        let img = RgbaImage::from_pixel(50, 50, Rgba([200, 0, 0, 255]));
        let bundle = AssetBundle::from_images([img.clone(), img.clone(), img.clone(), img]);
        SpriteAtlas::pack(&bundle, 2048).unwrap()
    }

    #[test]
    fn test_match_frame_has_two_sprites_and_two_bars() {
        let atlas = atlas();
        let state = MatchState::new(MatchRules::default());
        let mut builder = FrameBuilder::new(&atlas.layout);
        scene::draw_match(&state, &mut builder);
        let frame = builder.finish();

        assert_eq!(frame.clear, colors::BACKGROUND);
        assert_eq!(frame.vertices.len(), 4 * 6);
        // First sprite: player 1 idle at its start corner
        assert_eq!(frame.vertices[0].position, [100.0, 300.0]);
        assert_eq!(frame.vertices[5].position, [150.0, 350.0]);
    }

    #[test]
    fn test_clear_discards_earlier_shapes() {
        let atlas = atlas();
        let mut builder = FrameBuilder::new(&atlas.layout);
        builder.fill_rect(IVec2::ZERO, IVec2::splat(10), colors::TEXT);
        builder.clear(colors::BACKGROUND);
        assert!(builder.finish().vertices.is_empty());
    }

    #[test]
    fn test_win_text_is_centered() {
        let atlas = atlas();
        let mut builder = FrameBuilder::new(&atlas.layout);
        scene::draw_result(Side::Player1, &mut builder);
        let frame = builder.finish();
        assert!(!frame.vertices.is_empty());

        let (min, max) = frame.vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::from(v.position);
                (lo.min(p), hi.max(p))
            },
        );
        let mid = (min + max) / 2.0;
        assert!((mid.x - 400.0).abs() <= 2.0 * TEXT_SCALE as f32, "{mid}");
        assert!((mid.y - 300.0).abs() <= 2.0 * TEXT_SCALE as f32, "{mid}");
        assert!(frame.vertices.iter().all(|v| v.color == colors::TEXT));
    }
}
