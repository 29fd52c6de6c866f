//! Sprite assets
//!
//! The four fighter sprites are decoded once at startup and packed into a
//! single RGBA atlas with one opaque white texel for untextured shapes.

use std::path::{Path, PathBuf};

use glam::UVec2;
use image::RgbaImage;
use thiserror::Error;

use crate::scene::SpriteKey;

/// Startup asset failures. All of them are fatal.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sprite {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite atlas {width}x{height} exceeds the {max}px texture limit")]
    AtlasTooLarge { width: u32, height: u32, max: u32 },
}

/// The decoded fighter sprites, indexed by [`SpriteKey::index`]
#[derive(Debug, Clone)]
pub struct AssetBundle {
    sprites: [RgbaImage; 4],
}

impl AssetBundle {
    /// Load all four sprites from `dir`
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut sprites: [RgbaImage; 4] = Default::default();
        for key in SpriteKey::ALL {
            let path = dir.join(key.file_name());
            let img = image::open(&path)
                .map_err(|source| AssetError::Image {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            log::info!(
                "Loaded sprite {} ({}x{})",
                path.display(),
                img.width(),
                img.height()
            );
            sprites[key.index()] = img;
        }
        Ok(Self::from_images(sprites))
    }

    pub fn from_images(sprites: [RgbaImage; 4]) -> Self {
        Self { sprites }
    }

    pub fn sprite(&self, key: SpriteKey) -> &RgbaImage {
        &self.sprites[key.index()]
    }
}

/// Rectangle inside the atlas, in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasRegion {
    pub origin: UVec2,
    pub size: UVec2,
}

/// Region lookup for a packed atlas, without the pixel data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasLayout {
    pub size: UVec2,
    pub sprites: [AtlasRegion; 4],
    /// A single opaque white texel
    pub white: AtlasRegion,
}

impl AtlasLayout {
    pub fn region(&self, key: SpriteKey) -> AtlasRegion {
        self.sprites[key.index()]
    }

    /// Normalized texture coordinates `(min, max)` of a region
    pub fn uv(&self, region: AtlasRegion) -> ([f32; 2], [f32; 2]) {
        let size = self.size.as_vec2();
        let min = region.origin.as_vec2() / size;
        let max = (region.origin + region.size).as_vec2() / size;
        (min.to_array(), max.to_array())
    }

    /// UV at the center of the white texel
    pub fn white_uv(&self) -> [f32; 2] {
        let center = self.white.origin.as_vec2() + glam::Vec2::splat(0.5);
        (center / self.size.as_vec2()).to_array()
    }
}

/// Sprites packed left to right in one texture
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    pub layout: AtlasLayout,
    /// Tightly packed RGBA8 rows
    pub pixels: RgbaImage,
}

impl SpriteAtlas {
    /// Pack the bundle. `max_dimension` is the device's 2D texture limit.
    pub fn pack(bundle: &AssetBundle, max_dimension: u32) -> Result<Self, AssetError> {
        let width: u32 = bundle.sprites.iter().map(|s| s.width()).sum::<u32>() + 1;
        let height: u32 = bundle
            .sprites
            .iter()
            .map(|s| s.height())
            .max()
            .unwrap_or(0)
            .max(1);
        if width > max_dimension || height > max_dimension {
            return Err(AssetError::AtlasTooLarge {
                width,
                height,
                max: max_dimension,
            });
        }

        let mut pixels = RgbaImage::new(width, height);
        let mut regions = [AtlasRegion {
            origin: UVec2::ZERO,
            size: UVec2::ZERO,
        }; 4];
        let mut x = 0;
        for (region, sprite) in regions.iter_mut().zip(&bundle.sprites) {
            image::imageops::replace(&mut pixels, sprite, x as i64, 0);
            *region = AtlasRegion {
                origin: UVec2::new(x, 0),
                size: UVec2::new(sprite.width(), sprite.height()),
            };
            x += sprite.width();
        }
        pixels.put_pixel(x, 0, image::Rgba([255, 255, 255, 255]));

        Ok(Self {
            layout: AtlasLayout {
                size: UVec2::new(width, height),
                sprites: regions,
                white: AtlasRegion {
                    origin: UVec2::new(x, 0),
                    size: UVec2::ONE,
                },
            },
            pixels,
        })
    }
}
