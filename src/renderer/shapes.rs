//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering `min..max`, with texture coordinates `uv_min..uv_max`
pub fn quad(
    min: Vec2,
    max: Vec2,
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
) -> [Vertex; 6] {
    let tl = Vertex::new(min.x, min.y, uv_min, color);
    let tr = Vertex::new(max.x, min.y, [uv_max[0], uv_min[1]], color);
    let bl = Vertex::new(min.x, max.y, [uv_min[0], uv_max[1]], color);
    let br = Vertex::new(max.x, max.y, uv_max, color);
    [tl, bl, tr, tr, bl, br]
}

/// Flat-colored quad sampling a single texel
pub fn solid_quad(min: Vec2, max: Vec2, uv: [f32; 2], color: [f32; 4]) -> [Vertex; 6] {
    quad(min, max, uv, uv, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_corners() {
        let v = quad(
            Vec2::new(10.0, 20.0),
            Vec2::new(60.0, 70.0),
            [0.0, 0.0],
            [0.5, 1.0],
            [1.0; 4],
        );
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [60.0, 70.0]);
        assert_eq!(v[5].uv, [0.5, 1.0]);
        // Top-right corner takes max u, min v
        assert_eq!(v[2].position, [60.0, 20.0]);
        assert_eq!(v[2].uv, [0.5, 0.0]);
    }

    #[test]
    fn test_solid_quad_uses_one_uv() {
        let v = solid_quad(Vec2::ZERO, Vec2::ONE, [0.25, 0.5], [0.0, 1.0, 0.0, 1.0]);
        assert!(v.iter().all(|vert| vert.uv == [0.25, 0.5]));
    }
}
