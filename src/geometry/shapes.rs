//! Line-segment generation for 2D primitives
//!
//! Every function returns vertices grouped in pairs (line-list order).

use glam::Vec2;

use super::vertex::Vertex;

/// Rotate a local-space point by `angle` and translate it to `origin`
#[inline]
pub fn to_world(local: Vec2, origin: Vec2, angle: f32) -> Vec2 {
    origin + Vec2::from_angle(angle).rotate(local)
}

/// A single segment
pub fn segment(a: Vec2, b: Vec2, color: [f32; 4]) -> [Vertex; 2] {
    [Vertex::at(a, color), Vertex::at(b, color)]
}

/// Closed polygon through `points`, last point joined back to the first
pub fn closed_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.extend(segment(p, next, color));
    }
    vertices
}

/// Local-space outline rotated, scaled and translated into a closed polygon
pub fn outline(
    local: &[Vec2],
    origin: Vec2,
    angle: f32,
    scale: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let world: Vec<Vec2> = local
        .iter()
        .map(|&p| to_world(p * scale, origin, angle))
        .collect();
    closed_polygon(&world, color)
}

/// Small plus-shaped marker: one horizontal and one vertical segment
pub fn crosshair(center: Vec2, half: f32, color: [f32; 4]) -> [Vertex; 4] {
    let [a, b] = segment(center - Vec2::X * half, center + Vec2::X * half, color);
    let [c, d] = segment(center - Vec2::Y * half, center + Vec2::Y * half, color);
    [a, b, c, d]
}

/// Short horizontal tick starting at `pos`
pub fn tick_mark(pos: Vec2, length: f32, color: [f32; 4]) -> [Vertex; 2] {
    segment(pos, pos + Vec2::X * length, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_to_world_rotates_then_translates() {
        let p = to_world(Vec2::new(10.0, 0.0), Vec2::new(100.0, 50.0), FRAC_PI_2);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_closed_polygon_joins_last_to_first() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let v = closed_polygon(&square, WHITE);
        assert_eq!(v.len(), 8);
        assert_eq!(v[6].position, [0.0, 1.0]);
        assert_eq!(v[7].position, [0.0, 0.0]);
    }

    #[test]
    fn test_closed_polygon_degenerate_is_empty() {
        assert!(closed_polygon(&[Vec2::ONE], WHITE).is_empty());
    }

    #[test]
    fn test_outline_scales_local_points() {
        let v = outline(
            &[Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
            Vec2::new(50.0, 50.0),
            0.0,
            10.0,
            WHITE,
        );
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [60.0, 50.0]);
        assert_eq!(v[1].position, [50.0, 60.0]);
    }

    #[test]
    fn test_crosshair_is_two_segments_centered() {
        let v = crosshair(Vec2::new(5.0, 5.0), 2.0, WHITE);
        assert_eq!(v[0].position, [3.0, 5.0]);
        assert_eq!(v[1].position, [7.0, 5.0]);
        assert_eq!(v[2].position, [5.0, 3.0]);
        assert_eq!(v[3].position, [5.0, 7.0]);
    }
}
