//! Stroke font: text drawn as line segments
//!
//! Glyphs are segment lists on a unit cell (x right, y down). The set is
//! closed; characters without an entry draw nothing.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// One stroke: `[x1, y1, x2, y2]` in unit-cell coordinates
pub type Stroke = [f32; 4];

const BOX: [Stroke; 4] = [
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.0],
];

const DIGIT_0: [Stroke; 5] = [BOX[0], BOX[1], BOX[2], BOX[3], [0.0, 1.0, 1.0, 0.0]];
const DIGIT_1: [Stroke; 2] = [[0.5, 0.0, 0.5, 1.0], [0.25, 0.2, 0.5, 0.0]];
const DIGIT_2: [Stroke; 5] = [
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
    [0.0, 0.5, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
];
const DIGIT_3: [Stroke; 4] = [
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 0.5, 1.0, 0.5],
];
const DIGIT_4: [Stroke; 3] = [
    [0.0, 0.0, 0.0, 0.5],
    [0.0, 0.5, 1.0, 0.5],
    [1.0, 0.0, 1.0, 1.0],
];
// Also used for 'S'
const DIGIT_5: [Stroke; 5] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.5],
    [0.0, 0.5, 1.0, 0.5],
    [1.0, 0.5, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];
const DIGIT_6: [Stroke; 5] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
];
const DIGIT_7: [Stroke; 2] = [[0.0, 0.0, 1.0, 0.0], [1.0, 0.0, 1.0, 1.0]];
const DIGIT_8: [Stroke; 5] = [BOX[0], BOX[1], BOX[2], BOX[3], [0.0, 0.5, 1.0, 0.5]];
const DIGIT_9: [Stroke; 5] = [
    [1.0, 0.5, 0.0, 0.5],
    [0.0, 0.5, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];

const COLON: [Stroke; 2] = [[0.5, 0.2, 0.5, 0.3], [0.5, 0.7, 0.5, 0.8]];

const LETTER_A: [Stroke; 3] = [
    [0.0, 1.0, 0.5, 0.0],
    [0.5, 0.0, 1.0, 1.0],
    [0.25, 0.5, 0.75, 0.5],
];
const LETTER_C: [Stroke; 3] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
];
const LETTER_E: [Stroke; 4] = [LETTER_C[0], LETTER_C[1], LETTER_C[2], [0.0, 0.5, 0.75, 0.5]];
const LETTER_F: [Stroke; 3] = [LETTER_C[0], LETTER_C[1], [0.0, 0.5, 0.75, 0.5]];
const LETTER_G: [Stroke; 5] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.5],
    [1.0, 0.5, 0.5, 0.5],
];
const LETTER_I: [Stroke; 3] = [
    [0.5, 0.0, 0.5, 1.0],
    [0.2, 0.0, 0.8, 0.0],
    [0.2, 1.0, 0.8, 1.0],
];
const LETTER_M: [Stroke; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.5],
    [0.5, 0.5, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
];
const LETTER_N: [Stroke; 3] = [
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
];
const LETTER_P: [Stroke; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
];
const LETTER_R: [Stroke; 5] = [
    LETTER_P[0],
    LETTER_P[1],
    LETTER_P[2],
    LETTER_P[3],
    [0.4, 0.5, 1.0, 1.0],
];
const LETTER_T: [Stroke; 2] = [[0.0, 0.0, 1.0, 0.0], [0.5, 0.0, 0.5, 1.0]];
const LETTER_V: [Stroke; 2] = [[0.0, 0.0, 0.5, 1.0], [0.5, 1.0, 1.0, 0.0]];

/// Strokes for a character; empty for space and for anything unsupported
pub fn glyph_segments(c: char) -> &'static [Stroke] {
    match c {
        '0' => &DIGIT_0,
        '1' => &DIGIT_1,
        '2' => &DIGIT_2,
        '3' => &DIGIT_3,
        '4' => &DIGIT_4,
        '5' | 'S' => &DIGIT_5,
        '6' => &DIGIT_6,
        '7' => &DIGIT_7,
        '8' => &DIGIT_8,
        '9' => &DIGIT_9,
        ':' => &COLON,
        'A' => &LETTER_A,
        'C' => &LETTER_C,
        'E' => &LETTER_E,
        'F' => &LETTER_F,
        'G' => &LETTER_G,
        'I' => &LETTER_I,
        'M' => &LETTER_M,
        'N' => &LETTER_N,
        'O' => &BOX,
        'P' => &LETTER_P,
        'R' => &LETTER_R,
        'T' => &LETTER_T,
        'V' => &LETTER_V,
        _ => &[],
    }
}

/// Horizontal extent of `text` at the fixed advance
pub fn text_width(text: &str) -> f32 {
    text.chars().count() as f32 * GLYPH_ADVANCE
}

/// Lay out `text` left-to-right from `origin` (top-left of the first cell)
pub fn layout_text(text: &str, origin: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let cell = origin + Vec2::X * (i as f32 * GLYPH_ADVANCE);
        for &[x1, y1, x2, y2] in glyph_segments(c) {
            vertices.push(Vertex::new(
                cell.x + x1 * GLYPH_WIDTH,
                cell.y + y1 * GLYPH_HEIGHT,
                color,
            ));
            vertices.push(Vertex::new(
                cell.x + x2 * GLYPH_WIDTH,
                cell.y + y2 * GLYPH_HEIGHT,
                color,
            ));
        }
    }

    vertices
}
