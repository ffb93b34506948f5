//! Block font for the hero wordmark.
//!
//! Glyphs are 5 cells wide and 7 cells tall; a cell is one seventh of the cap
//! height. Each lit run of cells in a row becomes one extruded box.

use glam::Vec3;

use crate::config::TextConfig;

const ROWS: usize = 7;
const COLS: usize = 5;
/// Gap between glyphs as a fraction of the cap height.
const LETTER_GAP: f32 = 0.05 / 0.7;
/// Width of a space as a fraction of the cap height.
const SPACE_ADVANCE: f32 = 0.28 / 0.7;

type Glyph = [&'static str; ROWS];

fn glyph(c: char) -> Option<Glyph> {
    let g = match c.to_ascii_uppercase() {
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        _ => return None,
    };
    Some(g)
}

/// An axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub min: Vec3,
    pub max: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub blocks: Vec<Block>,
    pub width: f32,
}

/// Lays out `cfg.content` with its bottom on y=0, back face on z=0, and the
/// left edge shifted right by `right_offset` of the text width.
pub fn layout(cfg: &TextConfig) -> TextLayout {
    let cell = cfg.size / ROWS as f32;
    let glyph_width = cell * COLS as f32;
    let gap = cfg.size * LETTER_GAP;

    let mut blocks = Vec::new();
    let mut pen = 0.0f32;
    let mut width = 0.0f32;
    for c in cfg.content.chars() {
        let Some(rows) = glyph(c) else {
            if c != ' ' {
                log::warn!("no glyph for {c:?}, leaving a space");
            }
            pen += cfg.size * SPACE_ADVANCE;
            continue;
        };
        for (row, line) in rows.iter().enumerate() {
            // row 0 is the top of the glyph
            let y0 = (ROWS - 1 - row) as f32 * cell;
            let mut run_start: Option<usize> = None;
            for (col, lit) in line.chars().map(|ch| ch == '#').chain([false]).enumerate() {
                match (lit, run_start) {
                    (true, None) => run_start = Some(col),
                    (false, Some(start)) => {
                        blocks.push(Block {
                            min: Vec3::new(pen + start as f32 * cell, y0, 0.0),
                            max: Vec3::new(pen + col as f32 * cell, y0 + cell, cfg.depth),
                        });
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }
        width = pen + glyph_width;
        pen += glyph_width + gap;
    }

    let shift = width * cfg.right_offset;
    for b in &mut blocks {
        b.min.x += shift;
        b.max.x += shift;
    }
    TextLayout { blocks, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(content: &str) -> TextConfig {
        TextConfig {
            content: content.to_string(),
            ..TextConfig::default()
        }
    }

    #[test]
    fn glyph_rows_are_well_formed() {
        for c in "ROWX024".chars() {
            let g = glyph(c).unwrap();
            assert!(g.iter().all(|row| row.len() == COLS), "{c}");
        }
    }

    #[test]
    fn text_sits_on_the_ground() {
        let layout = layout(&TextConfig::default());
        let min_y = layout.blocks.iter().map(|b| b.min.y).fold(f32::MAX, f32::min);
        let max_y = layout.blocks.iter().map(|b| b.max.y).fold(f32::MIN, f32::max);
        assert!(min_y.abs() < 1e-6);
        assert!((max_y - 0.7).abs() < 1e-5);
        assert!(layout.blocks.iter().all(|b| b.min.z == 0.0 && b.max.z == 0.15));
    }

    #[test]
    fn text_is_shifted_right_by_a_fifth() {
        let layout = layout(&cfg("X"));
        let min_x = layout.blocks.iter().map(|b| b.min.x).fold(f32::MAX, f32::min);
        assert!((layout.width - 0.5).abs() < 1e-6);
        assert!((min_x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn spaces_advance_without_blocks() {
        let tight = layout(&cfg("XX"));
        let spaced = layout(&cfg("X X"));
        assert_eq!(tight.blocks.len(), spaced.blocks.len());
        assert!((spaced.width - tight.width - 0.28).abs() < 1e-5);
    }

    #[test]
    fn full_rows_merge_into_one_block() {
        // bottom row of '2' is fully lit
        let layout = layout(&TextConfig {
            right_offset: 0.0,
            ..cfg("2")
        });
        let bottom: Vec<_> = layout.blocks.iter().filter(|b| b.min.y == 0.0).collect();
        assert_eq!(bottom.len(), 1);
        assert!((bottom[0].max.x - bottom[0].min.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn unknown_characters_become_spaces() {
        assert_eq!(layout(&cfg("?")).blocks.len(), 0);
    }
}
