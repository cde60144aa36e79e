use colored::Colorize as _;
use mazepath_core::{Grid, Path, Tile};

use crate::settings::Charset;

/// Renders the grid one glyph per cell, each followed by a space, one line per row.
///
/// Passages on `path` get the path glyph. Walls keep the wall glyph even when the path
/// crosses them.
pub fn render(grid: &Grid, path: &Path, charset: &Charset, color: bool) -> String {
    let on_path = path.to_mask(grid.size());
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));

    for pos in grid.tiles().iter_pos() {
        let tile = grid.tiles()[pos];
        match tile {
            Tile::Wall => out.push(charset.wall),
            Tile::Passage if on_path[pos] => {
                let glyph = charset.path.to_string();
                if color {
                    out.push_str(&glyph.green().bold().to_string());
                } else {
                    out.push_str(&glyph);
                }
            }
            Tile::Passage => out.push(charset.passage),
        }
        out.push(' ');

        if pos.col() as usize == grid.cols() - 1 {
            out.push('\n');
        }
    }

    out
}
