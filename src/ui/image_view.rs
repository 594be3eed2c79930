//! Image rendering with Unicode `▀` half-blocks (2 pixels per cell).

use image::imageops::FilterType;
use image::RgbaImage;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

/// Cells needed to show an image of `nominal` pixels in `max_cols` columns.
///
/// Roughly ten pixels per column, never wider than `max_cols`.  Each cell is
/// one pixel wide and two pixels tall, so the row count halves the scaled
/// height.
pub fn cell_size(nominal: (u32, u32), max_cols: u16) -> (u16, u16) {
    let (w, h) = nominal;
    if w == 0 || h == 0 || max_cols == 0 {
        return (0, 0);
    }
    let cols = ((w / 10) as u16).clamp(1, max_cols);
    let rows = ((cols as u32 * h) as f64 / w as f64 / 2.0).ceil().max(1.0) as u16;
    (cols, rows)
}

/// Render `img` into `area`, fitted with its aspect ratio preserved and
/// centred horizontally.  Images are never upscaled.
pub fn render_halfblocks(img: &RgbaImage, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 || img.width() == 0 || img.height() == 0 {
        return;
    }

    // Available pixel budget: each column = 1 px wide, each row = 2 px tall.
    let max_px_w = area.width as f64;
    let max_px_h = (area.height as f64) * 2.0;

    let src_w = img.width() as f64;
    let src_h = img.height() as f64;

    let scale = (max_px_w / src_w).min(max_px_h / src_h).min(1.0);
    let fit_w = (src_w * scale).round().max(1.0) as u32;
    let fit_h = (src_h * scale).round().max(1.0) as u32;

    let rgba = image::imageops::resize(img, fit_w, fit_h, FilterType::Triangle);
    let (iw, ih) = (rgba.width(), rgba.height());

    let col_offset = (area.width.saturating_sub(iw as u16)) / 2;

    for row in 0..area.height {
        let yt = (row as u32) * 2;
        let yb = yt + 1;
        if yt >= ih {
            break;
        }
        for col in 0..iw.min(area.width as u32) {
            let t = rgba.get_pixel(col, yt);
            let fg = Color::Rgb(t[0], t[1], t[2]);
            let bg = if yb < ih {
                let b = rgba.get_pixel(col, yb);
                Color::Rgb(b[0], b[1], b[2])
            } else {
                Color::Reset
            };
            if let Some(cell) =
                buf.cell_mut(Position::new(area.x + col_offset + col as u16, area.y + row))
            {
                cell.set_char('▀').set_fg(fg).set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_still_maps_to_seventy_columns() {
        assert_eq!(cell_size((700, 500), 200), (70, 25));
        assert_eq!(cell_size((800, 400), 200), (80, 20));
    }

    #[test]
    fn narrow_terminal_shrinks_columns() {
        let (cols, rows) = cell_size((700, 500), 35);
        assert_eq!(cols, 35);
        assert_eq!(rows, 13);
    }

    #[test]
    fn halfblocks_carry_top_and_bottom_pixels() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        for x in 0..4 {
            img.put_pixel(x, 1, Rgba([0, 0, 255, 255]));
        }
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        render_halfblocks(&img, area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
