//! Scrollable viewport over content that may be taller than the screen.
//!
//! The extent is recomputed on every layout pass, so a resize or a change
//! in content height simply re-clamps the offset.

use ratatui::{buffer::Buffer, layout::Position, layout::Rect};

use super::theme::Theme;

/// Direction of one mouse-wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    Up,
    Down,
}

/// Vertical scroll position of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollView {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollView {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Largest valid offset for the current extent.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record new content/viewport heights and clamp the offset into range.
    pub fn set_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = target as u16;
    }

    /// One wheel notch moves `step` rows.
    pub fn wheel(&mut self, direction: Wheel, step: u16) {
        match direction {
            Wheel::Up => self.scroll_by(-(step as i32)),
            Wheel::Down => self.scroll_by(step as i32),
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_step() as i32));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step() as i32);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn page_step(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

/// Draw a vertical scrollbar in the rightmost column of `area`.
/// Nothing is drawn when the content fits.
pub fn render_scrollbar(area: Rect, view: &ScrollView, buf: &mut Buffer) {
    let total = view.content_height() as f64;
    let visible = view.viewport_height() as f64;
    if total <= visible || area.height < 2 || area.width == 0 {
        return;
    }
    let x = area.x + area.width.saturating_sub(1);
    let h = area.height as f64;
    let thumb_sz = ((visible / total) * h).ceil().max(1.0) as u16;
    let max_off = view.max_offset() as f64;
    let thumb_pos = if max_off > 0.0 {
        ((view.offset() as f64 / max_off) * (h - thumb_sz as f64)).round() as u16
    } else {
        0
    };

    for row in 0..area.height {
        let is_thumb = row >= thumb_pos && row < thumb_pos + thumb_sz;
        let (ch, fg) = if is_thumb {
            ('█', Theme::scrollbar_thumb())
        } else {
            ('│', Theme::scrollbar_track())
        };
        if let Some(cell) = buf.cell_mut(Position::new(x, area.y + row)) {
            cell.set_char(ch).set_fg(fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(content: u16, viewport: u16) -> ScrollView {
        let mut v = ScrollView::default();
        v.set_extent(content, viewport);
        v
    }

    #[test]
    fn wheel_moves_by_step_and_clamps() {
        let mut v = view(100, 20);
        v.wheel(Wheel::Down, 3);
        assert_eq!(v.offset(), 3);
        v.wheel(Wheel::Up, 3);
        v.wheel(Wheel::Up, 3);
        assert_eq!(v.offset(), 0);

        for _ in 0..100 {
            v.wheel(Wheel::Down, 3);
        }
        assert_eq!(v.offset(), 80);
    }

    #[test]
    fn shrinking_content_reclamps_offset() {
        let mut v = view(100, 20);
        v.to_bottom();
        assert_eq!(v.offset(), 80);

        // Terminal grew taller.
        v.set_extent(100, 60);
        assert_eq!(v.offset(), 40);

        // Everything fits now.
        v.set_extent(30, 60);
        assert_eq!(v.offset(), 0);
        v.wheel(Wheel::Down, 3);
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn paging_keeps_one_row_of_context() {
        let mut v = view(100, 20);
        v.page_down();
        assert_eq!(v.offset(), 19);
        v.page_up();
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn scrollbar_only_when_overflowing() {
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &view(5, 10), &mut buf);
        assert_eq!(buf[(9, 0)].symbol(), " ");

        render_scrollbar(area, &view(40, 10), &mut buf);
        assert_eq!(buf[(9, 0)].symbol(), "█");
        assert_eq!(buf[(9, 9)].symbol(), "│");
    }
}
