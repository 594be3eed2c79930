//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: a framed page area and a bottom status bar.
/// In presentation mode the page takes the whole terminal.
pub struct AppLayout {
    /// Outer frame (border + window title); equal to `page_area` when presenting.
    pub frame_area: Rect,
    /// Scrollable page viewport.
    pub page_area: Rect,
    /// Status bar; zero-height when presenting.
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, presentation: bool) -> Self {
        if presentation {
            return Self {
                frame_area: area,
                page_area: area,
                status_area: Rect::new(area.x, area.bottom(), area.width, 0),
            };
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // framed page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let frame_area = chunks[0];
        // One cell of border on every side.
        let page_area = Rect::new(
            frame_area.x.saturating_add(1),
            frame_area.y.saturating_add(1),
            frame_area.width.saturating_sub(2),
            frame_area.height.saturating_sub(2),
        );

        Self {
            frame_area,
            page_area,
            status_area: chunks[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_layout_reserves_border_and_status() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.frame_area, Rect::new(0, 0, 80, 23));
        assert_eq!(layout.page_area, Rect::new(1, 1, 78, 21));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn presentation_uses_whole_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::from_area(area, true);
        assert_eq!(layout.page_area, area);
        assert_eq!(layout.status_area.height, 0);
    }
}
