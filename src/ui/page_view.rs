//! Page widget: lays out a [`Page`] at the current width, renders it into an
//! off-screen buffer and copies the scrolled window onto the screen.
//!
//! Layout is recomputed on every draw; section heights depend only on the
//! content width, so the scroll extent follows terminal resizes for free.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Style,
    symbols,
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

use super::image_view::{cell_size, render_halfblocks};
use super::scroll_view::{render_scrollbar, ScrollView};
use super::theme::Theme;
use crate::core::assets::Visual;
use crate::core::page::{Button, Page, PageId, Section, TextTone};

/// Gap between side-by-side buttons and columns.
const GAP: u16 = 2;
/// Widest the caption box grows (including borders).
const CAPTION_MAX_WIDTH: u16 = 102;
/// Widest an inline image error message grows.
const ERROR_MAX_WIDTH: u16 = 80;
/// Columns narrower than this are stacked instead.
const MIN_COLUMN_WIDTH: u16 = 30;

/// A clickable button as placed on screen by the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitZone {
    pub rect: Rect,
    pub target: PageId,
    /// Position of the button in [`Page::buttons`] order.
    pub index: usize,
}

/// The page widget.
pub struct PageView<'a> {
    pub page: &'a Page,
    /// Index (in [`Page::buttons`] order) of the keyboard-focused button.
    pub focused: Option<usize>,
}

impl<'a> PageView<'a> {
    /// Render and return hit zones for the buttons that ended up visible.
    ///
    /// `scroll` gets the new extent before the window is copied, so its offset
    /// is always valid for what was drawn.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollView) -> Vec<HitZone> {
        let page_style = Theme::page_style(self.page.tint);
        buf.set_style(area, page_style);
        if area.width < 2 || area.height == 0 {
            return Vec::new();
        }

        // The rightmost column belongs to the scrollbar.
        let content_width = area.width - 1;
        let content_height = sections_height(&self.page.sections, content_width);
        scroll.set_extent(content_height, area.height);

        let canvas_area = Rect::new(0, 0, content_width, content_height.max(1));
        let mut canvas = Buffer::empty(canvas_area);
        canvas.set_style(canvas_area, page_style);

        let mut painter = Painter {
            buf: &mut canvas,
            focused: self.focused,
            next_button: 0,
            zones: Vec::new(),
        };
        painter.sections(&self.page.sections, canvas_area);
        let zones = painter.zones;

        blit(&canvas, scroll.offset(), area, buf);
        render_scrollbar(area, scroll, buf);

        zones
            .into_iter()
            .filter_map(|zone| to_screen(zone, scroll, area))
            .collect()
    }
}

/// Copy rows `offset..offset + area.height` of `canvas` into `area`.
fn blit(canvas: &Buffer, offset: u16, area: Rect, buf: &mut Buffer) {
    let width = canvas.area.width.min(area.width);
    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= canvas.area.height {
            break;
        }
        for col in 0..width {
            if let (Some(src), Some(dst)) = (
                canvas.cell(Position::new(col, src_y)),
                buf.cell_mut(Position::new(area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Translate a zone from canvas coordinates to screen coordinates, clipped to
/// the visible window.  Fully hidden zones are dropped.
fn to_screen(zone: HitZone, scroll: &ScrollView, area: Rect) -> Option<HitZone> {
    let window = Rect::new(0, scroll.offset(), area.width, scroll.viewport_height());
    let visible = zone.rect.intersection(window);
    if visible.is_empty() {
        return None;
    }
    Some(HitZone {
        rect: Rect::new(
            area.x + visible.x,
            area.y + (visible.y - scroll.offset()),
            visible.width,
            visible.height,
        ),
        ..zone
    })
}

// ───────────────────────────────────────── measuring ─────────

fn sections_height(sections: &[Section], width: u16) -> u16 {
    sections
        .iter()
        .fold(0u16, |acc, s| acc.saturating_add(section_height(s, width)))
}

fn section_height(section: &Section, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    match section {
        Section::Title(text) => wrapped_lines(text, width) + 2,
        Section::Text { body, max_width, .. } => wrapped_lines(body, width.min(*max_width)) + 1,
        Section::Picture { visual, nominal } => match visual.frame() {
            Some(_) => {
                let (_, rows) = cell_size(*nominal, width.saturating_sub(2));
                rows + 3
            }
            None => error_lines(visual, width) + 1,
        },
        Section::Caption(text) => {
            let inner = caption_width(width).saturating_sub(4);
            wrapped_lines_left(text, inner) + 2
        }
        Section::Buttons(buttons) => button_row_height(buttons, width) + 1,
        Section::Separator => 3,
        Section::Hint(text) => wrapped_lines(text, width) + 1,
        Section::Columns(columns) => match column_width(columns.len(), width) {
            Some(col_w) => columns
                .iter()
                .map(|c| sections_height(c, col_w))
                .max()
                .unwrap_or(0),
            None => columns
                .iter()
                .fold(0u16, |acc, c| acc.saturating_add(sections_height(c, width))),
        },
        Section::Spacer(rows) => *rows,
    }
}

fn centered_paragraph(text: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn wrapped_lines(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let lines = centered_paragraph(text, Style::default()).line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn wrapped_lines_left(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let lines = Paragraph::new(text).wrap(Wrap { trim: false }).line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn error_lines(visual: &Visual, width: u16) -> u16 {
    wrapped_lines(visual.error_message().unwrap_or_default(), width.min(ERROR_MAX_WIDTH))
}

fn caption_width(width: u16) -> u16 {
    width.min(CAPTION_MAX_WIDTH)
}

/// Width of each column, or `None` when they should stack vertically.
fn column_width(count: usize, width: u16) -> Option<u16> {
    let count = u16::try_from(count).ok().filter(|&c| c > 0)?;
    let gaps = GAP * (count - 1);
    let col_w = width.saturating_sub(gaps) / count;
    (col_w >= MIN_COLUMN_WIDTH).then_some(col_w)
}

/// Outer size of a bordered button.
fn button_size(button: &Button) -> (u16, u16) {
    let text_w = button
        .label
        .lines()
        .map(|l| Line::from(l).width())
        .max()
        .unwrap_or(0);
    let lines = button.label.lines().count().max(1);
    (
        u16::try_from(text_w + 4).unwrap_or(u16::MAX),
        u16::try_from(lines + 2).unwrap_or(u16::MAX),
    )
}

/// Whether a row of buttons fits side by side in `width`.
fn buttons_fit(buttons: &[Button], width: u16) -> bool {
    let total: u32 = buttons.iter().map(|b| button_size(b).0 as u32).sum::<u32>()
        + GAP as u32 * buttons.len().saturating_sub(1) as u32;
    total <= width as u32
}

fn button_row_height(buttons: &[Button], width: u16) -> u16 {
    if buttons_fit(buttons, width) {
        buttons.iter().map(|b| button_size(b).1).max().unwrap_or(0)
    } else {
        buttons
            .iter()
            .fold(0u16, |acc, b| acc.saturating_add(button_size(b).1))
    }
}

/// A `width`-wide rect centred horizontally inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, height)
}

// ───────────────────────────────────────── painting ──────────

/// Renders sections top to bottom into the off-screen canvas, collecting
/// button zones in canvas coordinates.
struct Painter<'b> {
    buf: &'b mut Buffer,
    focused: Option<usize>,
    next_button: usize,
    zones: Vec<HitZone>,
}

impl Painter<'_> {
    fn sections(&mut self, sections: &[Section], area: Rect) {
        let mut y = area.y;
        for section in sections {
            let h = section_height(section, area.width);
            let slot = Rect::new(area.x, y, area.width, h);
            self.section(section, slot);
            y = y.saturating_add(h);
        }
    }

    fn section(&mut self, section: &Section, area: Rect) {
        match section {
            Section::Title(text) => {
                let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(2));
                centered_paragraph(text, Theme::title_style()).render(body, self.buf);
            }
            Section::Text { body, tone, max_width } => {
                let style = match tone {
                    TextTone::Body => Theme::body_style(),
                    TextTone::Italic => Theme::italic_style(),
                };
                let rect = centered(area, *max_width, area.height.saturating_sub(1));
                centered_paragraph(body, style).render(rect, self.buf);
            }
            Section::Picture { visual, nominal } => self.picture(visual, *nominal, area),
            Section::Caption(text) => {
                let rect = centered(area, caption_width(area.width), area.height);
                Paragraph::new(*text)
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::bordered()
                            .border_style(Theme::frame_border_style())
                            .padding(Padding::horizontal(1)),
                    )
                    .style(Theme::caption_style())
                    .render(rect, self.buf);
            }
            Section::Buttons(buttons) => self.buttons(buttons, area),
            Section::Separator => {
                let rule_w = area.width.saturating_mul(4) / 5;
                let rect = centered(Rect { y: area.y + 1, ..area }, rule_w, 1);
                let rule = symbols::line::HORIZONTAL.repeat(rect.width as usize);
                Paragraph::new(rule)
                    .style(Theme::frame_border_style())
                    .render(rect, self.buf);
            }
            Section::Hint(text) => {
                let rect = Rect { height: area.height.saturating_sub(1), ..area };
                centered_paragraph(text, Theme::hint_style()).render(rect, self.buf);
            }
            Section::Columns(columns) => match column_width(columns.len(), area.width) {
                Some(col_w) => {
                    let mut x = area.x;
                    for column in columns {
                        self.sections(column, Rect::new(x, area.y, col_w, area.height));
                        x = x.saturating_add(col_w + GAP);
                    }
                }
                None => {
                    let mut y = area.y;
                    for column in columns {
                        let h = sections_height(column, area.width);
                        self.sections(column, Rect::new(area.x, y, area.width, h));
                        y = y.saturating_add(h);
                    }
                }
            },
            Section::Spacer(_) => {}
        }
    }

    fn picture(&mut self, visual: &Visual, nominal: (u32, u32), area: Rect) {
        let Some(frame) = visual.frame() else {
            let rect = centered(area, ERROR_MAX_WIDTH, area.height.saturating_sub(1));
            centered_paragraph(visual.error_message().unwrap_or_default(), Theme::error_style())
                .render(rect, self.buf);
            return;
        };

        let (cols, rows) = cell_size(nominal, area.width.saturating_sub(2));
        let outer = centered(area, cols + 2, rows + 2);
        let block = Block::bordered()
            .border_style(Theme::frame_border_style())
            .style(Theme::caption_style());
        let inner = block.inner(outer);
        block.render(outer, self.buf);
        render_halfblocks(frame, inner, self.buf);
    }

    fn buttons(&mut self, buttons: &[Button], area: Rect) {
        let sizes: Vec<(u16, u16)> = buttons.iter().map(button_size).collect();
        let horizontal = buttons_fit(buttons, area.width);

        let rects: Vec<Rect> = if horizontal {
            let total: u16 = sizes.iter().map(|s| s.0).sum::<u16>()
                + GAP * (buttons.len().saturating_sub(1) as u16);
            let mut x = area.x + (area.width - total) / 2;
            sizes
                .iter()
                .map(|&(w, h)| {
                    let r = Rect::new(x, area.y, w, h);
                    x += w + GAP;
                    r
                })
                .collect()
        } else {
            let mut y = area.y;
            sizes
                .iter()
                .map(|&(w, h)| {
                    let r = centered(Rect { y, ..area }, w, h);
                    y += h;
                    r
                })
                .collect()
        };

        for (button, rect) in buttons.iter().zip(rects) {
            let index = self.next_button;
            self.next_button += 1;
            let style = Theme::button_style(button.kind, self.focused == Some(index));

            Paragraph::new(Text::from(button.label))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(style),
                )
                .render(rect, self.buf);

            self.zones.push(HitZone {
                rect,
                target: button.target,
                index,
            });
        }
    }
}
