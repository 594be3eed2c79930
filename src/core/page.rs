//! Page model: what a single full-screen panel is made of.
//!
//! A page is an ordered list of [`Section`]s laid out top to bottom.  The
//! model carries no geometry; the UI layer decides how tall each section is
//! for the current terminal width.

use super::assets::Visual;

/// Identifies one of the five panels of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Welcome,
    Menu,
    UserEngagement,
    PromptSimilarity,
    StyleEngagement,
}

impl PageId {
    /// Every page, in deck order.
    pub const ALL: [PageId; 5] = [
        PageId::Welcome,
        PageId::Menu,
        PageId::UserEngagement,
        PageId::PromptSimilarity,
        PageId::StyleEngagement,
    ];

    /// Position of this page inside [`PageId::ALL`].
    pub fn index(self) -> usize {
        match self {
            PageId::Welcome => 0,
            PageId::Menu => 1,
            PageId::UserEngagement => 2,
            PageId::PromptSimilarity => 3,
            PageId::StyleEngagement => 4,
        }
    }

    /// Short name shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            PageId::Welcome => "Welcome",
            PageId::Menu => "Menu",
            PageId::UserEngagement => "User Engagement",
            PageId::PromptSimilarity => "Prompt Similarity",
            PageId::StyleEngagement => "Style & Engagement",
        }
    }

    /// Where the "back" action leads from this page.
    pub fn back(self) -> PageId {
        match self {
            PageId::Welcome | PageId::Menu => PageId::Welcome,
            PageId::UserEngagement | PageId::PromptSimilarity | PageId::StyleEngagement => {
                PageId::Menu
            }
        }
    }
}

/// Background tint of a page, named after the Ghibli palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    LightCream,
    SoftYellow,
    NatureGreen,
    PastelPink,
    DustyLavender,
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Forward navigation (menu choices, "Uncover ...").
    Primary,
    /// "Back to Selection" / "Return Home".
    Home,
}

/// A clickable navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Label; may contain `\n` for multi-line buttons.
    pub label: &'static str,
    pub target: PageId,
    pub kind: ButtonKind,
}

impl Button {
    pub fn primary(label: &'static str, target: PageId) -> Self {
        Self { label, target, kind: ButtonKind::Primary }
    }

    pub fn home(label: &'static str, target: PageId) -> Self {
        Self { label, target, kind: ButtonKind::Home }
    }
}

/// Typographic treatment of a text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Body,
    Italic,
}

/// One vertical slice of a page.
#[derive(Debug)]
pub enum Section {
    /// Large bold heading.
    Title(&'static str),
    /// Centred, word-wrapped paragraph no wider than `max_width` columns.
    Text {
        body: &'static str,
        tone: TextTone,
        max_width: u16,
    },
    /// An image (still or animated) stretched to `nominal` pixels.
    Picture { visual: Visual, nominal: (u32, u32) },
    /// Left-aligned caption inside a bordered white box.
    Caption(&'static str),
    /// A row of buttons.
    Buttons(Vec<Button>),
    /// Horizontal rule.
    Separator,
    /// Small dimmed instruction line.
    Hint(String),
    /// Side-by-side groups of sections sharing the available width.
    Columns(Vec<Vec<Section>>),
    /// Blank rows.
    Spacer(u16),
}

/// A fully constructed panel.
#[derive(Debug)]
pub struct Page {
    pub id: PageId,
    pub tint: Tint,
    pub sections: Vec<Section>,
}

impl Page {
    /// Buttons in render order (top to bottom, columns left to right).
    pub fn buttons(&self) -> Vec<&Button> {
        let mut out = Vec::new();
        collect_buttons(&self.sections, &mut out);
        out
    }

    /// All visuals on the page, in render order.
    pub fn visuals(&self) -> Vec<&Visual> {
        let mut out = Vec::new();
        collect_visuals(&self.sections, &mut out);
        out
    }

    /// Inline error messages for images that failed to load.
    pub fn load_errors(&self) -> Vec<&str> {
        self.visuals()
            .into_iter()
            .filter_map(Visual::error_message)
            .collect()
    }

    /// Advance every animated visual by one frame.
    pub fn advance_animations(&mut self) {
        advance_in(&mut self.sections);
    }
}

fn collect_buttons<'a>(sections: &'a [Section], out: &mut Vec<&'a Button>) {
    for section in sections {
        match section {
            Section::Buttons(row) => out.extend(row.iter()),
            Section::Columns(cols) => {
                for col in cols {
                    collect_buttons(col, out);
                }
            }
            _ => {}
        }
    }
}

fn collect_visuals<'a>(sections: &'a [Section], out: &mut Vec<&'a Visual>) {
    for section in sections {
        match section {
            Section::Picture { visual, .. } => out.push(visual),
            Section::Columns(cols) => {
                for col in cols {
                    collect_visuals(col, out);
                }
            }
            _ => {}
        }
    }
}

fn advance_in(sections: &mut [Section]) {
    for section in sections {
        match section {
            Section::Picture { visual: Visual::Animated(cycle), .. } => cycle.advance(),
            Section::Columns(cols) => {
                for col in cols {
                    advance_in(col);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_leads_to_menu_then_welcome() {
        assert_eq!(PageId::StyleEngagement.back(), PageId::Menu);
        assert_eq!(PageId::UserEngagement.back(), PageId::Menu);
        assert_eq!(PageId::Menu.back(), PageId::Welcome);
        assert_eq!(PageId::Welcome.back(), PageId::Welcome);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in PageId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn buttons_are_collected_through_columns() {
        let page = Page {
            id: PageId::Menu,
            tint: Tint::SoftYellow,
            sections: vec![
                Section::Title("t"),
                Section::Columns(vec![
                    vec![Section::Buttons(vec![Button::primary("a", PageId::UserEngagement)])],
                    vec![Section::Buttons(vec![Button::primary("b", PageId::StyleEngagement)])],
                ]),
                Section::Buttons(vec![Button::home("c", PageId::Welcome)]),
            ],
        };
        let labels: Vec<_> = page.buttons().iter().map(|b| b.label).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }
}
