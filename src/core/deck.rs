//! The page stack: every page built up front, one raised at a time.

use super::assets::AssetPaths;
use super::content;
use super::page::{Page, PageId};

/// All five pages plus the id of the one currently shown.
pub struct Deck {
    pages: [Page; 5],
    active: PageId,
}

impl Deck {
    /// Build every page eagerly, loading each asset once.
    ///
    /// Never fails: an unreadable image turns into an inline message on its
    /// page.  The welcome page starts active.
    pub fn build(assets: &AssetPaths, presentation_hint: String) -> Self {
        let pages = [
            content::welcome(presentation_hint),
            content::menu(assets),
            content::user_engagement(assets),
            content::prompt_similarity(assets),
            content::style_engagement(assets),
        ];
        debug_assert!(pages.iter().zip(PageId::ALL).all(|(p, id)| p.id == id));

        let failed: usize = pages.iter().map(|p| p.load_errors().len()).sum();
        tracing::info!(failed, "slideshow pages built");

        Self {
            pages,
            active: PageId::Welcome,
        }
    }

    /// Raise `id` above its siblings.
    pub fn show(&mut self, id: PageId) {
        if self.active != id {
            tracing::debug!(from = ?self.active, to = ?id, "switching page");
        }
        self.active = id;
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn is_visible(&self, id: PageId) -> bool {
        self.active == id
    }

    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.index()]
    }

    pub fn active_page(&self) -> &Page {
        self.page(self.active)
    }

    /// One animation tick for every page, shown or not.
    pub fn advance_animations(&mut self) {
        for page in &mut self.pages {
            page.advance_animations();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{fixtures, Visual};

    fn hint() -> String {
        content::presentation_hint("F11", "Esc")
    }

    #[test]
    fn every_page_builds_with_valid_assets() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Deck::build(&fixtures::populate(dir.path()), hint());

        for id in PageId::ALL {
            let page = deck.page(id);
            assert_eq!(page.id, id);
            assert!(page.load_errors().is_empty(), "{id:?}: {:?}", page.load_errors());
        }
        assert!(deck
            .page(PageId::Menu)
            .visuals()
            .iter()
            .any(|v| matches!(v, Visual::Animated(_))));
    }

    #[test]
    fn missing_assets_degrade_to_messages() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Deck::build(&AssetPaths::in_dir(&dir.path().join("absent")), hint());

        for id in PageId::ALL {
            let page = deck.page(id);
            let errors = page.load_errors();
            assert_eq!(errors.len(), page.visuals().len());
            for e in errors {
                assert!(e.starts_with("Error loading image:"), "{e}");
            }
        }
        assert_eq!(deck.page(PageId::PromptSimilarity).load_errors().len(), 2);
        assert_eq!(deck.page(PageId::Welcome).load_errors().len(), 0);
    }

    #[test]
    fn exactly_one_page_is_visible() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = Deck::build(&AssetPaths::in_dir(dir.path()), hint());

        for target in PageId::ALL {
            deck.show(target);
            let visible: Vec<_> = PageId::ALL.into_iter().filter(|&p| deck.is_visible(p)).collect();
            assert_eq!(visible, vec![target]);
            assert_eq!(deck.active_page().id, target);
        }
    }

    #[test]
    fn menu_animation_loops() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = Deck::build(&fixtures::populate(dir.path()), hint());

        let index = |deck: &Deck| match deck.page(PageId::Menu).visuals()[0] {
            Visual::Animated(cycle) => cycle.index(),
            other => panic!("expected animation, got {other:?}"),
        };

        assert_eq!(index(&deck), 0);
        deck.advance_animations();
        assert_eq!(index(&deck), 1);
        deck.advance_animations();
        deck.advance_animations();
        assert_eq!(index(&deck), 0);
    }
}
