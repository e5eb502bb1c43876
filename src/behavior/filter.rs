//! Category filter for the work grid.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Branding,
    Web,
    Print,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Web => "Web",
            Self::Print => "Print",
        }
    }
}

/// Current filter choice. Exactly one is selected at a time, so the
/// single-active-button invariant holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(Category),
}

impl Selection {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All work",
            Self::Only(category) => category.label(),
        }
    }

    pub fn shows(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERY_CATEGORY: [Category; 3] = [Category::Branding, Category::Web, Category::Print];

    #[test]
    fn all_shows_every_category() {
        for category in EVERY_CATEGORY {
            assert!(Selection::All.shows(category));
        }
    }

    #[test]
    fn single_category_shows_only_itself() {
        let selection = Selection::Only(Category::Web);
        assert!(selection.shows(Category::Web));
        assert!(!selection.shows(Category::Branding));
        assert!(!selection.shows(Category::Print));
    }

    #[test]
    fn visible_set_matches_the_selection_exactly() {
        let cards = [
            Category::Branding,
            Category::Web,
            Category::Print,
            Category::Web,
        ];

        let shown: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, category)| Selection::Only(Category::Web).shows(**category))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(shown, vec![1, 3]);

        let shown_for_all = cards
            .iter()
            .filter(|category| Selection::All.shows(**category))
            .count();
        assert_eq!(shown_for_all, cards.len());
    }
}
