use crate::Workshop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub page: u32,
    pub filter_key: String,
    pub display: DisplayState,
    /// `Some(page)` only when there are filtered cards to show under it.
    pub page_indicator: Option<u32>,
    pub dirty: bool,
}

/// Exactly one of these is rendered at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error(String),
    /// The loaded page itself was empty: no further pages exist.
    EndOfData,
    /// Cards for the loaded page after filtering. May be empty when the
    /// filter matches nothing, which renders as silence rather than as an
    /// end-of-data notice.
    Cards(Vec<WorkshopCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopCardView {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub dates: String,
}

impl WorkshopCardView {
    pub(crate) fn from_workshop(workshop: &Workshop) -> Self {
        Self {
            id: workshop.id,
            name: workshop.name.clone(),
            image_url: workshop.image_url.clone(),
            dates: format!("{} - {}", workshop.start_date, workshop.end_date),
        }
    }
}

/// Case-insensitive substring filter over workshop names. An empty key
/// selects everything; order is always preserved from the input.
pub fn filter_workshops<'a>(items: &'a [Workshop], key: &str) -> Vec<&'a Workshop> {
    if key.is_empty() {
        return items.iter().collect();
    }
    let needle = key.to_lowercase();
    items
        .iter()
        .filter(|workshop| workshop.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workshop(id: u64, name: &str) -> Workshop {
        Workshop {
            id,
            name: name.to_string(),
            image_url: format!("https://example.com/{id}.png"),
            start_date: "2020-01-01".to_string(),
            end_date: "2020-01-03".to_string(),
        }
    }

    #[test]
    fn empty_key_returns_all_in_order() {
        let items = vec![workshop(1, "Intro to X"), workshop(2, "advanced y")];
        let filtered = filter_workshops(&items, "");
        assert_eq!(
            filtered,
            items.iter().collect::<Vec<_>>(),
            "empty key must be the identity filter"
        );
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let items = vec![workshop(1, "Intro to X"), workshop(2, "advanced y")];

        let filtered = filter_workshops(&items, "INTRO");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);

        let filtered = filter_workshops(&items, "a");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn filter_is_idempotent() {
        let items = vec![workshop(1, "Rust"), workshop(2, "Go"), workshop(3, "rustic")];
        let first = filter_workshops(&items, "rust");
        let second = filter_workshops(&items, "rust");
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|w| w.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn empty_items_yield_empty_result() {
        assert!(filter_workshops(&[], "anything").is_empty());
    }

    #[test]
    fn card_view_formats_date_range() {
        let item = workshop(7, "Welding");
        let card = WorkshopCardView::from_workshop(&item);
        assert_eq!(card.dates, "2020-01-01 - 2020-01-03");
        assert_eq!(card.name, "Welding");
    }
}
