use crate::catalog::CatalogItem;

pub const RECENTLY_PLAYED_LIMIT: usize = 5;

/// Most recent first, no two entries with the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentlyPlayed {
    items: Vec<CatalogItem>,
}

impl RecentlyPlayed {
    pub fn record(&mut self, item: CatalogItem) {
        self.items.retain(|existing| existing.id() != item.id());
        self.items.insert(0, item);
        self.items.truncate(RECENTLY_PLAYED_LIMIT);
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::song;

    #[test]
    fn bounded_and_deduplicated() {
        let mut recent = RecentlyPlayed::default();
        for id in ["a", "b", "c", "d", "e", "f"] {
            recent.record(CatalogItem::Song(song(id)));
        }
        assert_eq!(recent.len(), RECENTLY_PLAYED_LIMIT);
        assert_eq!(recent.items()[0].id(), "f");
        assert!(recent.items().iter().all(|i| i.id() != "a"));

        recent.record(CatalogItem::Song(song("d")));
        let ids: Vec<_> = recent.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, ["d", "f", "e", "c", "b"]);
    }
}
