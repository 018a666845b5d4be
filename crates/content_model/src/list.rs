//! The ordered content list and its positional mutation primitives

use crate::{ContentItem, ContentKind};
use serde::{Deserialize, Serialize};

/// Direction for an adjacent-swap reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Swap with the previous item.
    Up,
    /// Swap with the next item.
    Down,
}

impl MoveDirection {
    /// Signed index offset of the neighbor.
    pub fn offset(self) -> isize {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        }
    }
}

/// Counts of list items partitioned by kind, for display purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    pub images: usize,
    pub text_blocks: usize,
}

impl ContentCounts {
    /// Total number of items.
    pub fn total(&self) -> usize {
        self.images + self.text_blocks
    }
}

/// An ordered, mutable sequence of content items.
///
/// Insertion order is the display and export order. Items have no identity
/// beyond their current position: removal and reordering operate on
/// indices derived from the currently rendered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentList {
    items: Vec<ContentItem>,
}

impl ContentList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image block. The caller is expected to have filtered
    /// uploads to image media types; malformed bytes surface later, at
    /// decode time during export.
    pub fn push_image(&mut self, data: Vec<u8>, source_name: impl Into<String>) {
        self.items.push(ContentItem::image(data, source_name));
    }

    /// Append a text block, trimming surrounding whitespace first.
    ///
    /// A whitespace-only submission is silently ignored. Returns whether
    /// an item was appended.
    pub fn push_text(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(ContentItem::text(trimmed));
        true
    }

    /// Remove and return the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers derive indices from the
    /// currently rendered list, so an out-of-range index is a programmer
    /// error rather than a recoverable condition.
    pub fn remove(&mut self, index: usize) -> ContentItem {
        self.items.remove(index)
    }

    /// Swap the item at `index` with its neighbor in the given direction.
    ///
    /// Silently does nothing when the neighbor would fall outside the
    /// list. Returns whether a swap happened. This is the only reordering
    /// primitive; there is no arbitrary move-to-position.
    pub fn move_item(&mut self, index: usize, direction: MoveDirection) -> bool {
        let Some(neighbor) = index.checked_add_signed(direction.offset()) else {
            return false;
        };
        if neighbor >= self.items.len() {
            return false;
        }
        self.items.swap(index, neighbor);
        true
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Counts of items partitioned by kind.
    pub fn counts(&self) -> ContentCounts {
        let mut counts = ContentCounts::default();
        for item in &self.items {
            match item.kind() {
                ContentKind::Image => counts.images += 1,
                ContentKind::Text => counts.text_blocks += 1,
            }
        }
        counts
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        self.items.get(index)
    }

    /// The items in order, as a slice.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ContentList {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_text_trims() {
        let mut list = ContentList::new();
        assert!(list.push_text("  hi  "));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&ContentItem::text("hi")));
    }

    #[test]
    fn test_push_text_whitespace_only_is_noop() {
        let mut list = ContentList::new();
        assert!(!list.push_text(""));
        assert!(!list.push_text("   "));
        assert!(!list.push_text("\n\t "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_at_position() {
        let mut list = ContentList::new();
        list.push_text("a");
        list.push_text("b");
        list.push_text("c");

        let removed = list.remove(1);
        assert_eq!(removed, ContentItem::text("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&ContentItem::text("a")));
        assert_eq!(list.get(1), Some(&ContentItem::text("c")));
    }

    #[test]
    fn test_move_item_swaps_neighbors() {
        let mut list = ContentList::new();
        list.push_text("a");
        list.push_text("b");

        assert!(list.move_item(0, MoveDirection::Down));
        assert_eq!(list.get(0), Some(&ContentItem::text("b")));
        assert_eq!(list.get(1), Some(&ContentItem::text("a")));

        assert!(list.move_item(1, MoveDirection::Up));
        assert_eq!(list.get(0), Some(&ContentItem::text("a")));
    }

    #[test]
    fn test_move_item_boundary_noops() {
        let mut list = ContentList::new();
        list.push_text("a");
        list.push_text("b");

        let before = list.clone();
        assert!(!list.move_item(0, MoveDirection::Up));
        assert!(!list.move_item(1, MoveDirection::Down));
        assert_eq!(list, before);
    }

    #[test]
    fn test_counts_partition_by_kind() {
        let mut list = ContentList::new();
        assert_eq!(list.counts(), ContentCounts::default());

        list.push_text("hello");
        list.push_image(vec![0xFF, 0xD8, 0xFF], "a.jpg");
        list.push_image(vec![0x89, 0x50, 0x4E, 0x47], "b.png");

        let counts = list.counts();
        assert_eq!(counts.images, 2);
        assert_eq!(counts.text_blocks, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_clear() {
        let mut list = ContentList::new();
        list.push_text("hello");
        list.push_image(vec![1, 2, 3], "a.jpg");

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.counts().total(), 0);
    }

    #[test]
    fn test_interleaved_order_preserved() {
        let mut list = ContentList::new();
        list.push_text("first");
        list.push_image(vec![1], "a.jpg");
        list.push_text("second");

        let kinds: Vec<ContentKind> = list.iter().map(|item| item.kind()).collect();
        assert_eq!(
            kinds,
            vec![ContentKind::Text, ContentKind::Image, ContentKind::Text]
        );
    }
}
