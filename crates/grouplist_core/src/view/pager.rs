//! Client-side pagination over the group list.
//!
//! # Invariants
//! - Pages are 1-indexed; page N covers indices `[(N-1)*size, N*size)`.
//! - Advancing is rejected once the window would start at or past the list
//!   end; retreating is rejected below page 1.

use crate::model::group::TaskGroup;

/// Fixed-size window over the ordered group list, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page: usize,
}

impl Pager {
    /// Creates a pager positioned on page 1. `page_size` is clamped to >= 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` elements; an empty list still has
    /// one (empty) page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// The contiguous slice visible on the current page, at most
    /// `page_size` elements.
    pub fn slice<'a>(&self, groups: &'a [TaskGroup]) -> &'a [TaskGroup] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= groups.len() {
            return &[];
        }
        let end = (start + self.page_size).min(groups.len());
        &groups[start..end]
    }

    /// Advances one page. Returns false (no-op) when the next window would
    /// start at or past the end of a list with `total` elements.
    pub fn next(&mut self, total: usize) -> bool {
        if self.page * self.page_size >= total {
            return false;
        }
        self.page += 1;
        true
    }

    /// Retreats one page. Returns false (no-op) on page 1.
    pub fn prev(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Pulls the current page back into range after removals shrank the list.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total);
        if self.page > last {
            self.page = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Pager;
    use crate::model::group::TaskGroup;

    fn groups(n: usize) -> Vec<TaskGroup> {
        (0..n).map(|i| TaskGroup::new(format!("g{i}"))).collect()
    }

    #[test]
    fn twelve_groups_page_size_five_windows() {
        let list = groups(12);
        let mut pager = Pager::new(5);

        assert_eq!(pager.slice(&list), &list[0..5]);
        assert!(pager.next(list.len()));
        assert_eq!(pager.slice(&list), &list[5..10]);
        assert!(pager.next(list.len()));
        assert_eq!(pager.slice(&list), &list[10..12]);
        assert_eq!(pager.slice(&list).len(), 2);

        // Page 4 would start at index 15, past the end.
        assert!(!pager.next(list.len()));
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn prev_is_rejected_below_page_one() {
        let mut pager = Pager::new(5);
        assert!(!pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn empty_list_yields_one_empty_page() {
        let pager = Pager::new(5);
        assert_eq!(pager.page_count(0), 1);
        assert!(pager.slice(&[]).is_empty());
    }

    #[test]
    fn clamp_recovers_after_shrink() {
        let mut pager = Pager::new(5);
        assert!(pager.next(12));
        assert!(pager.next(12));
        assert_eq!(pager.page(), 3);

        pager.clamp(6);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        let list = groups(2);
        let pager = Pager::new(0);
        assert_eq!(pager.slice(&list).len(), 1);
        assert_eq!(pager.page_count(list.len()), 2);
    }
}
