//! Fixed-size, 1-indexed pages over a slice.
//!
//! [`paginate`] is stateless and is what the `favorites --page` command
//! uses. [`Pager`] is library API for interactive front-ends that keep a
//! current page across next/previous actions; the CLI takes the page number
//! from its arguments and has no use for it.

/// One page of `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub has_prev: bool,
    pub has_next: bool,
}

/// Slice `items[(page-1)*size .. page*size]`, clipped to the list bounds.
///
/// The page number is not clamped: a page past the end yields an empty
/// `visible` with flags computed from the page as given. Page 0 is treated
/// as before the first page.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
    let end = page_number.saturating_mul(page_size);
    let start = end.saturating_sub(page_size);
    let visible = if page_number == 0 {
        &items[..0]
    } else {
        let start = start.min(items.len());
        let end = end.min(items.len());
        &items[start..end]
    };
    Page {
        visible,
        has_prev: page_number > 1,
        has_next: end < items.len(),
    }
}

/// Number of pages needed for `len` items; 0 for an empty list or size 0.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Current page of a list view.
///
/// Unlike [`paginate`], navigation here never leaves the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current page of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page, self.page_size)
    }

    /// Advance if another page exists for `len` items.
    pub fn next(&mut self, len: usize) -> bool {
        if self.page < total_pages(len, self.page_size) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back unless already on the first page.
    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, pulled into `1..=total_pages(len)`.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.page = page;
        self.clamp(len);
    }

    /// Pull the page back in range after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        let last = total_pages(len, self.page_size).max(1);
        self.page = self.page.clamp(1, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: [char; 7] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

    #[test]
    fn test_empty_list() {
        let empty: [char; 0] = [];
        let page = paginate(&empty, 1, 5);
        assert!(page.visible.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_first_page() {
        let page = paginate(&SEVEN, 1, 5);
        assert_eq!(page.visible, &['a', 'b', 'c', 'd', 'e']);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(&SEVEN, 2, 5);
        assert_eq!(page.visible, &['f', 'g']);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_exact_multiple_has_no_next() {
        let page = paginate(&SEVEN[..5], 1, 5);
        assert_eq!(page.visible.len(), 5);
        assert!(!page.has_next);
    }

    #[test]
    fn test_out_of_range_page_not_clamped() {
        let page = paginate(&SEVEN, 4, 5);
        assert!(page.visible.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_page_zero() {
        let page = paginate(&SEVEN, 0, 5);
        assert!(page.visible.is_empty());
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = paginate(&SEVEN, usize::MAX, 5);
        assert!(page.visible.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(7, 5), 2);
        assert_eq!(total_pages(7, 0), 0);
    }

    #[test]
    fn test_pager_navigation_stays_in_bounds() {
        let mut pager = Pager::new(5);
        assert!(!pager.prev());
        assert!(pager.next(SEVEN.len()));
        assert_eq!(pager.page(), 2);
        assert!(!pager.next(SEVEN.len()));
        assert_eq!(pager.slice(&SEVEN).visible, &['f', 'g']);
        assert!(pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_clamp_after_shrink() {
        let mut pager = Pager::new(5);
        pager.go_to(2, SEVEN.len());
        assert_eq!(pager.page(), 2);
        pager.clamp(5);
        assert_eq!(pager.page(), 1);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_go_to_clamps() {
        let mut pager = Pager::new(5);
        pager.go_to(9, SEVEN.len());
        assert_eq!(pager.page(), 2);
        pager.go_to(0, SEVEN.len());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_zero_size_is_one() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }
}
