//! Page arithmetic and pagination buttons.

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// A clickable page number.
    Page { number: usize, current: bool },
    /// An ellipsis between non-consecutive page numbers.
    Gap,
}

/// Number of pages needed for `count` items, zero when there are none.
///
/// A `page_size` of zero is treated as one.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    count.div_ceil(size)
}

/// Builds the pagination bar for `current` out of `total` pages.
///
/// Shows the first page, the last page and the neighbours of the current one,
/// with a [`PageButton::Gap`] wherever numbers are skipped. Returns nothing when
/// there is at most one page.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::query::{page_buttons, PageButton};
///
/// let buttons = page_buttons(5, 9);
/// let numbers: Vec<Option<usize>> = buttons
///     .iter()
///     .map(|b| match b {
///         PageButton::Page { number, .. } => Some(*number),
///         PageButton::Gap => None,
///     })
///     .collect();
/// assert_eq!(numbers, vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(9)]);
/// ```
#[must_use]
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    if total <= 1 {
        return Vec::new();
    }

    let mut buttons = Vec::new();
    let mut previous: Option<usize> = None;

    for number in 1..=total {
        let visible = number == 1 || number == total || number.abs_diff(current) <= 1;
        if !visible {
            continue;
        }
        if previous.is_some_and(|p| number > p + 1) {
            buttons.push(PageButton::Gap);
        }
        buttons.push(PageButton::Page {
            number,
            current: number == current,
        });
        previous = Some(number);
    }

    buttons
}
