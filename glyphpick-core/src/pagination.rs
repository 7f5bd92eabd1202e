//! Page-window arithmetic and the page control row

use std::ops::Range;

/// Glyph buttons per page (a 4x10 grid)
pub const PAGE_SIZE: usize = 40;

/// Number of pages for `len` items; never less than one
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of page `page` (1-based) within `len` items.
///
/// Pages past the end yield an empty range at `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// One entry of the pagination row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Go one page back; inert on the first page
    Previous { target: usize, enabled: bool },
    /// Jump to a page number
    Page { number: usize, active: bool },
    /// Stands in for omitted page numbers
    Ellipsis,
    /// Go one page forward; inert on the last page
    Next { target: usize, enabled: bool },
}

impl PageControl {
    /// Page this control navigates to, `None` for inert controls and ellipses
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::Previous { target, enabled } | PageControl::Next { target, enabled } => {
                enabled.then_some(target)
            }
            PageControl::Page { number, .. } => Some(number),
            PageControl::Ellipsis => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageControl::Previous { .. } => "‹ Previous".to_string(),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Next { .. } => "Next ›".to_string(),
        }
    }
}

/// Build the pagination row for `current` of `total` pages.
///
/// First and last page are always listed. Zero-based page indices from
/// `current - 2` to `current + 1` are listed too, i.e. one page before the
/// current one and two after. The indices just outside that window become
/// ellipses; everything else is left out.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut controls = Vec::with_capacity(9);
    controls.push(PageControl::Previous {
        target: current.saturating_sub(1).max(1),
        enabled: current > 1,
    });

    let cur = current as isize;
    let last = total as isize - 1;
    for index in 0..total as isize {
        if index == 0 || index == last || (index >= cur - 2 && index <= cur + 1) {
            controls.push(PageControl::Page {
                number: index as usize + 1,
                active: index as usize + 1 == current,
            });
        } else if index == cur - 3 || index == cur + 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.push(PageControl::Next {
        target: (current + 1).min(total),
        enabled: current < total,
    });
    controls
}
