//! Page specification parsing
//!
//! Turns user-entered text like `"1,3,5-7"` into a validated page selection.

use std::fmt;

/// A validated page selection: distinct, ascending, 1-indexed page numbers,
/// each within the bounds of the document it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet(Vec<u32>);

impl PageSet {
    /// Parse a page specification (e.g., "1,3,5-7") against a page count.
    ///
    /// Parsing is best-effort: malformed or out-of-bounds tokens are dropped
    /// silently rather than failing the whole input. An empty result means
    /// nothing valid was specified; the caller decides whether that is an
    /// error.
    pub fn parse(input: &str, total_pages: u32) -> Self {
        let mut pages = Vec::new();

        for token in input.split(',') {
            let token = token.trim();

            if let Some((start, end)) = token.split_once('-') {
                // Range token: kept only when both ends parse and the range
                // is forward and in bounds. "5-3" is dropped, not swapped.
                if let (Ok(start), Ok(end)) =
                    (start.trim().parse::<u32>(), end.trim().parse::<u32>())
                {
                    if start > 0 && start <= end && end <= total_pages {
                        pages.extend(start..=end);
                    }
                }
            } else if let Ok(page) = token.parse::<u32>() {
                if page >= 1 && page <= total_pages {
                    pages.push(page);
                }
            }
        }

        pages.sort_unstable();
        pages.dedup();

        PageSet(pages)
    }

    /// Selection of exactly one page, used by the quick actions
    pub fn single(page: u32) -> Self {
        PageSet(vec![page])
    }

    /// Page numbers in ascending order
    pub fn pages(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PageSet {
    /// Canonical comma-joined form; re-parsing it yields the same selection
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for page in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", page)?;
            first = false;
        }
        Ok(())
    }
}
