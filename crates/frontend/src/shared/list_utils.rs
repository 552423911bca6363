/// List helpers: column sorting, name filter, client-side paging and match highlighting
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows shown per table page
pub const PAGE_SIZE: usize = 5;

/// Types that can be matched against a search box
pub trait Searchable {
    /// Whether the item matches the (already trimmed, non-empty) filter
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    /// Compare two items by the given field; unknown fields compare equal
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by field, so equal rows keep their previous order
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the header arrow
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Next `(field, ascending)` after a click on `clicked`: same column flips, new column starts ascending
pub fn toggle_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

/// Case-insensitive substring test
pub fn contains_ignore_case(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Keep the items matching the filter; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Number of pages for `total` items, never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Items of the given page (0-indexed); a page past the end is clamped to the last one
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return items.to_vec();
    }
    let page = page.min(page_count(items.len(), page_size) - 1);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Byte ranges of `text` matching `filter`, case-insensitively.
///
/// Empty when nothing matches or when lowercasing changes the byte layout
/// of the text (a few non-ASCII letters do), so callers can fall back to
/// plain text.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span class="search-match">{text[start..end].to_string()}</span> }.into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}
