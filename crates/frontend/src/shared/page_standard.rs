//! Page category constants for page standardization.
//!
//! Every top-level page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d410_weekly_ai_analysis--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `dashboards/d410_weekly_ai_analysis/` directory. The export pipeline also
//! locates its capture target through this id.

/// Analytical dashboard / report view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Intentionally custom design — free-form, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("d410_weekly_ai_analysis--dashboard"));
        assert!(!is_valid_page_id("no_separator"));
        assert!(!is_valid_page_id("--dashboard"));
        assert!(!is_valid_page_id("d410--"));
    }
}
