//! Shared utility functions for the inflow extractor

/// Where the `INFLOW_<suffix>.dat` suffix comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixSource {
    /// Suffix taken from the workbook file name
    Derived(String),
    /// File name carries no "DS"/"US" token, the operator has to supply one
    PromptRequired,
}

/// Derive the output suffix from a workbook file name
///
/// Hydrograph workbooks are usually named after the reach end they feed,
/// e.g. "Reach12_DS_50yr.xlsx". The suffix runs from the first "DS" (or, when
/// there is none, the first "US") up to the next ".".
///
/// # Examples
///
/// ```
/// use inflow_extractor::utils::{derive_suffix, SuffixSource};
///
/// assert_eq!(
///     derive_suffix("Reach12_DS_50yr.xlsx"),
///     SuffixSource::Derived("DS_50yr".to_string())
/// );
/// assert_eq!(derive_suffix("Reach12_US.xlsx"), SuffixSource::Derived("US".to_string()));
/// assert_eq!(derive_suffix("Reach12.xlsx"), SuffixSource::PromptRequired);
/// ```
pub fn derive_suffix(file_name: &str) -> SuffixSource {
    let start = match file_name.find("DS").or_else(|| file_name.find("US")) {
        Some(idx) => idx,
        None => return SuffixSource::PromptRequired,
    };

    let tail = &file_name[start..];
    let suffix = match tail.find('.') {
        Some(dot) => &tail[..dot],
        None => tail,
    };

    SuffixSource::Derived(suffix.to_string())
}

/// Clean up a path typed or dragged into the terminal
///
/// Drag-and-drop wraps paths containing spaces in quotes on most terminals.
///
/// ```
/// use inflow_extractor::utils::clean_dropped_path;
///
/// assert_eq!(clean_dropped_path("  \"C:\\Models\\Reach 12_DS.xlsx\"\n"), "C:\\Models\\Reach 12_DS.xlsx");
/// assert_eq!(clean_dropped_path("'/data/US_100yr.xls' "), "/data/US_100yr.xls");
/// ```
pub fn clean_dropped_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(s: &str) -> SuffixSource {
        SuffixSource::Derived(s.to_string())
    }

    #[test]
    fn test_derive_suffix_ds_with_tail() {
        assert_eq!(derive_suffix("Reach12_DS_50yr.xlsx"), derived("DS_50yr"));
    }

    #[test]
    fn test_derive_suffix_us_only() {
        assert_eq!(derive_suffix("Reach12_US.xlsx"), derived("US"));
    }

    #[test]
    fn test_derive_suffix_ds_checked_before_us() {
        // US appears first in the name but DS still wins
        assert_eq!(derive_suffix("US_Reach_DS_10yr.xls"), derived("DS_10yr"));
    }

    #[test]
    fn test_derive_suffix_truncates_at_first_dot() {
        assert_eq!(derive_suffix("Reach_US_2.5yr.v2.xlsx"), derived("US_2"));
    }

    #[test]
    fn test_derive_suffix_without_extension() {
        assert_eq!(derive_suffix("Reach_DS_100yr"), derived("DS_100yr"));
    }

    #[test]
    fn test_derive_suffix_is_case_sensitive() {
        assert_eq!(derive_suffix("reach_ds_50yr.xlsx"), SuffixSource::PromptRequired);
    }

    #[test]
    fn test_derive_suffix_prompt_required() {
        assert_eq!(derive_suffix("Hydrographs.xlsx"), SuffixSource::PromptRequired);
    }

    #[test]
    fn test_clean_dropped_path_plain() {
        assert_eq!(clean_dropped_path("/tmp/file.xlsx"), "/tmp/file.xlsx");
    }

    #[test]
    fn test_clean_dropped_path_unbalanced_quote_kept() {
        assert_eq!(clean_dropped_path("\"/tmp/file.xlsx"), "\"/tmp/file.xlsx");
    }
}
