use thiserror::Error;

/// Required attribute set of one component tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredAttributes {
    pub tag: &'static str,
    pub required: &'static [&'static str],
}

pub const TABS: RequiredAttributes = RequiredAttributes {
    tag: "tabs",
    required: &["tab_default"],
};

pub const TAB_CONTENT: RequiredAttributes = RequiredAttributes {
    tag: "tab-content",
    required: &["tab_id", "tab_title"],
};

pub const TAB_NAV: RequiredAttributes = RequiredAttributes {
    tag: "tab-nav",
    required: &[],
};

/// Structured result of a failed attribute check. Non-fatal: the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<{tag}> requires attributes: {}", .missing.join(", "))]
pub struct MissingAttributes {
    pub tag: &'static str,
    pub missing: Vec<&'static str>,
}

impl RequiredAttributes {
    /// Checks every required attribute through `lookup`. Absent and empty values both count as missing.
    pub fn validate<'a, F>(&self, lookup: F) -> Result<(), MissingAttributes>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let missing: Vec<&'static str> = self
            .required
            .iter()
            .copied()
            .filter(|name| lookup(name).map_or(true, str::is_empty))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingAttributes {
                tag: self.tag,
                missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        let result = TAB_CONTENT.validate(|name| match name {
            "tab_id" => Some("1"),
            "tab_title" => Some("First"),
            _ => None,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_attributes_are_named() {
        let err = TAB_CONTENT
            .validate(|name| match name {
                "tab_id" => Some("1"),
                _ => None,
            })
            .unwrap_err();
        assert_eq!(err.missing, vec!["tab_title"]);
        assert_eq!(err.to_string(), "<tab-content> requires attributes: tab_title");
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = TABS.validate(|_| Some("")).unwrap_err();
        assert_eq!(err.to_string(), "<tabs> requires attributes: tab_default");
    }

    #[test]
    fn test_both_missing_reported_together() {
        let err = TAB_CONTENT.validate(|_| None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "<tab-content> requires attributes: tab_id, tab_title"
        );
    }

    #[test]
    fn test_nav_has_nothing_to_miss() {
        assert!(TAB_NAV.validate(|_| None).is_ok());
    }
}
