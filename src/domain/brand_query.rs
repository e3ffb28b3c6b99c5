// Brand extraction and query rewriting for log insights queries
use super::brand_range::BrandRange;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static BRAND_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PhpAppLogs_([a-zA-Z0-9_-]+)\.zenarate\.com").expect("brand pattern is valid")
});

const BRAND_DOMAIN: &str = "zenarate.com";

/// Brand identifiers found in a widget query plus the text after the last match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandQuery {
    brands: BTreeSet<String>,
    suffix: String,
}

impl BrandQuery {
    /// Returns `None` when the query references no brand log group.
    pub fn parse(query: &str) -> Option<Self> {
        let mut brands = BTreeSet::new();
        let mut cut = None;

        for captures in BRAND_SOURCE.captures_iter(query) {
            if let (Some(whole), Some(brand)) = (captures.get(0), captures.get(1)) {
                brands.insert(brand.as_str().to_string());
                cut = Some(whole.end());
            }
        }

        cut.map(|end| Self {
            brands,
            suffix: query[end..].to_string(),
        })
    }

    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(String::as_str)
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Build the query restricted to brands in `range`.
    /// Text between matches is dropped; only the trailing suffix survives.
    pub fn rewrite_for(&self, range: &BrandRange) -> Option<String> {
        let sources: Vec<String> = self
            .brands()
            .filter(|brand| range.contains(brand))
            .map(|brand| format!("SOURCE '{}.{}'", brand, BRAND_DOMAIN))
            .collect();

        if sources.is_empty() {
            return None;
        }

        Some(format!("{}{}", sources.join(" | "), self.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_brand() {
        assert_eq!(BrandQuery::parse("fields @message | limit 20"), None);
        assert_eq!(BrandQuery::parse(""), None);
    }

    #[test]
    fn test_parse_dedups_and_keeps_suffix_after_last_match() {
        let query = "SOURCE 'PhpAppLogs_zeta.zenarate.com' | SOURCE 'PhpAppLogs_acme.zenarate.com' \
                     | PhpAppLogs_zeta.zenarate.com | filter level = 'error'";
        let parsed = BrandQuery::parse(query).unwrap();

        assert_eq!(parsed.brands().collect::<Vec<_>>(), vec!["acme", "zeta"]);
        assert_eq!(parsed.suffix(), " | filter level = 'error'");
    }

    #[test]
    fn test_rewrite_for_range() {
        let query = "PhpAppLogs_acme.zenarate.com | PhpAppLogs_best.zenarate.com | stats count()";
        let parsed = BrandQuery::parse(query).unwrap();

        assert_eq!(
            parsed.rewrite_for(&BrandRange::new("a", "b")).as_deref(),
            Some("SOURCE 'acme.zenarate.com' | SOURCE 'best.zenarate.com' | stats count()")
        );
        assert_eq!(
            parsed.rewrite_for(&BrandRange::new("b", "c")).as_deref(),
            Some("SOURCE 'best.zenarate.com' | stats count()")
        );
        assert_eq!(parsed.rewrite_for(&BrandRange::new("x", "z")), None);
    }

    #[test]
    fn test_tokens_with_dashes_and_underscores() {
        let parsed = BrandQuery::parse("PhpAppLogs_big-box_co.zenarate.com").unwrap();
        assert_eq!(parsed.brands().collect::<Vec<_>>(), vec!["big-box_co"]);
        assert_eq!(parsed.suffix(), "");
        assert_eq!(
            parsed.rewrite_for(&BrandRange::new("b", "b")).as_deref(),
            Some("SOURCE 'big-box_co.zenarate.com'")
        );
    }

    #[test]
    fn test_brand_case_preserved_but_matched_case_insensitively() {
        let parsed = BrandQuery::parse("PhpAppLogs_Lumen.zenarate.com | stats count()").unwrap();
        assert_eq!(
            parsed.rewrite_for(&BrandRange::new("l", "m")).as_deref(),
            Some("SOURCE 'Lumen.zenarate.com' | stats count()")
        );
    }
}
