// Brand range domain model

/// Inclusive alphabetic interval used to bucket brand identifiers by first letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRange {
    pub start: String,
    pub end: String,
}

impl BrandRange {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.trim().to_lowercase(),
            end: end.trim().to_lowercase(),
        }
    }

    /// Parse "l-m,n-p" into ordered ranges.
    ///
    /// Each entry is split on its first hyphen. An entry without a hyphen
    /// becomes a range whose bounds are equal. Empty entries are skipped.
    /// Bounds are not checked for order, length or overlap.
    pub fn parse_list(ranges: &str) -> Vec<BrandRange> {
        ranges
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('-') {
                Some((start, end)) => BrandRange::new(start, end),
                None => BrandRange::new(entry, entry),
            })
            .collect()
    }

    /// True when the lower-cased first character of `brand` lies within the range.
    /// Only the first character takes part in the comparison.
    pub fn contains(&self, brand: &str) -> bool {
        let Some(first) = brand.chars().next() else {
            return false;
        };
        let first: String = first.to_lowercase().collect();
        self.start.as_str() <= first.as_str() && first.as_str() <= self.end.as_str()
    }

    /// Key used in generated names, e.g. "L_to_M".
    pub fn key(&self) -> String {
        format!("{}_to_{}", self.start.to_uppercase(), self.end.to_uppercase())
    }

    pub fn dashboard_name(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.key())
    }

    /// Human label, e.g. "L to M".
    pub fn label(&self) -> String {
        format!("{} to {}", self.start.to_uppercase(), self.end.to_uppercase())
    }
}
