use crate::sbom_aggregation::domain::{Component, Ecosystem};
use std::fmt;

/// Summary counters for a combined SBOM.
///
/// Ecosystem counts classify by purl namespace prefix, so a component can
/// contribute to the total without contributing to either ecosystem count.
/// The license percentage uses truncating integer division and is defined
/// as zero for an empty SBOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomStatistics {
    pub total: usize,
    pub python: usize,
    pub javascript: usize,
    pub with_licenses: usize,
    pub license_percentage: usize,
}

impl SbomStatistics {
    pub fn compute(components: &[Component]) -> Self {
        let total = components.len();
        let python = components
            .iter()
            .filter(|c| Ecosystem::of(c.purl_str()) == Some(Ecosystem::PyPi))
            .count();
        let javascript = components
            .iter()
            .filter(|c| Ecosystem::of(c.purl_str()) == Some(Ecosystem::Npm))
            .count();
        let with_licenses = components.iter().filter(|c| c.has_license()).count();
        let license_percentage = if total > 0 {
            100 * with_licenses / total
        } else {
            0
        };

        Self {
            total,
            python,
            javascript,
            with_licenses,
            license_percentage,
        }
    }
}

impl fmt::Display for SbomStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Combined SBOM:")?;
        writeln!(f, "   Python packages:     {}", self.python)?;
        writeln!(f, "   JavaScript packages: {}", self.javascript)?;
        writeln!(f, "   Total:               {}", self.total)?;
        write!(
            f,
            "   With licenses:       {} ({}%)",
            self.with_licenses, self.license_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(value: serde_json::Value) -> Component {
        serde_json::from_value(value).unwrap()
    }

    fn sample(purl: Option<&str>, licensed: bool) -> Component {
        let mut value = serde_json::json!({"type": "library"});
        if let Some(purl) = purl {
            value["purl"] = serde_json::json!(purl);
        }
        if licensed {
            value["licenses"] = serde_json::json!([{"license": {"id": "MIT"}}]);
        }
        component(value)
    }

    #[test]
    fn test_counts_and_truncating_percentage() {
        // 10 components: 6 pypi, 4 npm, 5 licensed -> 50%
        let mut components = Vec::new();
        for i in 0..6 {
            components.push(sample(Some(&format!("pkg:pypi/p{}@1.0", i)), i < 3));
        }
        for i in 0..4 {
            components.push(sample(Some(&format!("pkg:npm/n{}@1.0", i)), i < 2));
        }

        let stats = SbomStatistics::compute(&components);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.python, 6);
        assert_eq!(stats.javascript, 4);
        assert_eq!(stats.with_licenses, 5);
        assert_eq!(stats.license_percentage, 50);
    }

    #[test]
    fn test_percentage_truncates() {
        let components = vec![
            sample(Some("pkg:pypi/a@1"), true),
            sample(Some("pkg:pypi/b@1"), false),
            sample(Some("pkg:pypi/c@1"), false),
        ];

        // 1/3 = 33.33 -> 33
        let stats = SbomStatistics::compute(&components);
        assert_eq!(stats.license_percentage, 33);
    }

    #[test]
    fn test_empty_sbom_has_zero_percentage() {
        let stats = SbomStatistics::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.license_percentage, 0);
    }

    #[test]
    fn test_foreign_purl_counts_toward_total_only() {
        let components = vec![sample(Some("pkg:cargo/serde@1.0"), false), sample(None, false)];

        let stats = SbomStatistics::compute(&components);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.python, 0);
        assert_eq!(stats.javascript, 0);
    }

    #[test]
    fn test_display_format() {
        let components = vec![
            sample(Some("pkg:pypi/a@1"), true),
            sample(Some("pkg:npm/b@1"), false),
        ];

        let rendered = format!("{}", SbomStatistics::compute(&components));
        let expected = "✅ Combined SBOM:\n   Python packages:     1\n   JavaScript packages: 1\n   Total:               2\n   With licenses:       1 (50%)";
        assert_eq!(rendered, expected);
    }
}
