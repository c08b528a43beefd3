//! Aggregate reports over classified or scored comments.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classification::{Classification, Comment};

/// A label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Category and type distribution of a classification run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizationSummary {
    pub total: usize,
    /// Sorted by count, descending, then by label.
    pub categories: Vec<LabelCount>,
    /// Comments without a type are not counted.
    pub types: Vec<LabelCount>,
}

impl CategorizationSummary {
    pub fn from_results(results: &[Classification]) -> Self {
        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        let mut types: BTreeMap<&str, usize> = BTreeMap::new();
        for result in results {
            *categories.entry(result.category.as_str()).or_insert(0) += 1;
            if let Some(type_id) = result.type_.as_deref() {
                *types.entry(type_id).or_insert(0) += 1;
            }
        }
        Self {
            total: results.len(),
            categories: sorted_counts(categories),
            types: sorted_counts(types),
        }
    }
}

impl fmt::Display for CategorizationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Categorization summary ({} comments)", self.total)?;
        writeln!(f, "Categories:")?;
        write_counts(f, &self.categories, self.total)?;
        writeln!(f, "Types:")?;
        write_counts(f, &self.types, self.total)
    }
}

/// Histogram bucket of confidence values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Mean confidence of one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfidence {
    pub label: String,
    pub mean: f64,
    pub count: usize,
}

/// Distribution of confidence values over a scored dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    pub total: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; 0 with fewer than two values.
    pub std_dev: f64,
    /// `[0.0, 0.2)` … `[0.8, 1.0]`; the last bucket is closed.
    pub buckets: Vec<ConfidenceBucket>,
    pub by_category: Vec<GroupConfidence>,
    pub by_type: Vec<GroupConfidence>,
}

const BUCKET_COUNT: usize = 5;

impl ConfidenceSummary {
    /// Summarize comments and their confidence values, paired by position.
    pub fn from_scores(comments: &[Comment], confidences: &[f64]) -> Self {
        let values = confidences;
        let total = values.len();

        let mut buckets: Vec<ConfidenceBucket> = (0..BUCKET_COUNT)
            .map(|i| ConfidenceBucket {
                lower: i as f64 / BUCKET_COUNT as f64,
                upper: (i + 1) as f64 / BUCKET_COUNT as f64,
                count: 0,
            })
            .collect();
        for &value in values {
            let index = ((value * BUCKET_COUNT as f64).floor() as usize).min(BUCKET_COUNT - 1);
            buckets[index].count += 1;
        }

        let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        let mut by_type: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for (comment, &value) in comments.iter().zip(values) {
            if let Some(category) = comment.category.as_deref() {
                let entry = by_category.entry(category).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
            if let Some(type_id) = comment.type_.as_deref() {
                let entry = by_type.entry(type_id).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }

        Self {
            total,
            mean: mean(values),
            median: median(values),
            std_dev: sample_std_dev(values),
            buckets,
            by_category: group_means(by_category),
            by_type: group_means(by_type),
        }
    }
}

impl fmt::Display for ConfidenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confidence summary ({} comments)", self.total)?;
        writeln!(f, "  mean    {:.3}", self.mean)?;
        writeln!(f, "  median  {:.3}", self.median)?;
        writeln!(f, "  std dev {:.3}", self.std_dev)?;
        writeln!(f, "Distribution:")?;
        for (i, bucket) in self.buckets.iter().enumerate() {
            let close = if i + 1 == self.buckets.len() { ']' } else { ')' };
            writeln!(
                f,
                "  [{:.1}, {:.1}{} {:>6}",
                bucket.lower, bucket.upper, close, bucket.count
            )?;
        }
        writeln!(f, "By category:")?;
        write_groups(f, &self.by_category)?;
        writeln!(f, "By type:")?;
        write_groups(f, &self.by_type)
    }
}

fn sorted_counts(counts: BTreeMap<&str, usize>) -> Vec<LabelCount> {
    let mut sorted: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    sorted
}

fn group_means(groups: BTreeMap<&str, (f64, usize)>) -> Vec<GroupConfidence> {
    groups
        .into_iter()
        .map(|(label, (sum, count))| GroupConfidence {
            label: label.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[LabelCount], total: usize) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  (none)");
    }
    for entry in counts {
        let share = if total > 0 {
            entry.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        writeln!(f, "  {:<24} {:>6} {:>6.1}%", entry.label, entry.count, share)?;
    }
    Ok(())
}

fn write_groups(f: &mut fmt::Formatter<'_>, groups: &[GroupConfidence]) -> fmt::Result {
    if groups.is_empty() {
        return writeln!(f, "  (none)");
    }
    for group in groups {
        writeln!(f, "  {:<24} {:.3} ({})", group.label, group.mean, group.count)?;
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(category: &str, type_: Option<&str>) -> Classification {
        Classification {
            category: category.to_string(),
            subcategory: None,
            type_: type_.map(str::to_string),
        }
    }

    #[test]
    fn test_categorization_counts() {
        let results = vec![
            classification("Website", Some("Lentitud")),
            classification("Equipaje", Some("Daño")),
            classification("Website", Some("Error")),
            classification("Otros", None),
        ];
        let summary = CategorizationSummary::from_results(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.categories[0],
            LabelCount {
                label: "Website".to_string(),
                count: 2
            }
        );
        // Ties sorted by name.
        assert_eq!(summary.categories[1].label, "Equipaje");
        assert_eq!(summary.categories[2].label, "Otros");
        assert_eq!(summary.types.len(), 3);
        assert!(summary.to_string().contains("Website"));
    }

    #[test]
    fn test_confidence_statistics() {
        let comments = vec![
            Comment::labeled("a", "Equipaje", "Daño"),
            Comment::labeled("b", "Equipaje", "Pérdida"),
            Comment::labeled("c", "Website", "Error"),
            Comment::new("d"),
        ];
        let confidences = vec![0.0, 0.5, 1.0, 0.1];
        let summary = ConfidenceSummary::from_scores(&comments, &confidences);

        assert_eq!(summary.total, 4);
        assert!((summary.mean - 0.4).abs() < 1e-9);
        assert!((summary.median - 0.3).abs() < 1e-9);
        let expected_std = ((0.16 + 0.01 + 0.36 + 0.09) / 3.0_f64).sqrt();
        assert!((summary.std_dev - expected_std).abs() < 1e-9);

        let counts: Vec<usize> = summary.buckets.iter().map(|b| b.count).collect();
        // 1.0 lands in the closed last bucket.
        assert_eq!(counts, vec![2, 0, 1, 0, 1]);

        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].label, "Equipaje");
        assert!((summary.by_category[0].mean - 0.25).abs() < 1e-9);
        assert_eq!(summary.by_type.len(), 3);
    }

    #[test]
    fn test_empty_summaries() {
        let summary = ConfidenceSummary::from_scores(&[], &[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.to_string().contains("(none)"));
        assert!(CategorizationSummary::from_results(&[]).categories.is_empty());
    }
}
