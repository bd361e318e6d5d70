use crate::catalog::{Catalog, CatalogMetric};
use crate::Statistics;
use std::cmp::Ordering;

impl Statistics for Catalog {
    type Metric = CatalogMetric;

    fn avg(&self) -> f64 {
        let review_counts: Vec<f64> = self.iter().map(|book| book.reviews.len() as f64).collect();

        if review_counts.is_empty() {
            0.0
        } else {
            review_counts.iter().sum::<f64>() / review_counts.len() as f64
        }
    }

    fn calculate_percentile(&self, metric: CatalogMetric, percentiles: &[f64]) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .iter()
            .map(|book| match metric {
                CatalogMetric::ReviewCount => book.reviews.len() as f64,
            })
            .collect();

        if values.is_empty() {
            return vec![0.0];
        }

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less));
        percentiles
            .iter()
            .map(|&p| {
                let idx = ((p.clamp(0.0, 1.0)) * ((values.len() - 1) as f64)).round() as usize;
                values.get(idx).copied().unwrap_or(0.0)
            })
            .collect()
    }
}
