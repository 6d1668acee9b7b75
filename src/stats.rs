use serde::{Deserialize, Serialize};

/// Summary statistics for one column of the series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute min/max/mean/median over the finite values of an iterator.
pub fn summarize<I: IntoIterator<Item = f64>>(values: I) -> Summary {
    let mut vals: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    vals.sort_by(f64::total_cmp);

    let count = vals.len();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };

    Summary {
        count,
        min,
        max,
        mean,
        median,
    }
}
