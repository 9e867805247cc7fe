//! A small deterministic ASCII chart for latency series.
//!
//! The renderer is a replaceable collaborator: anything that can turn an
//! ordered series into a bounded text block satisfies the same contract.

/// Render `samples` as an ASCII chart of at most `width` columns and
/// `height` rows, preceded by `caption`.
///
/// Series longer than `width` are averaged down chunk-wise so the chart
/// stays bounded. An empty series renders an explicit no-data message
/// rather than an empty grid.
pub fn plot(samples: &[f64], width: usize, height: usize, caption: &str) -> String {
    if samples.is_empty() {
        return format!("{caption}\n  (no data to display)");
    }

    let width = width.max(1);
    let height = height.max(2);

    let columns = compress(samples, width);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in &columns {
        min = min.min(value);
        max = max.max(value);
    }

    // A flat series still needs a non-zero value axis.
    if max == min {
        max = min + 1.0;
    }

    let row_of = |value: f64| -> usize {
        ((value - min) / (max - min) * (height - 1) as f64).round() as usize
    };

    let mut lines = Vec::with_capacity(height + 1);
    lines.push(caption.to_string());

    for row in (0..height).rev() {
        let label = min + (max - min) * row as f64 / (height - 1) as f64;

        let mut cells = String::with_capacity(columns.len());
        for &value in &columns {
            cells.push(if row_of(value) == row { '*' } else { ' ' });
        }

        lines.push(format!("{label:>8.1} |{}", cells.trim_end()));
    }

    lines.join("\n")
}

/// Average a series down to at most `width` columns, preserving order.
fn compress(samples: &[f64], width: usize) -> Vec<f64> {
    if samples.len() <= width {
        return samples.to_vec();
    }

    let chunk = (samples.len() + width - 1) / width;

    samples
        .chunks(chunk)
        .map(|bucket| bucket.iter().sum::<f64>() / bucket.len() as f64)
        .collect()
}
