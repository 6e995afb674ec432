//! Rendering of per-block percentile summaries

use crate::estimator::PercentileSummary;

/// Human-readable table, one line per simulated block.
pub fn render_text(summaries: &[PercentileSummary]) -> String {
    if summaries.is_empty() {
        return "mempool is empty; no fee levels to report\n".to_string();
    }

    let mut out = String::from("block    p10 (sat/B)   p50 (sat/B)   p90 (sat/B)\n");
    for (index, summary) in summaries.iter().enumerate() {
        out.push_str(&format!(
            "{:<8} {:>11.2}   {:>11.2}   {:>11.2}\n",
            index, summary.p10, summary.p50, summary.p90
        ));
    }
    out
}

/// JSON array of `{p10,p50,p90}` objects, index 0 = next block.
pub fn render_json(summaries: &[PercentileSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(p10: f64, p50: f64, p90: f64) -> PercentileSummary {
        PercentileSummary { p10, p50, p90 }
    }

    #[test]
    fn text_table_has_one_row_per_block() {
        let text = render_text(&[summary(1.0, 2.0, 3.0), summary(4.0, 5.0, 6.0)]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("block"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[2].starts_with('1'));
    }

    #[test]
    fn empty_summaries_render_an_explicit_notice() {
        assert!(render_text(&[]).contains("mempool is empty"));
    }

    #[test]
    fn json_output_is_an_array_of_percentile_objects() {
        let json = render_json(&[summary(1.5, 2.5, 3.5)]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["p10"], 1.5);
        assert_eq!(parsed[0]["p50"], 2.5);
        assert_eq!(parsed[0]["p90"], 3.5);
    }

    #[test]
    fn empty_summaries_serialize_to_an_empty_array() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
