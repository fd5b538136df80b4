use crate::authorship::AuthorshipReport;
use crate::graph_metrics::GraphMetrics;

/// Render a deterministic markdown report from metrics and authorship checks.
pub fn render_report(
    metrics: &GraphMetrics,
    authorships: &AuthorshipReport,
    max_examples: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push("# kgsynth Graph Report".to_string());
    lines.push(String::new());
    lines.push("## Totals".to_string());
    lines.push(format!("- facts: {}", metrics.facts));
    lines.push(format!("- subjects: {}", metrics.subjects));
    lines.push(format!("- faculty: {}", metrics.counts.faculty));
    lines.push(format!("- works: {}", metrics.counts.works));
    lines.push(format!("- authorships: {}", metrics.counts.authorships));
    lines.push(String::new());

    lines.push("## Instances per class".to_string());
    lines.push("| class | instances |".to_string());
    lines.push("| --- | --- |".to_string());
    for (class, count) in &metrics.types {
        lines.push(format!("| {class} | {count} |"));
    }
    lines.push(String::new());

    if !metrics.literals.languages.is_empty() {
        lines.push("## Literals per language".to_string());
        for (language, count) in &metrics.literals.languages {
            lines.push(format!("- {language}: {count}"));
        }
        lines.push(String::new());
    }

    lines.push("## Authorship checks".to_string());
    lines.push(format!("- works checked: {}", authorships.works_checked));
    lines.push(format!(
        "- authorships checked: {}",
        authorships.authorships_checked
    ));
    lines.push(format!("- violations: {}", authorships.violations.len()));
    for violation in authorships.violations.iter().take(max_examples) {
        lines.push(format!(
            "- {:?} {}: {}",
            violation.kind, violation.subject, violation.detail
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use kgsynth_core::FactStore;

    use super::*;
    use crate::authorship::check_authorships;
    use crate::graph_metrics::collect_graph_metrics;

    #[test]
    fn empty_graph_renders_headers_only() {
        let store = FactStore::new();
        let report = render_report(
            &collect_graph_metrics(&store),
            &check_authorships(&store),
            5,
        );
        assert!(report.starts_with("# kgsynth Graph Report"));
        assert!(report.contains("- facts: 0"));
        assert!(report.contains("- violations: 0"));
        assert!(!report.contains("## Literals per language"));
    }
}
