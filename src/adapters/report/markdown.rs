//! Markdown report writer.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::analysis::{AnalysisResult, CharacteristicAnalysis, Recommendation};
use crate::domain::characteristics::Category;
use crate::domain::foundation::Score;

use super::ReportError;

const CATEGORY_ORDER: [Category; 3] =
    [Category::Operational, Category::Structural, Category::CrossCutting];

/// Renders the result as a markdown report.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Architecture Compliance Report: {}", result.project);
    out.push('\n');

    match result.overall_score {
        Some(score) => {
            let _ = writeln!(out, "**Overall score: {} / 100** `{}`", score, score_bar(score));
        }
        None => {
            let _ = writeln!(out, "**Overall score: n/a** (no characteristic was analyzable)");
        }
    }
    out.push('\n');

    out.push_str("## Executive Summary\n\n");
    let _ = writeln!(out, "{}", result.executive_summary);
    out.push('\n');

    if !result.critical_gaps.is_empty() {
        out.push_str("## Critical Gaps\n\n");
        for cg in &result.critical_gaps {
            let _ = writeln!(
                out,
                "- {} **{}** ({} rated {}): {} - {}",
                cg.gap.severity.marker(),
                cg.gap.area,
                cg.characteristic,
                cg.rating,
                cg.gap.issue,
                cg.gap.impact
            );
        }
        out.push('\n');
    }

    out.push_str("## Characteristics\n\n");
    for category in CATEGORY_ORDER {
        let in_category: Vec<&CharacteristicAnalysis> =
            result.analyses.iter().filter(|a| a.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        let _ = writeln!(out, "### {category}");
        out.push('\n');
        out.push_str("| Characteristic | Rating | Score | Status |\n");
        out.push_str("|---|---|---|---|\n");
        for analysis in &in_category {
            let score = analysis
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let top = if analysis.is_top { " (top)" } else { "" };
            let _ = writeln!(
                out,
                "| {}{} | {} | {} | {} |",
                analysis.characteristic, top, analysis.rating, score, analysis.status
            );
        }
        out.push('\n');
        for analysis in &in_category {
            if analysis.gaps.is_empty() {
                continue;
            }
            let _ = writeln!(out, "#### {} gaps", analysis.characteristic);
            out.push('\n');
            for gap in &analysis.gaps {
                let _ = writeln!(
                    out,
                    "- {} **{}**: {} - {}",
                    gap.severity.marker(),
                    gap.area,
                    gap.issue,
                    gap.impact
                );
            }
            out.push('\n');
        }
    }

    if !result.top_recommendations.is_empty() {
        out.push_str("## Top Recommendations\n\n");
        for (i, rec) in result.top_recommendations.iter().enumerate() {
            render_recommendation(&mut out, i + 1, rec);
        }
        render_remediation_tally(&mut out, result);
    }

    out
}

/// Tally of patterns and technologies across every recommendation in the
/// report, in first-appearance order.
fn render_remediation_tally(out: &mut String, result: &AnalysisResult) {
    let mut patterns: Vec<(&str, usize)> = Vec::new();
    let mut technologies: Vec<&str> = Vec::new();
    for rec in result
        .analyses
        .iter()
        .flat_map(|a| a.recommendations.iter())
    {
        if let Some(pattern) = rec.pattern.as_deref() {
            match patterns.iter_mut().find(|(p, _)| *p == pattern) {
                Some((_, count)) => *count += 1,
                None => patterns.push((pattern, 1)),
            }
        }
        for tech in &rec.technologies {
            if !technologies.contains(&tech.as_str()) {
                technologies.push(tech);
            }
        }
    }
    if patterns.is_empty() {
        return;
    }
    out.push_str("## Remediation Focus\n\n");
    for (pattern, count) in &patterns {
        let _ = writeln!(out, "- {pattern} (addresses {count} finding(s))");
    }
    if !technologies.is_empty() {
        let _ = writeln!(out, "\nCandidate technologies: {}", technologies.join(", "));
    }
    out.push('\n');
}

fn render_recommendation(out: &mut String, rank: usize, rec: &Recommendation) {
    let _ = writeln!(out, "### {rank}. {}", rec.title);
    out.push('\n');
    let _ = writeln!(out, "{}", rec.description);
    out.push('\n');
    if let Some(pattern) = &rec.pattern {
        let _ = writeln!(out, "- Pattern: {pattern}");
    }
    if !rec.technologies.is_empty() {
        let _ = writeln!(out, "- Technologies: {}", rec.technologies.join(", "));
    }
    let _ = writeln!(out, "- Priority: {} / Effort: {}", rec.priority, rec.effort);
    let _ = writeln!(out, "- Rationale: {}", rec.rationale);
    let _ = writeln!(out, "- Trade-offs: {}", rec.trade_offs);
    if !rec.steps.is_empty() {
        out.push_str("- Steps:\n");
        for step in &rec.steps {
            let _ = writeln!(out, "  1. {step}");
        }
    }
    out.push('\n');
}

/// Ten-segment bar, one segment per ten points.
fn score_bar(score: Score) -> String {
    let filled = (score.value() / 10) as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}

/// Writes the markdown report to the given path.
pub fn write(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, render(result)).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Gap;
    use crate::domain::characteristics::{Characteristic, CharacteristicTag};
    use crate::domain::foundation::{Effort, Rating, Severity};

    fn result() -> AnalysisResult {
        let availability =
            Characteristic::standard("c-1", &CharacteristicTag::Availability, Rating::Critical);
        let security =
            Characteristic::standard("c-2", &CharacteristicTag::Security, Rating::High);
        AnalysisResult {
            project: "shop".to_string(),
            overall_score: Some(Score::new(73)),
            analyses: vec![
                CharacteristicAnalysis::analyzed(
                    &availability,
                    Score::new(60),
                    vec![Gap::new("API", "no redundancy", Severity::Critical, "outage")],
                    vec![],
                ),
                CharacteristicAnalysis::analyzed(&security, Score::new(85), vec![], vec![]),
            ],
            critical_gaps: vec![],
            top_recommendations: vec![Recommendation {
                title: "Add a second instance".to_string(),
                description: "Run the API behind a load balancer.".to_string(),
                pattern: Some("Active-Active Redundancy".to_string()),
                technologies: vec!["nginx".to_string()],
                effort: Effort::Medium,
                priority: Severity::Critical,
                rationale: "Single instance is a single point of failure.".to_string(),
                trade_offs: "Doubles compute cost.".to_string(),
                steps: vec!["Provision second instance".to_string()],
            }],
            executive_summary: "1 of 2 characteristics below target.".to_string(),
        }
    }

    #[test]
    fn groups_characteristics_by_category() {
        let md = render(&result());
        let operational = md.find("### Operational").unwrap();
        let cross = md.find("### Cross-Cutting").unwrap();
        assert!(operational < cross);
        assert!(!md.contains("### Structural"));
    }

    #[test]
    fn gaps_carry_severity_markers() {
        let md = render(&result());
        assert!(md.contains("[!!] **API**"));
    }

    #[test]
    fn recommendations_are_ranked() {
        let md = render(&result());
        assert!(md.contains("### 1. Add a second instance"));
        assert!(md.contains("- Pattern: Active-Active Redundancy"));
    }

    #[test]
    fn missing_overall_score_renders_as_not_applicable() {
        let mut r = result();
        r.overall_score = None;
        let md = render(&r);
        assert!(md.contains("Overall score: n/a"));
    }

    #[test]
    fn score_bar_fills_per_ten_points() {
        assert_eq!(score_bar(Score::new(73)), "#######---");
        assert_eq!(score_bar(Score::new(100)), "##########");
        assert_eq!(score_bar(Score::ZERO), "----------");
    }

    #[test]
    fn tally_counts_patterns_across_analyses() {
        let mut r = result();
        r.analyses[0].recommendations = r.top_recommendations.clone();
        r.analyses[1].recommendations = r.top_recommendations.clone();
        let md = render(&r);
        assert!(md.contains("## Remediation Focus"));
        assert!(md.contains("Active-Active Redundancy (addresses 2 finding(s))"));
        assert!(md.contains("Candidate technologies: nginx"));
    }

    #[test]
    fn write_persists_the_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        write(&result(), &path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render(&result()));
    }
}
