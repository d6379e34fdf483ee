//! Recommendation engine: maps gaps to remediation patterns, deduplicates,
//! and applies the global priority ordering.

use std::collections::HashMap;

use crate::domain::characteristics::CharacteristicTag;
use crate::domain::foundation::Rating;

use super::gap::Gap;
use super::knowledge::remedies_for;
use super::outcome::{CharacteristicAnalysis, CriticalGap, Recommendation};

/// Default size of the top-recommendation list.
pub const DEFAULT_TOP_RECOMMENDATIONS: usize = 10;

/// Maps gaps to prioritized recommendations.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Builds the recommendation list for one characteristic's gaps.
    ///
    /// Every gap is looked up in the knowledge table; each matching remedy
    /// becomes a `Recommendation` with priority inherited from the gap's
    /// severity. Duplicate (pattern, technology-set) pairs within the
    /// characteristic keep the highest-priority occurrence. Ordered by
    /// priority descending, effort ascending, ties by insertion order.
    pub fn recommend(tag: &CharacteristicTag, gaps: &[Gap]) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = Vec::new();
        let mut index: HashMap<(String, Vec<String>), usize> = HashMap::new();

        for gap in gaps {
            for remedy in remedies_for(tag, gap) {
                let candidate = Recommendation {
                    title: remedy.title.to_string(),
                    description: remedy.description.to_string(),
                    pattern: Some(remedy.pattern.to_string()),
                    technologies: remedy.technologies.iter().map(|t| t.to_string()).collect(),
                    effort: remedy.effort,
                    priority: gap.severity,
                    rationale: remedy.rationale.to_string(),
                    trade_offs: remedy.trade_offs.to_string(),
                    steps: remedy.steps.iter().map(|s| s.to_string()).collect(),
                };
                Self::insert_deduplicated(&mut recommendations, &mut index, candidate);
            }
        }

        // Stable sort preserves insertion order among ties.
        recommendations.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.effort.cmp(&b.effort))
        });
        recommendations
    }

    /// Collects the global top-N recommendations across all analyses.
    ///
    /// Deduplicates across characteristics by (pattern, technology-set),
    /// keeping the highest-priority occurrence, then orders by the fixed
    /// global key: characteristic rating descending, priority descending,
    /// effort ascending, ties by insertion order.
    pub fn top_recommendations(
        analyses: &[CharacteristicAnalysis],
        top_n: usize,
    ) -> Vec<Recommendation> {
        let mut keyed: Vec<(Rating, Recommendation)> = Vec::new();
        let mut index: HashMap<(String, Vec<String>), usize> = HashMap::new();

        for analysis in analyses {
            for rec in &analysis.recommendations {
                let key = Self::dedup_key(rec);
                match index.get(&key) {
                    Some(&existing) if keyed[existing].1.priority >= rec.priority => {}
                    Some(&existing) => {
                        keyed[existing] = (analysis.rating, rec.clone());
                    }
                    None => {
                        index.insert(key, keyed.len());
                        keyed.push((analysis.rating, rec.clone()));
                    }
                }
            }
        }

        keyed.sort_by(|(rating_a, a), (rating_b, b)| {
            rating_b
                .cmp(rating_a)
                .then_with(|| b.priority.cmp(&a.priority))
                .then_with(|| a.effort.cmp(&b.effort))
        });
        keyed.into_iter().map(|(_, rec)| rec).take(top_n).collect()
    }

    /// Collects every critical-severity gap across all analyses, ordered by
    /// characteristic rating descending, ties by insertion order, with
    /// identical entries deduplicated.
    pub fn critical_gaps(analyses: &[CharacteristicAnalysis]) -> Vec<CriticalGap> {
        let mut gaps: Vec<CriticalGap> = Vec::new();
        for analysis in analyses {
            for gap in &analysis.gaps {
                if gap.severity != crate::domain::foundation::Severity::Critical {
                    continue;
                }
                let entry = CriticalGap {
                    characteristic: analysis.characteristic.clone(),
                    rating: analysis.rating,
                    gap: gap.clone(),
                };
                if !gaps.contains(&entry) {
                    gaps.push(entry);
                }
            }
        }
        gaps.sort_by(|a, b| b.rating.cmp(&a.rating));
        gaps
    }

    fn dedup_key(rec: &Recommendation) -> (String, Vec<String>) {
        let mut technologies = rec.technologies.clone();
        technologies.sort();
        (rec.pattern.clone().unwrap_or_else(|| rec.title.clone()), technologies)
    }

    fn insert_deduplicated(
        recommendations: &mut Vec<Recommendation>,
        index: &mut HashMap<(String, Vec<String>), usize>,
        candidate: Recommendation,
    ) {
        let key = Self::dedup_key(&candidate);
        match index.get(&key) {
            Some(&existing) if recommendations[existing].priority >= candidate.priority => {}
            Some(&existing) => recommendations[existing] = candidate,
            None => {
                index.insert(key, recommendations.len());
                recommendations.push(candidate);
            }
        }
    }
}
