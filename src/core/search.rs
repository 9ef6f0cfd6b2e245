//! Search index + ranking over the report content.
//!
//! Matching is case-insensitive substring search on title and body text.

use std::fmt;

use super::report::{Report, SectionId};

/// What kind of content an entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Section,
    Chart,
    Event,
    Document,
    Video,
}

impl SearchKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Chart => "chart",
            Self::Event => "event",
            Self::Document => "document",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct SearchEntry {
    pub kind: SearchKind,
    pub title: String,
    pub content: String,
    pub target: SectionId,
    title_lower: String,
    content_lower: String,
}

impl SearchEntry {
    pub fn new(kind: SearchKind, title: impl Into<String>, content: impl Into<String>, target: SectionId) -> Self {
        let title = title.into();
        let content = content.into();
        Self {
            kind,
            title_lower: title.to_lowercase(),
            content_lower: content.to_lowercase(),
            title,
            content,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub kind: SearchKind,
    pub title: String,
    pub content: String,
    pub target: SectionId,
}

/// Build the flat index: section blurbs, both chart sets, timeline events,
/// plans and documents, then videos.
pub fn build_index(report: &Report) -> Vec<SearchEntry> {
    let mut out = Vec::new();

    for section in &report.sections {
        if let Some(blurb) = section.search_blurb {
            out.push(SearchEntry::new(SearchKind::Section, section.title, blurb, section.id));
        }
    }

    for (charts, target) in [
        (&report.charts_2024, SectionId::Climate2024),
        (&report.charts_2025, SectionId::Climate2025),
    ] {
        for chart in charts {
            let content = chart.summary.unwrap_or_default();
            out.push(SearchEntry::new(SearchKind::Chart, chart.title, content, target));
        }
    }

    for event in &report.timeline {
        out.push(SearchEntry::new(
            SearchKind::Event,
            format!("{} - {}", event.year, event.title),
            event.description,
            SectionId::Development,
        ));
    }

    for plan in &report.plans {
        out.push(SearchEntry::new(
            SearchKind::Document,
            plan.title,
            "Plano de ação estratégico.",
            SectionId::Documents,
        ));
    }
    for doc in &report.documents {
        out.push(SearchEntry::new(
            SearchKind::Document,
            doc.title,
            "Material de apoio e protocolos.",
            SectionId::Documents,
        ));
    }

    for video in &report.videos {
        out.push(SearchEntry::new(
            SearchKind::Video,
            video.title,
            "Registro em vídeo",
            SectionId::Videos,
        ));
    }

    out
}

/// Search pre-indexed entries. Entries whose title matches rank before
/// body-only matches; ties keep index order.
pub fn search_entries(entries: &[SearchEntry], query: &str, limit: usize) -> Vec<SearchResult> {
    let q = query.trim();
    if q.is_empty() || limit == 0 {
        return Vec::new();
    }
    let needle = q.to_lowercase();

    // Title hits first, then body-only hits; index order within each group.
    let mut ranked: Vec<(bool, usize, &SearchEntry)> = entries
        .iter()
        .enumerate()
        .filter_map(|(order, entry)| {
            if entry.title_lower.contains(&needle) {
                Some((true, order, entry))
            } else if entry.content_lower.contains(&needle) {
                Some((false, order, entry))
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by(|(a_title, a_order, _), (b_title, b_order, _)| {
        b_title.cmp(a_title).then_with(|| a_order.cmp(b_order))
    });
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(_, _, e)| SearchResult {
            kind: e.kind,
            title: e.title.clone(),
            content: e.content.clone(),
            target: e.target,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> Vec<SearchEntry> {
        build_index(&Report::builtin())
    }

    #[test]
    fn index_covers_every_content_kind() {
        let entries = index();
        let report = Report::builtin();
        let count = |kind| entries.iter().filter(|e| e.kind == kind).count();
        assert_eq!(count(SearchKind::Chart), 28);
        assert_eq!(count(SearchKind::Event), report.timeline.len());
        assert_eq!(count(SearchKind::Document), report.plans.len() + report.documents.len());
        assert_eq!(count(SearchKind::Video), report.videos.len());
        assert!(count(SearchKind::Section) > 0);
    }

    #[test]
    fn empty_query_finds_nothing() {
        assert!(search_entries(&index(), "   ", 10).is_empty());
        assert!(search_entries(&index(), "paz", 0).is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let results = search_entries(&index(), "BULLYING", 50);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| {
            r.title.to_lowercase().contains("bullying") || r.content.to_lowercase().contains("bullying")
        }));
    }

    #[test]
    fn title_matches_rank_first() {
        let entries = vec![
            SearchEntry::new(SearchKind::Section, "Resumo", "sobre mediação escolar", SectionId::Summary),
            SearchEntry::new(SearchKind::Document, "Protocolo de Mediação", "", SectionId::Documents),
        ];
        let results = search_entries(&entries, "mediação", 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].kind, SearchKind::Document);
        assert_eq!(results[1].target, SectionId::Summary);
    }

    #[test]
    fn events_are_titled_with_their_year() {
        let results = search_entries(&index(), "2024 - ", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchKind::Event);
        assert_eq!(results[0].target, SectionId::Development);
    }

    #[test]
    fn results_are_capped() {
        assert_eq!(search_entries(&index(), "a", 3).len(), 3);
    }
}
