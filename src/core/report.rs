//! The report document model.
//!
//! A [`Report`] is the whole hard-coded document: hero, ordered sections,
//! survey charts, timeline, media and documents. [`Report::builtin`] loads the
//! NUREPDH report from [`super::content`].

use std::fmt;

use super::cards::{Card, CardDeck, DeckError, Rgb};
use super::chart::ChartConfig;
use super::content;

// ───────────────────────────────────────── sections ──────────

/// Every addressable block of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Summary,
    Introduction,
    Objective,
    Foundations,
    Methodology,
    Climate2024,
    Climate2025,
    Development,
    Impacts,
    Gallery,
    Videos,
    Documents,
    References,
    AppAccess,
}

impl SectionId {
    pub const ALL: &[SectionId] = &[
        SectionId::Summary,
        SectionId::Introduction,
        SectionId::Objective,
        SectionId::Foundations,
        SectionId::Methodology,
        SectionId::Climate2024,
        SectionId::Climate2025,
        SectionId::Development,
        SectionId::Impacts,
        SectionId::Gallery,
        SectionId::Videos,
        SectionId::Documents,
        SectionId::References,
        SectionId::AppAccess,
    ];

    /// Stable anchor used for navigation and `--section`.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Summary => "resumo",
            Self::Introduction => "introducao",
            Self::Objective => "objetivo",
            Self::Foundations => "fundamentacao",
            Self::Methodology => "metodologia",
            Self::Climate2024 => "clima-2024",
            Self::Climate2025 => "clima-2025",
            Self::Development => "desenvolvimento",
            Self::Impacts => "impactos",
            Self::Gallery => "galeria",
            Self::Videos => "videos",
            Self::Documents => "planos",
            Self::References => "referencias",
            Self::AppAccess => "aplicativo",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL.iter().copied().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyYear {
    Y2024,
    Y2025,
}

/// Extra content rendered after a section's paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    None,
    Charts(SurveyYear),
    Timeline,
    Gallery,
    Videos,
    Documents,
    References,
    AppAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Attention,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: char,
    /// Collapsible sections render a toggleable header.
    pub collapsible: bool,
    pub default_expanded: bool,
    pub paragraphs: Vec<&'static str>,
    pub highlights: Vec<Highlight>,
    pub callout: Option<Callout>,
    pub attachment: Attachment,
    /// Short description indexed by search.
    pub search_blurb: Option<&'static str>,
}

// ───────────────────────────────────────── other content ─────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentItem {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub title: &'static str,
    pub url: &'static str,
    pub thumbnail: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: &'static str,
    pub surname: &'static str,
    pub photo_url: &'static str,
    pub education: &'static str,
    pub experience: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub badge: &'static str,
    pub title_lead: &'static str,
    pub title_tail: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppAccess {
    pub title: &'static str,
    pub qr_url: &'static str,
    pub caption: &'static str,
    pub instagram_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub authors: &'static str,
    pub place: &'static str,
    pub credits: &'static str,
}

/// Top navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub target: SectionId,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { target: SectionId::Summary, label: "Resumo" },
    NavItem { target: SectionId::Climate2024, label: "Diagnóstico" },
    NavItem { target: SectionId::Climate2025, label: "Resultados" },
    NavItem { target: SectionId::Development, label: "Trajetória" },
    NavItem { target: SectionId::Gallery, label: "Galeria" },
    NavItem { target: SectionId::Documents, label: "Documentos" },
];

/// Cards shown in the gallery grid.
pub const GALLERY_LIMIT: usize = 12;

const PLAN_DESCRIPTION: &str =
    "Plano de ação estratégico para implementação das metodologias do NUREPDH nas escolas.";
const DOCUMENT_DESCRIPTION: &str =
    "Documentação oficial, protocolos e relatórios de acompanhamento das atividades.";
const PLAN_ACCENT: Rgb = Rgb::from_hex(0xF97316);
const DOCUMENT_ACCENT: Rgb = Rgb::from_hex(0x3B82F6);

// ───────────────────────────────────────── report ────────────

#[derive(Debug, Clone)]
pub struct Report {
    pub brand: &'static str,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub charts_2024: Vec<ChartConfig>,
    pub charts_2025: Vec<ChartConfig>,
    pub timeline: Vec<TimelineEvent>,
    pub plans: Vec<DocumentItem>,
    pub documents: Vec<DocumentItem>,
    pub gallery: Vec<&'static str>,
    pub videos: Vec<Video>,
    pub references: Vec<&'static str>,
    pub authors: Vec<Author>,
    pub app_access: AppAccess,
    pub footer: Footer,
}

impl Report {
    /// The NUREPDH 2023–2025 report.
    pub fn builtin() -> Self {
        Self {
            brand: "NUREPDH",
            hero: content::hero(),
            sections: content::sections(),
            charts_2024: content::charts_2024(),
            charts_2025: content::charts_2025(),
            timeline: content::timeline(),
            plans: content::plans(),
            documents: content::documents(),
            gallery: content::gallery(),
            videos: content::videos(),
            references: content::references(),
            authors: content::authors(),
            app_access: content::app_access(),
            footer: content::footer(),
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn charts(&self, year: SurveyYear) -> &[ChartConfig] {
        match year {
            SurveyYear::Y2024 => &self.charts_2024,
            SurveyYear::Y2025 => &self.charts_2025,
        }
    }

    /// Images shown in the gallery grid.
    pub fn gallery_images(&self) -> &[&'static str] {
        &self.gallery[..self.gallery.len().min(GALLERY_LIMIT)]
    }

    /// Plans followed by documents, as stack cards.
    pub fn document_deck(&self) -> Result<CardDeck, DeckError> {
        let plans = self.plans.iter().enumerate().map(|(i, p)| {
            Card::new(format!("plan-{i}"), p.title, PLAN_DESCRIPTION)
                .category("Plano")
                .url(p.url)
                .accent(PLAN_ACCENT)
                .icon('▤')
        });
        let docs = self.documents.iter().enumerate().map(|(i, d)| {
            Card::new(format!("doc-{i}"), d.title, DOCUMENT_DESCRIPTION)
                .category("Documento")
                .url(d.url)
                .accent(DOCUMENT_ACCENT)
                .icon('▥')
        });
        CardDeck::new(plans.chain(docs).collect())
    }
}

/// Large-thumbnail variant of an imgur url: `abc.png` → `abcl.png`.
///
/// Only an extension in the last path segment is rewritten.
pub fn optimized_image_url(url: &str) -> String {
    let last_segment = url.rfind('/').map_or(0, |i| i + 1);
    match url[last_segment..].rfind('.') {
        Some(dot) if dot > 0 => {
            let at = last_segment + dot;
            format!("{}l{}", &url[..at], &url[at..])
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::CategoryFilter;

    #[test]
    fn anchors_round_trip_for_every_section() {
        for &id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("#planos"), Some(SectionId::Documents));
        assert_eq!(SectionId::from_anchor("nowhere"), None);
    }

    #[test]
    fn builtin_report_has_every_section_once() {
        let report = Report::builtin();
        for &id in SectionId::ALL {
            assert_eq!(report.sections.iter().filter(|s| s.id == id).count(), 1, "{id}");
        }
    }

    #[test]
    fn only_summary_and_development_start_expanded() {
        let report = Report::builtin();
        let expanded: Vec<_> = report
            .sections
            .iter()
            .filter(|s| s.collapsible && s.default_expanded)
            .map(|s| s.id)
            .collect();
        assert_eq!(expanded, [SectionId::Summary, SectionId::Development]);
    }

    #[test]
    fn document_deck_lists_plans_then_documents() {
        let report = Report::builtin();
        let deck = report.document_deck().unwrap();
        assert_eq!(deck.len(), report.plans.len() + report.documents.len());
        assert_eq!(deck.cards()[0].id, "plan-0");
        assert_eq!(deck.cards()[report.plans.len()].id, "doc-0");
        assert_eq!(
            deck.categories(),
            vec![
                CategoryFilter::All,
                CategoryFilter::named("Plano"),
                CategoryFilter::named("Documento"),
            ]
        );
        assert!(deck.cards().iter().all(|c| c.has_destination()));
    }

    #[test]
    fn gallery_is_capped() {
        let report = Report::builtin();
        assert!(report.gallery.len() > GALLERY_LIMIT);
        assert_eq!(report.gallery_images().len(), GALLERY_LIMIT);
    }

    #[test]
    fn both_surveys_have_fourteen_charts() {
        let report = Report::builtin();
        assert_eq!(report.charts(SurveyYear::Y2024).len(), 14);
        assert_eq!(report.charts(SurveyYear::Y2025).len(), 14);
    }

    #[test]
    fn image_url_gets_large_suffix() {
        assert_eq!(
            optimized_image_url("https://i.imgur.com/t25NA05.png"),
            "https://i.imgur.com/t25NA05l.png"
        );
        assert_eq!(optimized_image_url("https://i.imgur.com/noext"), "https://i.imgur.com/noext");
        assert_eq!(optimized_image_url("photo.jpeg"), "photol.jpeg");
    }
}
