//! Local keyword classifier.
//!
//! Pure function of its input and the static [`lexicon`](crate::lexicon)
//! tables. It never fails: text that matches nothing lands on
//! [`Discipline::FALLBACK`].

use homefix_core::models::{Classification, ClassificationSource, Discipline, Urgency};
use homefix_core::text::{contains_inflected, contains_phrase, normalize};
use serde::Serialize;

use crate::lexicon::{INSTALL_MARKERS, LEXICON, OVERRIDES, REPAIR_MARKERS, URGENCY_MARKERS};

/// Keyword hits for one discipline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineScore {
    pub discipline: Discipline,
    pub hits: usize,
    pub matched: Vec<&'static str>,
}

/// Kind of work the text asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    Install,
    Repair,
    Generic,
}

/// Classify free text, honouring a preselected discipline when present.
///
/// With a preselection only urgency and diagnosis come from the text.
pub fn classify(text: &str, preselected: Option<Discipline>) -> Classification {
    let normalized = normalize(text);

    let discipline = match preselected {
        Some(discipline) => discipline,
        None => infer_discipline(&normalized),
    };

    let urgency = urgency_for(&normalized);
    let diagnosis = diagnosis_for(discipline, work_kind(&normalized));

    tracing::debug!(
        discipline = %discipline,
        urgency = %urgency,
        preselected = preselected.is_some(),
        "Local classification"
    );

    // Templates always yield a non-empty diagnosis
    Classification::new(discipline, urgency, diagnosis, normalized, ClassificationSource::Local)
        .unwrap_or_else(|_| unreachable!("diagnosis template produced an empty string"))
}

/// Per-discipline keyword hits for `text`, in lexicon declaration order
pub fn score(text: &str) -> Vec<DisciplineScore> {
    score_normalized(&normalize(text))
}

fn score_normalized(normalized: &str) -> Vec<DisciplineScore> {
    LEXICON
        .iter()
        .map(|entry| {
            let matched: Vec<&'static str> = entry
                .keywords
                .iter()
                .copied()
                .filter(|keyword| normalized.contains(keyword))
                .collect();

            DisciplineScore { discipline: entry.discipline, hits: matched.len(), matched }
        })
        .collect()
}

/// Override title that forces a discipline, if any occurs in the text.
/// Plural and feminine forms of a title count (`plomeros`, `pintora`).
pub fn override_for(normalized: &str) -> Option<Discipline> {
    OVERRIDES
        .iter()
        .find(|(phrase, _)| contains_inflected(normalized, phrase))
        .map(|(_, discipline)| *discipline)
}

fn infer_discipline(normalized: &str) -> Discipline {
    if let Some(discipline) = override_for(normalized) {
        return discipline;
    }

    // Strictly greater keeps the first-declared discipline on ties
    let mut best: Option<(Discipline, usize)> = None;
    for entry in score_normalized(normalized) {
        if entry.hits > best.map_or(0, |(_, hits)| hits) {
            best = Some((entry.discipline, entry.hits));
        }
    }

    best.map_or(Discipline::FALLBACK, |(discipline, _)| discipline)
}

fn urgency_for(normalized: &str) -> Urgency {
    if URGENCY_MARKERS.iter().any(|marker| contains_inflected(normalized, marker)) {
        Urgency::HIGH
    } else {
        Urgency::DEFAULT
    }
}

/// Install markers are checked before repair markers
pub fn work_kind(normalized: &str) -> WorkKind {
    if INSTALL_MARKERS.iter().any(|marker| contains_phrase(normalized, marker)) {
        WorkKind::Install
    } else if REPAIR_MARKERS.iter().any(|marker| contains_phrase(normalized, marker)) {
        WorkKind::Repair
    } else {
        WorkKind::Generic
    }
}

fn diagnosis_for(discipline: Discipline, kind: WorkKind) -> String {
    match kind {
        WorkKind::Install => format!("{} installation", discipline.label()),
        WorkKind::Repair => format!("{} repair", discipline.label()),
        WorkKind::Generic => format!("{} service", discipline.label()),
    }
}
