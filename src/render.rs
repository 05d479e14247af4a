// src/render.rs
//! Pure display transforms: match reports and resume lists as text lines.
//! Nothing here touches the network or the terminal; the CLI prints what
//! these produce and tests assert on it directly.

use crate::types::{MatchResult, Resume};

/// Skill tags shown inline per resume before collapsing to "+N more".
pub const INLINE_SKILL_LIMIT: usize = 5;

/// Rounded integer percentage for a unit-interval score.
pub fn score_percent(score: f64) -> u8 {
    (score * 100.0).round() as u8
}

/// Qualitative bucket derived from a rounded match percentage.
/// Thresholds apply to the rounded percentage, not the raw fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Low,
    Medium,
    High,
}

impl ScoreTier {
    pub fn from_percent(percent: u8) -> Self {
        if percent < 60 {
            Self::Low
        } else if percent < 80 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Terminal stand-in for the red/orange/green indicator.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Low => "❌",
            Self::Medium => "⚠️",
            Self::High => "✅",
        }
    }
}

/// One matched resume, with every score already rounded for display.
#[derive(Debug, Clone)]
pub struct MatchedResumeView {
    pub resume_id: i64,
    pub version: i64,
    pub percent: u8,
    pub tier: ScoreTier,
    pub keyword_percent: u8,
    pub tfidf_percent: u8,
    pub semantic_percent: u8,
}

/// Ranked, annotated view of a match result. Entries keep the input
/// sequence order verbatim; the service already ranked them.
#[derive(Debug, Clone)]
pub struct MatchReportView {
    pub job_title: String,
    pub company: String,
    pub entries: Vec<MatchedResumeView>,
}

impl MatchReportView {
    /// `None` when there is nothing to show. The empty state belongs to
    /// the caller, not this view.
    pub fn build(result: &MatchResult) -> Option<Self> {
        if result.matched_resumes.is_empty() {
            return None;
        }

        let entries = result
            .matched_resumes
            .iter()
            .map(|matched| {
                let percent = score_percent(matched.overall_score);
                MatchedResumeView {
                    resume_id: matched.resume_id,
                    version: matched.version,
                    percent,
                    tier: ScoreTier::from_percent(percent),
                    keyword_percent: score_percent(matched.details.keyword_match),
                    tfidf_percent: score_percent(matched.details.tfidf_similarity),
                    semantic_percent: score_percent(matched.details.semantic_similarity),
                }
            })
            .collect();

        Some(Self {
            job_title: result.job_title.clone(),
            company: result.company.clone(),
            entries,
        })
    }

    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Resume Match Results".to_string(),
            format!("Job: {} at {}", self.job_title, self.company),
        ];

        for entry in &self.entries {
            lines.push(format!(
                "{} Resume Version {}  Match: {}% ({})",
                entry.tier.indicator(),
                entry.version,
                entry.percent,
                entry.tier.label()
            ));
            lines.push(format!(
                "   Keyword Match: {}%  Content Similarity: {}%  Semantic Match: {}%",
                entry.keyword_percent, entry.tfidf_percent, entry.semantic_percent
            ));
        }

        lines
    }
}

/// One resume in the list, ready to print.
#[derive(Debug, Clone)]
pub struct ResumeCardView {
    pub id: i64,
    pub version: i64,
    pub uploaded: String,
    /// At most `INLINE_SKILL_LIMIT` entries.
    pub skills: Vec<String>,
    /// Exactly `total - INLINE_SKILL_LIMIT` when over the cap, else 0.
    pub hidden_skills: usize,
}

impl ResumeCardView {
    pub fn from_resume(resume: &Resume) -> Self {
        let skills = resume.skills();
        Self {
            id: resume.id,
            version: resume.version,
            uploaded: resume.upload_date.format("%b %d, %Y %H:%M").to_string(),
            skills: skills.iter().take(INLINE_SKILL_LIMIT).cloned().collect(),
            hidden_skills: skills.len().saturating_sub(INLINE_SKILL_LIMIT),
        }
    }
}

/// The user's resume list with an explicit empty state.
#[derive(Debug, Clone)]
pub struct ResumeListView {
    pub cards: Vec<ResumeCardView>,
}

impl ResumeListView {
    pub fn build(resumes: &[Resume]) -> Self {
        Self {
            cards: resumes.iter().map(ResumeCardView::from_resume).collect(),
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec!["Your Resumes".to_string()];

        if self.cards.is_empty() {
            lines.push(
                "No resumes uploaded yet. Upload your first resume to get started.".to_string(),
            );
            return lines;
        }

        for card in &self.cards {
            lines.push(format!(
                "Version {}  uploaded {}",
                card.version, card.uploaded
            ));
            if !card.skills.is_empty() {
                let mut tags = card.skills.join(", ");
                if card.hidden_skills > 0 {
                    tags.push_str(&format!(" +{} more", card.hidden_skills));
                }
                lines.push(format!("   Skills: {}", tags));
            }
        }

        lines
    }
}
