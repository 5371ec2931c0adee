use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::quiz::QuizOutcome;

/// Importance (0..=10) per skill, in the order the skills were entered.
pub type SkillScores = IndexMap<String, u8>;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status", content = "text")]
pub enum RoadmapSection {
    Generated(String),
    /// The roadmap call failed; holds the failure description.
    Failed(String),
}

/// Everything produced for one submission.
///
/// The `Display` rendering is the report text both front ends show verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PathwayReport {
    pub quiz: QuizOutcome,
    pub skill_scores: SkillScores,
    pub roadmap: RoadmapSection,
}

impl fmt::Display for PathwayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n--- Quiz Results ---\n")?;
        match &self.quiz {
            QuizOutcome::NoQuestions => {
                f.write_str("No quiz questions available for the selected career goal.\n\n")?;
            }
            QuizOutcome::Scored { items, score, total } => {
                for (i, item) in items.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, item.question)?;
                    writeln!(f, "   Your answer: {}", item.answer)?;
                    writeln!(f, "   Correct answer: {}", item.expected)?;
                }
                writeln!(f, "\nScore: {score}/{total}")?;
            }
        }

        f.write_str("\nAnalyzing skill importance...\n")?;
        for (skill, value) in &self.skill_scores {
            writeln!(f, "- {skill}: {value}/10")?;
        }

        f.write_str("\nGenerating roadmap...\n")?;
        match &self.roadmap {
            RoadmapSection::Generated(text) => writeln!(f, "\n{text}"),
            RoadmapSection::Failed(cause) => writeln!(f, "\nError: {cause}"),
        }
    }
}
