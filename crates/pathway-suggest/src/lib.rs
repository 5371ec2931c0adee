pub mod engine;
mod parse;
mod prompt;

use log::{info, warn};
use thiserror::Error;

use pathway_core::{quiz, ConfigError, PathwayReport, RoadmapSection, SkillScores};

pub use engine::{Connector, LlmConnector, LlmGenerator, TextGenerator};
pub use parse::parse_importance;

/// Failure of a single model call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("build LLM: {0}")]
    Build(String),
    #[error("chat: {0}")]
    Chat(String),
    #[error("LLM returned no text")]
    NoText,
}

/// Ask the model how important each skill is for `goal`.
///
/// Skills are rated one call at a time, in order. A failed call scores that
/// skill 0 and the remaining skills are still rated.
pub async fn rate_skills(
    generator: &dyn TextGenerator,
    goal: &str,
    skills: &[String],
) -> SkillScores {
    let mut scores = SkillScores::new();
    for skill in skills {
        let prompt = prompt::skill_importance_prompt(goal, skill);
        let value = match generator.generate(&prompt).await {
            Ok(raw) => parse::parse_importance(&raw),
            Err(e) => {
                warn!("importance for '{}' unavailable: {}", skill, e);
                0
            }
        };
        scores.insert(skill.clone(), value);
    }
    scores
}

pub async fn generate_roadmap(
    generator: &dyn TextGenerator,
    goal: &str,
    skills: &[String],
) -> RoadmapSection {
    let prompt = prompt::roadmap_prompt(goal, skills);
    match generator.generate(&prompt).await {
        Ok(text) => RoadmapSection::Generated(text),
        Err(e) => {
            warn!("roadmap generation failed: {}", e);
            RoadmapSection::Failed(e.to_string())
        }
    }
}

/// Build the full pathway report for one submission.
///
/// Never fails: model errors end up inside the report.
pub async fn generate_pathway(
    generator: &dyn TextGenerator,
    goal: &str,
    skills_raw: &str,
    answers: &[String],
) -> PathwayReport {
    let skills = pathway_core::parse_skill_list(skills_raw);
    info!("generating pathway for '{}' ({} skills)", goal, skills.len());

    let quiz = quiz::score_quiz(goal, answers);
    match quiz.score() {
        Some((score, total)) => info!("quiz scored {}/{}", score, total),
        None => info!("no quiz for '{}'", goal),
    }
    let skill_scores = rate_skills(generator, goal, &skills).await;
    let roadmap = generate_roadmap(generator, goal, &skills).await;

    PathwayReport {
        quiz,
        skill_scores,
        roadmap,
    }
}
