pub fn skill_importance_prompt(goal: &str, skill: &str) -> String {
    format!(
        "For the career goal '{goal}', how important is the skill '{skill}' on a scale of 0 to 10? \
Just give a number."
    )
}

pub fn roadmap_prompt(goal: &str, skills: &[String]) -> String {
    format!(
        "As a career coach, help a student become a {goal}. Their known skills are: {}. \
Based on these, suggest a learning roadmap in 5–7 stages with topic names, importance, and resources.",
        skills.join(", ")
    )
}
