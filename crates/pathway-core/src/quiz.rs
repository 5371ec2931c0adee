use serde::Serialize;

/// One question of a career quiz with its single accepted answer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct QuizItem {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn item(question: &'static str, answer: &'static str) -> QuizItem {
    QuizItem { question, answer }
}

/// Quiz bank keyed by career goal. Table order is the order goals are offered in.
pub const QUIZ_BANK: &[(&str, &[QuizItem])] = &[
    (
        "AI/ML Engineer",
        &[
            item("What is supervised learning?", "Learning with labeled data"),
            item("What is precision?", "TP / (TP + FP)"),
            item("What is backpropagation?", "Gradient-based optimization"),
        ],
    ),
    (
        "Full Stack Developer",
        &[
            item("What is HTML used for?", "Structure"),
            item("Which is a JavaScript framework?", "React"),
            item("What is server-side rendering?", "Rendering on server"),
        ],
    ),
    (
        "Data Scientist",
        &[
            item("What is a DataFrame?", "Pandas object"),
            item("Which plot is used for distributions?", "Histogram"),
            item("What is PCA?", "Dimensionality reduction"),
        ],
    ),
];

pub fn career_goals() -> impl Iterator<Item = &'static str> {
    QUIZ_BANK.iter().map(|(goal, _)| *goal)
}

/// Questions for `goal`, or an empty slice when the goal has no quiz.
pub fn questions_for(goal: &str) -> &'static [QuizItem] {
    QUIZ_BANK
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, items)| *items)
        .unwrap_or(&[])
}

/// Case-insensitive exact comparison of trimmed answers. No fuzzy matching.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question: String,
    pub answer: String,
    pub expected: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum QuizOutcome {
    NoQuestions,
    Scored {
        items: Vec<QuizAnswer>,
        score: usize,
        total: usize,
    },
}

impl QuizOutcome {
    /// `(score, total)` when the goal had questions.
    pub fn score(&self) -> Option<(usize, usize)> {
        match self {
            QuizOutcome::NoQuestions => None,
            QuizOutcome::Scored { score, total, .. } => Some((*score, *total)),
        }
    }
}

/// Score `answers` against the quiz for `goal`.
///
/// `answers` may be shorter than the question list; missing answers count as
/// empty strings and are wrong.
pub fn score_quiz(goal: &str, answers: &[String]) -> QuizOutcome {
    let questions = questions_for(goal);
    if questions.is_empty() {
        return QuizOutcome::NoQuestions;
    }

    let items: Vec<QuizAnswer> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = answers.get(i).map(|a| a.trim()).unwrap_or("");
            QuizAnswer {
                question: q.question.to_string(),
                answer: answer.to_string(),
                expected: q.answer.to_string(),
                correct: answers_match(answer, q.answer),
            }
        })
        .collect();
    let score = items.iter().filter(|i| i.correct).count();

    QuizOutcome::Scored {
        total: items.len(),
        items,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn goals_keep_table_order() {
        let goals: Vec<_> = career_goals().collect();
        assert_eq!(
            goals,
            vec!["AI/ML Engineer", "Full Stack Developer", "Data Scientist"]
        );
    }

    #[test]
    fn unknown_goal_has_no_questions() {
        assert!(questions_for("Astronaut").is_empty());
        assert_eq!(score_quiz("Astronaut", &answers(&["x"])), QuizOutcome::NoQuestions);
        assert_eq!(score_quiz("Astronaut", &[]).score(), None);
    }

    #[test]
    fn scores_case_insensitive_exact_matches() {
        let outcome = score_quiz(
            "AI/ML Engineer",
            &answers(&["Learning with labeled data", "wrong", ""]),
        );
        assert_eq!(outcome.score(), Some((1, 3)));

        let outcome = score_quiz(
            "AI/ML Engineer",
            &answers(&["  LEARNING WITH LABELED DATA ", "tp / (tp + fp)", "gradient-based optimization"]),
        );
        assert_eq!(outcome.score(), Some((3, 3)));
    }

    #[test]
    fn missing_answers_are_empty_and_wrong() {
        let outcome = score_quiz("Data Scientist", &answers(&["Pandas object"]));
        let QuizOutcome::Scored { items, score, total } = outcome else {
            panic!("expected a scored quiz");
        };
        assert_eq!((score, total), (1, 3));
        assert_eq!(items[1].answer, "");
        assert!(!items[1].correct);
        assert_eq!(items[2].expected, "Dimensionality reduction");
    }

    #[test]
    fn near_misses_score_as_wrong() {
        let outcome = score_quiz(
            "Full Stack Developer",
            &answers(&["Structures", "React.js", "Rendering on the server"]),
        );
        assert_eq!(outcome.score(), Some((0, 3)));
    }

    #[test]
    fn extra_answers_are_ignored() {
        let outcome = score_quiz(
            "Full Stack Developer",
            &answers(&["structure", "react", "rendering on server", "extra"]),
        );
        assert_eq!(outcome.score(), Some((3, 3)));
    }
}
