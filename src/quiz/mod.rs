//! Web basics quiz: fixed answer key, scoring and feedback tiers.
//!
//! Scoring is a pure function of "which choice is checked for question N", so
//! it runs the same against the live form ([`form`]) and in tests.

pub mod form;
pub mod render;

/// One entry of the answer key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub answer: &'static str,
    pub explanation: &'static str,
}

pub const ANSWER_KEY: &[Question] = &[
    Question { id: "q1", answer: "a", explanation: "HTML signifie HyperText Markup Language" },
    Question {
        id: "q2",
        answer: "b",
        explanation: "La balise <a> (anchor) est utilisée pour créer des liens hypertextes",
    },
    Question {
        id: "q3",
        answer: "b",
        explanation: "CSS (Cascading Style Sheets) est le langage de style pour le web",
    },
    Question { id: "q4", answer: "c", explanation: "La propriété CSS \"color\" change la couleur du texte" },
    Question {
        id: "q5",
        answer: "b",
        explanation: "let est la façon moderne de déclarer une variable en JavaScript",
    },
    Question { id: "q6", answer: "b", explanation: "Bootstrap est le framework CSS utilisé pour ce site" },
    Question {
        id: "q7",
        answer: "b",
        explanation: "La balise <nav> est une balise sémantique HTML5 pour la navigation",
    },
    Question {
        id: "q8",
        answer: "b",
        explanation: "Le symbole # est utilisé pour sélectionner un élément par son ID",
    },
    Question { id: "q9", answer: "b", explanation: "onclick est l'événement JavaScript déclenché lors d'un clic" },
    Question {
        id: "q10",
        answer: "b",
        explanation: "Responsive design signifie un design qui s'adapte à toutes les tailles d'écran",
    },
];

/// Feedback band picked from the percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl Tier {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Tier::Excellent
        } else if pct >= 60.0 {
            Tier::Good
        } else if pct >= 40.0 {
            Tier::Fair
        } else {
            Tier::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent ! 🎉",
            Tier::Good => "Bien joué ! 👍",
            Tier::Fair => "Pas mal, continuez ! 💪",
            Tier::Low => "Continuez à apprendre ! 📚",
        }
    }

    /// Bootstrap background class for the progress bar.
    pub fn badge_class(self) -> &'static str {
        match self {
            Tier::Excellent => "bg-success",
            Tier::Good => "bg-primary",
            Tier::Fair => "bg-warning",
            Tier::Low => "bg-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionFeedback {
    pub id: &'static str,
    pub chosen: Option<String>,
    pub correct: bool,
    pub explanation: &'static str,
}

/// Result of one submission. Recomputed from scratch on every submit.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub tier: Tier,
    pub questions: Vec<QuestionFeedback>,
}

/// Score against `key`; `chosen(id)` yields the checked choice, if any.
/// Unanswered questions count as wrong.
pub fn score_with<F>(key: &[Question], mut chosen: F) -> QuizReport
where
    F: FnMut(&str) -> Option<String>,
{
    let questions: Vec<QuestionFeedback> = key
        .iter()
        .map(|q| {
            let pick = chosen(q.id);
            let correct = pick.as_deref() == Some(q.answer);
            QuestionFeedback { id: q.id, chosen: pick, correct, explanation: q.explanation }
        })
        .collect();
    let score = questions.iter().filter(|q| q.correct).count();
    let total = key.len();
    let percentage = if total == 0 { 0.0 } else { (score * 100) as f64 / total as f64 };
    QuizReport { score, total, percentage, tier: Tier::from_percentage(percentage), questions }
}

/// Score against the page's answer key.
pub fn score<F>(chosen: F) -> QuizReport
where
    F: FnMut(&str) -> Option<String>,
{
    score_with(ANSWER_KEY, chosen)
}
