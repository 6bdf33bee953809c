// src/services/quiz.rs

//! Stress check-in quiz: fixed question set, weighted scoring,
//! band classification, and per-band tips.

use std::collections::HashMap;

use crate::models::{QuizResult, StressLevel};

/// One quiz question with weighted choices.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Form field id for this question
    pub id: &'static str,

    /// Prompt shown to the user
    pub text: &'static str,

    /// (label, weight) choices, in display order
    pub choices: [(&'static str, u32); 3],
}

/// The fixed question set, in display order. Indirect stress probes.
pub const QUIZ_QUESTIONS: &[Question] = &[
    Question {
        id: "sleep",
        text: "How has your sleep felt this week?",
        choices: [
            ("Great, restful", 0),
            ("Okay, but inconsistent", 1),
            ("Not great, hard to fall/stay asleep", 2),
        ],
    },
    Question {
        id: "overwhelm",
        text: "When deadlines stack up, you feel…",
        choices: [
            ("Focused, I have a plan", 0),
            ("A bit tense but managing", 1),
            ("Overwhelmed and stuck", 2),
        ],
    },
    Question {
        id: "energy",
        text: "Your daytime energy levels are…",
        choices: [
            ("High! I'm cruising", 0),
            ("Up and down", 1),
            ("Low and foggy", 2),
        ],
    },
    Question {
        id: "support",
        text: "How supported do you feel by friends/family/campus?",
        choices: [
            ("Very supported", 0),
            ("Somewhat supported", 1),
            ("Not really supported", 2),
        ],
    },
];

/// Score submitted answers and classify the stress band.
///
/// `answers` maps question id to the submitted weight as a raw form
/// value. Missing or garbled entries contribute 0; unknown ids are
/// ignored.
pub fn score_answers(answers: &HashMap<String, String>) -> QuizResult {
    let score: u32 = QUIZ_QUESTIONS
        .iter()
        .map(|q| {
            answers
                .get(q.id)
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .unwrap_or(0)
        })
        .sum();

    QuizResult {
        score,
        level: classify(score),
    }
}

/// Map a score onto a stress band.
pub fn classify(score: u32) -> StressLevel {
    match score {
        0..=2 => StressLevel::Low,
        3..=5 => StressLevel::Moderate,
        _ => StressLevel::High,
    }
}

/// Fixed wellness tips for a stress band.
pub fn tips_for(level: StressLevel) -> &'static [&'static str] {
    match level {
        StressLevel::Low => &[
            "Keep your routines that work (sleep, hydration, movement).",
            "Try a 5-minute gratitude or breathing practice to maintain balance.",
        ],
        StressLevel::Moderate => &[
            "Try the 4-7-8 breathing pattern or a short mindful walk.",
            "Break tasks into tiny steps; use a 25-min focus timer + 5-min break.",
        ],
        StressLevel::High => &[
            "Start small: 2 minutes of slow breathing or a gentle stretch.",
            "Consider reaching out to campus Counseling & Psychological Services.",
        ],
    }
}
