//! Core survey data model: forms, questions, answers, and the response draft
//! assembled by the driver before each submission.

use std::fmt;

/// Opaque handle to an opened form, returned by a provider's `open_form`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHandle {
    id: String,
    title: Option<String>,
}

impl FormHandle {
    pub fn new(id: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id: id.into(),
            title,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// One question on a form. The answer domain is carried by the kind variant,
/// so answering dispatches as a plain match with one arm per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Explicit, ordered, finite list of string labels.
    ChoiceSet { choices: Vec<String> },
    /// Contiguous integer range `[lower, upper]`.
    NumericScale { lower: i64, upper: i64 },
    /// Anything the sampler cannot answer. Carried rather than dropped so
    /// `inspect` can report it; the driver skips these.
    Unsupported { type_name: String },
}

impl QuestionKind {
    pub fn is_supported(&self) -> bool {
        !matches!(self, QuestionKind::Unsupported { .. })
    }
}

/// One selected value. No identity beyond the value; immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(String),
    Scale(i64),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Choice(label) => f.write_str(label),
            Answer::Scale(value) => write!(f, "{value}"),
        }
    }
}

/// A response under construction: at most one answer per question, built
/// incrementally and submitted atomically. Discarded after the attempt,
/// whether it succeeded or not.
#[derive(Debug, Clone, Default)]
pub struct ResponseDraft {
    answers: Vec<(String, Answer)>,
}

impl ResponseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question, replacing any earlier answer for the
    /// same question id.
    pub fn set_answer(&mut self, question_id: impl Into<String>, answer: Answer) {
        let question_id = question_id.into();
        if let Some(slot) = self.answers.iter_mut().find(|(id, _)| *id == question_id) {
            slot.1 = answer;
        } else {
            self.answers.push((question_id, answer));
        }
    }

    pub fn answers(&self) -> &[(String, Answer)] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
