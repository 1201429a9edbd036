//! Serde wire types shared by the HTTP and fixture providers.

use serde::{Deserialize, Serialize};

use crate::form::{Question, QuestionKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<i64>,
}

impl QuestionDescriptor {
    /// Maps the wire kind onto the question model. Unknown kind strings (and
    /// scale questions missing a bound) decode as `Unsupported` so one exotic
    /// question never fails the whole form.
    pub fn into_question(self) -> Question {
        let kind = match self.kind.as_str() {
            "choice" | "choice_set" | "multiple_choice" | "list" => QuestionKind::ChoiceSet {
                choices: self.choices.unwrap_or_default(),
            },
            "scale" | "numeric_scale" => match (self.lower, self.upper) {
                (Some(lower), Some(upper)) => QuestionKind::NumericScale { lower, upper },
                _ => QuestionKind::Unsupported {
                    type_name: format!("{} (missing bounds)", self.kind),
                },
            },
            other => QuestionKind::Unsupported {
                type_name: other.to_string(),
            },
        };
        Question {
            id: self.id,
            title: self.title,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(json: serde_json::Value) -> QuestionDescriptor {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn choice_kinds_decode_to_choice_set() {
        for kind in ["choice", "multiple_choice", "list"] {
            let q = descriptor(serde_json::json!({
                "id": "q1", "title": "Pick one", "kind": kind,
                "choices": ["Yes", "No"],
            }))
            .into_question();
            assert_eq!(
                q.kind,
                QuestionKind::ChoiceSet {
                    choices: vec!["Yes".into(), "No".into()]
                }
            );
        }
    }

    #[test]
    fn scale_decodes_bounds() {
        let q = descriptor(serde_json::json!({
            "id": "q2", "kind": "scale", "lower": 1, "upper": 5,
        }))
        .into_question();
        assert_eq!(q.kind, QuestionKind::NumericScale { lower: 1, upper: 5 });
    }

    #[test]
    fn unknown_kind_decodes_as_unsupported() {
        let q = descriptor(serde_json::json!({
            "id": "q3", "kind": "free_text",
        }))
        .into_question();
        assert_eq!(
            q.kind,
            QuestionKind::Unsupported {
                type_name: "free_text".into()
            }
        );
    }

    #[test]
    fn scale_missing_bounds_decodes_as_unsupported() {
        let q = descriptor(serde_json::json!({
            "id": "q4", "kind": "scale", "lower": 1,
        }))
        .into_question();
        assert!(!q.kind.is_supported());
    }
}
