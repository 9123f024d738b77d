//! Survey, question and result types shared with the host's REST API.
//!
//! Accounts and organizations are referenced by id only; the host does not
//! authenticate.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

/// Input control a question is answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    Number,
    Checkbox,
    Percentage,
    Slide,
    RatioSelect,
    MenuSelect,
    MultiMenuSelect,
}

impl QuestionType {
    /// Whether respondents pick from a predefined answer list.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::RatioSelect | Self::MenuSelect | Self::MultiMenuSelect)
    }
}

/// Predefined option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i32,
}

/// Constraint key attached to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    MinValue,
    MaxValue,
    MinSelect,
    MaxSelect,
    MinLabel,
    MaxLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub value: String,
}

/// Question body as submitted by clients, without a server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub header: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

impl QuestionDraft {
    /// Check the draft is storable. Returns the reason when it is not.
    pub fn validate(&self) -> Result<(), String> {
        if self.header.trim().is_empty() {
            return Err("question header must not be empty".into());
        }
        let answer_count = self.answers.as_ref().map_or(0, Vec::len);
        if self.kind.is_choice() && answer_count == 0 {
            return Err(format!("{:?} question needs at least one answer", self.kind));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub header: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

impl Question {
    /// Materialize a draft under `id`, with answers in display order.
    pub fn from_draft(id: i64, draft: QuestionDraft) -> Self {
        let mut answers = draft.answers;
        if let Some(list) = answers.as_mut() {
            list.sort_by_key(|a| a.order);
        }
        Self {
            id,
            kind: draft.kind,
            header: draft.header.trim().to_owned(),
            description: draft.description,
            attributes: draft.attributes,
            answers,
        }
    }

    /// First attribute value of `kind`, if set.
    pub fn attribute(&self, kind: AttributeType) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.value.as_str())
    }
}

/// A respondent's answer: a predefined option, a number, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(Answer),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultAnswer {
    pub question_id: i64,
    pub answer: AnswerValue,
}

/// One submitted response to a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub id: i64,
    pub survey_id: i64,
    pub ip: IpAddr,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_date: OffsetDateTime,
    pub answers: Vec<ResultAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
}

impl Survey {
    /// Whether responses are accepted at `now`. Open bounds are unlimited;
    /// the end date is exclusive.
    pub fn is_open_at(&self, now: OffsetDateTime) -> bool {
        self.start_date.is_none_or(|start| start <= now) && self.end_date.is_none_or(|end| now < end)
    }
}
