use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub question_id: String,
    pub category: String,
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OptionRow {
    pub options_id: i32,
    pub question_id: String,
    pub option_text: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRow {
    pub career_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerCategoryRow {
    pub career_id: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerResourceRow {
    pub career_id: String,
    pub resource_type: String,
    pub resource_name: String,
}
