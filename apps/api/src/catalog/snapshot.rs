//! In-memory, read-only view of the reference tables.
//!
//! Scoring never touches the database: the snapshot is built once from the
//! table rows and swapped atomically on reload.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assessment::category::Category;
use crate::models::catalog::{
    CareerCategoryRow, CareerResourceRow, CareerRow, OptionRow, QuestionRow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Project,
}

impl ResourceType {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "course" => Some(ResourceType::Course),
            "project" => Some(ResourceType::Project),
            _ => None,
        }
    }
}

/// A learning resource attached to a career suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub id: i32,
    pub text: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub question_id: String,
    pub category: Category,
    pub text: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone)]
pub struct Career {
    pub career_id: String,
    pub name: String,
    pub description: String,
}

/// Table sizes, reported by health and reload endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub questions: usize,
    pub options: usize,
    pub careers: usize,
    pub mappings: usize,
    pub resources: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    questions: Vec<QuizQuestion>,
    question_categories: HashMap<String, Category>,
    careers: Vec<Career>,
    /// (career index, category) in retrieval order.
    mappings: Vec<(usize, Category)>,
    resources: HashMap<String, Vec<ResourceRef>>,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    /// Placeholder used until the first successful load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(
        question_rows: Vec<QuestionRow>,
        option_rows: Vec<OptionRow>,
        career_rows: Vec<CareerRow>,
        mapping_rows: Vec<CareerCategoryRow>,
        resource_rows: Vec<CareerResourceRow>,
    ) -> Self {
        let mut questions = Vec::with_capacity(question_rows.len());
        let mut question_categories = HashMap::with_capacity(question_rows.len());
        for row in question_rows {
            let category = match row.category.parse::<Category>() {
                Ok(c) => c,
                Err(e) => {
                    warn!("Skipping question {}: {e}", row.question_id);
                    continue;
                }
            };
            question_categories.insert(row.question_id.clone(), category);
            questions.push(QuizQuestion {
                question_id: row.question_id,
                category,
                text: row.question_text,
                options: Vec::new(),
            });
        }

        let question_slots: HashMap<String, usize> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.question_id.clone(), i))
            .collect();
        let mut option_rows = option_rows;
        option_rows.sort_by_key(|o| o.options_id);
        for row in option_rows {
            match question_slots.get(&row.question_id) {
                Some(&slot) => questions[slot].options.push(QuizOption {
                    id: row.options_id,
                    text: row.option_text,
                    score: row.score,
                }),
                None => warn!(
                    "Skipping option {} for unknown question {}",
                    row.options_id, row.question_id
                ),
            }
        }

        let mut careers = Vec::with_capacity(career_rows.len());
        let mut career_index: HashMap<String, usize> = HashMap::with_capacity(career_rows.len());
        for row in career_rows {
            if career_index.contains_key(&row.career_id) {
                warn!("Skipping duplicate career {}", row.career_id);
                continue;
            }
            career_index.insert(row.career_id.clone(), careers.len());
            careers.push(Career {
                career_id: row.career_id,
                name: row.name,
                description: row.description,
            });
        }

        let mappings = mapping_rows
            .into_iter()
            .filter_map(|row| {
                let Some(&idx) = career_index.get(&row.career_id) else {
                    warn!("Skipping mapping for unknown career {}", row.career_id);
                    return None;
                };
                match row.category.parse::<Category>() {
                    Ok(category) => Some((idx, category)),
                    Err(e) => {
                        warn!("Skipping mapping for career {}: {e}", row.career_id);
                        None
                    }
                }
            })
            .collect();

        let mut resources: HashMap<String, Vec<ResourceRef>> = HashMap::new();
        for row in resource_rows {
            let Some(resource_type) = ResourceType::parse(&row.resource_type) else {
                warn!(
                    "Skipping resource '{}' with unknown type '{}'",
                    row.resource_name, row.resource_type
                );
                continue;
            };
            resources.entry(row.career_id).or_default().push(ResourceRef {
                resource_type,
                name: row.resource_name,
            });
        }
        for list in resources.values_mut() {
            list.sort_by(|a, b| {
                a.resource_type
                    .cmp(&b.resource_type)
                    .then_with(|| a.name.cmp(&b.name))
            });
        }

        Self {
            questions,
            question_categories,
            careers,
            mappings,
            resources,
            loaded_at: Some(Utc::now()),
        }
    }

    /// True once built from database rows, even if the tables were empty.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn question_category(&self, question_id: &str) -> Option<Category> {
        self.question_categories.get(question_id).copied()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Mapping rows whose category is in `categories`, in retrieval order.
    pub fn mappings_in<'a>(
        &'a self,
        categories: &'a HashSet<Category>,
    ) -> impl Iterator<Item = (&'a Career, Category)> + 'a {
        self.mappings
            .iter()
            .filter(move |(_, c)| categories.contains(c))
            .map(move |&(idx, c)| (&self.careers[idx], c))
    }

    /// Resources of a career ordered by (type, name).
    pub fn resources_for(&self, career_id: &str) -> &[ResourceRef] {
        self.resources
            .get(career_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            questions: self.questions.len(),
            options: self.questions.iter().map(|q| q.options.len()).sum(),
            careers: self.careers.len(),
            mappings: self.mappings.len(),
            resources: self.resources.values().map(Vec::len).sum(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Fixture catalog shared by unit and router tests.
#[cfg(test)]
pub mod fixtures {
    use super::*;

    fn question(id: &str, category: &str) -> QuestionRow {
        QuestionRow {
            question_id: id.to_string(),
            category: category.to_string(),
            question_text: format!("Question {id}"),
        }
    }

    fn career(id: &str, name: &str) -> CareerRow {
        CareerRow {
            career_id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
        }
    }

    fn mapping(career_id: &str, category: &str) -> CareerCategoryRow {
        CareerCategoryRow {
            career_id: career_id.to_string(),
            category: category.to_string(),
        }
    }

    fn resource(career_id: &str, kind: &str, name: &str) -> CareerResourceRow {
        CareerResourceRow {
            career_id: career_id.to_string(),
            resource_type: kind.to_string(),
            resource_name: name.to_string(),
        }
    }

    /// Five questions per category (ids like `LR1`..`LR5`), four careers.
    pub fn sample_catalog() -> CatalogSnapshot {
        let prefixes = [
            ("LR", "Logical Reasoning"),
            ("CR", "Creativity"),
            ("TK", "Technical Knowledge"),
            ("CS", "Communication Skills"),
            ("TM", "Time Management"),
            ("PS", "Problem Solving"),
        ];
        let mut questions = Vec::new();
        let mut options = Vec::new();
        let mut option_id = 1;
        for (prefix, category) in prefixes {
            for n in 1..=5 {
                let qid = format!("{prefix}{n}");
                questions.push(question(&qid, category));
                for score in 0..=3 {
                    options.push(OptionRow {
                        options_id: option_id,
                        question_id: qid.clone(),
                        option_text: format!("Option worth {score}"),
                        score,
                    });
                    option_id += 1;
                }
            }
        }

        CatalogSnapshot::from_rows(
            questions,
            options,
            vec![
                career("C1", "Software Engineer"),
                career("C2", "Data Scientist"),
                career("C3", "UX Designer"),
                career("C4", "Project Manager"),
            ],
            vec![
                mapping("C1", "Technical Knowledge"),
                mapping("C2", "Logical Reasoning"),
                mapping("C2", "Technical Knowledge"),
                mapping("C3", "Creativity"),
                mapping("C4", "Time Management"),
                mapping("C4", "Communication Skills"),
                mapping("C1", "Problem Solving"),
            ],
            vec![
                resource("C2", "project", "Kaggle Titanic"),
                resource("C2", "course", "Statistics 101"),
                resource("C2", "course", "Intro to ML"),
                resource("C1", "course", "Rust Fundamentals"),
                resource("C3", "project", "Redesign a landing page"),
            ],
        )
    }
}
