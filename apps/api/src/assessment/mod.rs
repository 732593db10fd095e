// Assessment scoring: quiz aggregation, keyword text scoring, blending, career ranking.
// Everything below handlers is synchronous and pure over the catalog snapshot.

pub mod blend;
pub mod category;
pub mod handlers;
pub mod lexicon;
pub mod pipeline;
pub mod quiz;
pub mod ranking;
pub mod text;
