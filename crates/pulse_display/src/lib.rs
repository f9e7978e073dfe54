pub mod recommendation;
pub mod table;
pub mod title;

pub use recommendation::{RecommendationCard, RecommendationList};
pub use table::ClientTable;
pub use title::{Category, TitleFormat};
