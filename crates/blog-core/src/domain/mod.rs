//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{Post, PostDraft, PostPatch};
pub use validation::parse_date;
