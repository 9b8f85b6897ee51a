use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinds::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintError {
    #[error("Unknown {category} type '{kind}'")]
    UnknownCategoryType { category: Category, kind: String },
    #[error("{category} footprint of type '{kind}' does not fit in a decimal")]
    Overflow { category: Category, kind: String },
    #[error("Family size must be at least 1 (got {family_size})")]
    DivisionByZero { family_size: i32 },
}
