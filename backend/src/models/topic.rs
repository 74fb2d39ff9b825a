//! Topic model.

use serde::{Deserialize, Serialize};

/// A topic articles are filed under, keyed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
