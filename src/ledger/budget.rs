use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Mapping of spending category to monetary limit.
///
/// Keys are compared exactly as entered: `"Food"` and `"food"` are distinct
/// budgets, as are `"Food"` and `"Food "`. Serialized as a bare JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetRegistry {
    limits: HashMap<String, f64>,
}

impl BudgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limit for a category, replacing any existing value.
    /// The limit must be a strictly positive finite number.
    pub fn set_limit(
        &mut self,
        category: impl Into<String>,
        limit: f64,
    ) -> Result<(), TrackerError> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(TrackerError::invalid(
                "budget limit must be a positive number",
            ));
        }
        self.limits.insert(category.into(), limit);
        Ok(())
    }

    /// The configured limit, or `None` when no limit is set for the
    /// category. A zero limit cannot exist, but `None` is still distinct
    /// from any numeric limit for callers that branch on presence.
    pub fn limit_for(&self, category: &str) -> Option<f64> {
        self.limits.get(category).copied()
    }

    /// Full mapping. Iteration order carries no meaning.
    pub fn get_all(&self) -> &HashMap<String, f64> {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}
