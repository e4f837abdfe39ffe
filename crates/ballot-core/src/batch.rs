//! Best-effort batches.
//!
//! A batch runs independent operations one after another. A failing item is
//! recorded and the remaining items still run, so the caller always gets one
//! outcome per input, in input order.

use serde::Serialize;

/// Outcome of a single batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome<T> {
    Succeeded { label: String, value: T },
    Failed { label: String, error: String },
}

impl<T> ItemOutcome<T> {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Succeeded { label, .. } | Self::Failed { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Per-item outcomes of a best-effort batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport<T> {
    pub items: Vec<ItemOutcome<T>>,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> BatchReport<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<E: std::fmt::Display>(&mut self, label: impl Into<String>, result: Result<T, E>) {
        let label = label.into();
        self.items.push(match result {
            Ok(value) => ItemOutcome::Succeeded { label, value },
            Err(error) => ItemOutcome::Failed {
                label,
                error: error.to_string(),
            },
        });
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    /// Labels of the items that failed, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().filter_map(|item| match item {
            ItemOutcome::Failed { label, error } => Some((label.as_str(), error.as_str())),
            ItemOutcome::Succeeded { .. } => None,
        })
    }

    /// The value of the last successful item, if any.
    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.items.iter().rev().find_map(|item| match item {
            ItemOutcome::Succeeded { value, .. } => Some(value),
            ItemOutcome::Failed { .. } => None,
        })
    }
}
