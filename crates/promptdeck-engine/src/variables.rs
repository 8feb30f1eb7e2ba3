//! Variable registry and reconciliation
//!
//! The registry holds one entry per variable referenced by a template.
//! Membership is derived from the section bodies; editors only ever change
//! the metadata of entries that are already present.

use crate::placeholder::extract_placeholders;
use crate::section::PromptSection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Type assigned to a variable the first time it is seen
pub const DEFAULT_VARIABLE_TYPE: &str = "string";

/// A template variable and its editor-facing metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name as it appears inside `{{ }}`
    pub name: String,
    /// Declared value type, free-form ("string", "number", ...)
    #[serde(rename = "type")]
    pub var_type: String,
}

impl Variable {
    /// Create a new variable with the default type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_type: DEFAULT_VARIABLE_TYPE.to_string(),
        }
    }

    /// Set the value type
    pub fn with_type(mut self, var_type: impl Into<String>) -> Self {
        self.var_type = var_type.into();
        self
    }
}

/// Ordered set of variables for one template
///
/// Order is first appearance in the template, reading sections top to bottom.
/// Serializes as a plain list of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
}

impl VariableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from explicit variables, keeping the first entry
    /// when a name repeats
    pub fn from_variables(variables: Vec<Variable>) -> Self {
        let mut seen = HashSet::new();
        let deduped = variables
            .into_iter()
            .filter(|v| seen.insert(v.name.clone()))
            .collect();
        Self { variables: deduped }
    }

    /// Rebuild the registry from the current section bodies.
    ///
    /// Every referenced name gets exactly one entry, ordered by first
    /// appearance. Names already in `previous` keep their metadata, new names
    /// start with the default type, and names no longer referenced are
    /// dropped.
    pub fn reconcile(sections: &[PromptSection], previous: &VariableRegistry) -> VariableRegistry {
        let mut seen = HashSet::new();
        let mut variables = Vec::new();

        for section in sections {
            for name in extract_placeholders(&section.body) {
                if !seen.insert(name.clone()) {
                    continue;
                }
                let variable = match previous.get(&name) {
                    Some(existing) => existing.clone(),
                    None => Variable::new(name),
                };
                variables.push(variable);
            }
        }

        let carried = variables
            .iter()
            .filter(|v| previous.contains(&v.name))
            .count();
        debug!(
            "Reconciled variable registry: {} carried, {} added, {} dropped",
            carried,
            variables.len() - carried,
            previous.len() - carried
        );

        VariableRegistry { variables }
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Update the type of an existing variable.
    ///
    /// Returns `false` when the name is not registered; the registry never
    /// grows here, membership comes from [`VariableRegistry::reconcile`].
    pub fn set_type(&mut self, name: &str, var_type: impl Into<String>) -> bool {
        match self.variables.iter_mut().find(|v| v.name == name) {
            Some(variable) => {
                variable.var_type = var_type.into();
                true
            }
            None => false,
        }
    }

    /// Get variable names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Get the variables in registry order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Iterate over the variables in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Number of registered variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(bodies: &[&str]) -> Vec<PromptSection> {
        bodies.iter().map(|b| PromptSection::user(*b)).collect()
    }

    #[test]
    fn test_reconcile_from_empty() {
        let sections = draft(&["Hello {{name}}, welcome to {{place}}"]);
        let registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());

        assert_eq!(registry.names(), vec!["name", "place"]);
        assert!(registry.iter().all(|v| v.var_type == DEFAULT_VARIABLE_TYPE));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let sections = draft(&["{{a}} {{b}} {{a}}"]);
        let once = VariableRegistry::reconcile(&sections, &VariableRegistry::new());
        let twice = VariableRegistry::reconcile(&sections, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconcile_preserves_metadata() {
        let sections = draft(&["{{count}} items for {{name}}"]);
        let mut registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());
        assert!(registry.set_type("count", "number"));

        let edited = draft(&["{{name}} ordered {{count}} items, right {{name}}?"]);
        let registry = VariableRegistry::reconcile(&edited, &registry);

        assert_eq!(registry.names(), vec!["name", "count"]);
        assert_eq!(registry.get("count").unwrap().var_type, "number");
        assert_eq!(registry.get("name").unwrap().var_type, DEFAULT_VARIABLE_TYPE);
    }

    #[test]
    fn test_reconcile_drops_unreferenced() {
        let sections = draft(&["{{a}} {{b}}"]);
        let registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());

        let edited = draft(&["{{b}} only"]);
        let registry = VariableRegistry::reconcile(&edited, &registry);

        assert_eq!(registry.names(), vec!["b"]);
        assert!(!registry.contains("a"));
    }

    #[test]
    fn test_reconcile_order_spans_sections() {
        let sections = vec![
            PromptSection::system("You help {{name}} with {{task}}."),
            PromptSection::user("{{task}} details: {{details}}"),
        ];
        let registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());
        assert_eq!(registry.names(), vec!["name", "task", "details"]);
    }

    #[test]
    fn test_reconcile_empty_sections() {
        let mut previous = VariableRegistry::reconcile(
            &draft(&["{{leftover}}"]),
            &VariableRegistry::new(),
        );
        previous.set_type("leftover", "number");

        let registry = VariableRegistry::reconcile(&[], &previous);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reconcile_duplicated_previous_first_entry_wins() {
        // Transparent deserialization can admit duplicate names from corrupted storage.
        let stored = serde_json::json!([
            { "name": "x", "type": "number" },
            { "name": "x", "type": "json" },
            { "name": "y", "type": "date" }
        ]);
        let previous: VariableRegistry = serde_json::from_value(stored).unwrap();
        assert_eq!(previous.len(), 3);

        let registry = VariableRegistry::reconcile(&draft(&["{{x}} and {{y}}"]), &previous);

        assert_eq!(
            registry.variables(),
            &[
                Variable::new("x").with_type("number"),
                Variable::new("y").with_type("date"),
            ]
        );
    }

    #[test]
    fn test_set_type_unknown_name() {
        let mut registry = VariableRegistry::new();
        assert!(!registry.set_type("ghost", "number"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_variables_first_entry_wins() {
        let registry = VariableRegistry::from_variables(vec![
            Variable::new("a").with_type("number"),
            Variable::new("b"),
            Variable::new("a").with_type("json"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().var_type, "number");
    }

    #[test]
    fn test_variable_builder() {
        let var = Variable::new("topic");
        assert_eq!(var.var_type, DEFAULT_VARIABLE_TYPE);

        let var = Variable::new("count").with_type("number");
        assert_eq!(var.var_type, "number");
    }

    #[test]
    fn test_registry_serializes_as_list() {
        let registry = VariableRegistry::from_variables(vec![
            Variable::new("name"),
            Variable::new("count").with_type("number"),
        ]);

        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(
            json,
            "[{\"name\":\"name\",\"type\":\"string\"},{\"name\":\"count\",\"type\":\"number\"}]"
        );

        let back: VariableRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
    }
}
