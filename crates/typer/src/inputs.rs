use crate::model::{InputFieldKind, TypedInputField};
use graphql_schema_index::SchemaIndex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Lazily expands named input-object types into ordered typed field lists.
///
/// Expansion is memoized per type name for the lifetime of one pass: the
/// first reference to a type builds its list, every later reference
/// (including from other variables) shares the cached allocation. A type
/// name is reserved in `in_progress` while its fields are being enumerated;
/// a reference hit during that window is a self- or mutually-recursive
/// input type, and contributes an empty child list at the point of
/// recursion so the expansion terminates. References outside the cycle see
/// the completed entry.
#[derive(Debug)]
pub(crate) struct InputFieldResolver<'a> {
    index: &'a SchemaIndex,
    cache: HashMap<Arc<str>, Arc<Vec<TypedInputField>>>,
    in_progress: HashSet<Arc<str>>,
}

impl<'a> InputFieldResolver<'a> {
    pub(crate) fn new(index: &'a SchemaIndex) -> Self {
        Self {
            index,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    pub(crate) fn resolve(&mut self, type_name: &Arc<str>) -> Arc<Vec<TypedInputField>> {
        if let Some(cached) = self.cache.get(type_name) {
            return Arc::clone(cached);
        }
        if !self.in_progress.insert(type_name.clone()) {
            return Arc::new(Vec::new());
        }

        let index = self.index;
        let mut fields = Vec::new();
        if let Some(def) = index.type_def(type_name) {
            for field in &def.fields {
                let kind = InputFieldKind::classify(index, &field.type_ref.name);
                let children = match &kind {
                    InputFieldKind::InputObject(inner) => self.resolve(inner),
                    _ => Arc::new(Vec::new()),
                };
                fields.push(TypedInputField {
                    name: field.name.clone(),
                    parent_type: Some(type_name.clone()),
                    is_non_null: field.type_ref.is_non_null,
                    is_list: field.type_ref.is_list,
                    kind,
                    default_value: field.default_value.clone(),
                    fields: children,
                    name_range: None,
                });
            }
        }

        self.in_progress.remove(type_name);
        let resolved = Arc::new(fields);
        self.cache.insert(type_name.clone(), Arc::clone(&resolved));
        resolved
    }
}
