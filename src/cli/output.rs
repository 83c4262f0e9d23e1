use crate::model::Store;

/// Pretty JSON for the whole store: `{"YYYY-MM-DD": [task, ...]}` in store order
pub fn store_json(store: &Store) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store)
}
