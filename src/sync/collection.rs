//! Caller-owned record collections with id-based reconciliation
//!
//! The collection holds the last-known-good snapshot of one resource. After
//! every successful mutation the caller applies the server's authoritative
//! response here; on failure nothing is applied, so the catalog engine keeps
//! operating on the previous snapshot.

use uuid::Uuid;

use crate::core::record::Record;

/// An ordered, id-unique collection of records for one resource.
///
/// Order is load order: `replace_all` adopts the server's ordering,
/// `apply_created` appends, updates replace in place and deletes close the
/// gap. The engine consumes [`Collection::snapshot`] clones, so the
/// collection itself is never mutated by filtering or sorting.
#[derive(Debug, Clone, Default)]
pub struct Collection<R: Record> {
    items: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// An empty collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adopt a freshly loaded snapshot, discarding the previous one
    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
    }

    /// Reconcile a create response.
    ///
    /// Appends the record; if the id is somehow already present the stored
    /// record is replaced in place instead, so ids stay unique.
    pub fn apply_created(&mut self, record: R) {
        match self.position(&record.id()) {
            Some(index) => self.items[index] = record,
            None => self.items.push(record),
        }
    }

    /// Reconcile an update response, replacing the stored record by id.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn apply_updated(&mut self, record: R) -> bool {
        match self.position(&record.id()) {
            Some(index) => {
                self.items[index] = record;
                true
            }
            None => {
                tracing::debug!(
                    resource = R::resource_name(),
                    id = %record.id(),
                    "update response for a record not in the collection"
                );
                false
            }
        }
    }

    /// Reconcile a delete response, removing the record by id.
    ///
    /// Returns `false` when the id is unknown. Remaining records keep
    /// their relative order.
    pub fn apply_deleted(&mut self, id: &Uuid) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => {
                tracing::debug!(
                    resource = R::resource_name(),
                    id = %id,
                    "delete response for a record not in the collection"
                );
                false
            }
        }
    }

    /// Borrow the records in collection order
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Clone the records for a pure engine pass
    pub fn snapshot(&self) -> Vec<R> {
        self.items.clone()
    }

    /// Look up a record by id
    pub fn get(&self, id: &Uuid) -> Option<&R> {
        self.position(id).map(|index| &self.items[index])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }
}

impl<R: Record> From<Vec<R>> for Collection<R> {
    fn from(items: Vec<R>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Widget {
        fn new(name: &str) -> Self {
            let now = Utc::now();
            Self {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created_at: now,
                updated_at: now,
            }
        }
    }

    impl Record for Widget {
        fn resource_name() -> &'static str {
            "widgets"
        }

        fn resource_name_singular() -> &'static str {
            "widget"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }
    }

    fn names(collection: &Collection<Widget>) -> Vec<&str> {
        collection.items().iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_replace_all_adopts_server_order() {
        let mut collection = Collection::new();
        collection.replace_all(vec![Widget::new("a"), Widget::new("b")]);
        assert_eq!(names(&collection), vec!["a", "b"]);

        collection.replace_all(vec![Widget::new("c")]);
        assert_eq!(names(&collection), vec!["c"]);
    }

    #[test]
    fn test_apply_created_appends() {
        let mut collection = Collection::from(vec![Widget::new("a")]);
        collection.apply_created(Widget::new("b"));

        assert_eq!(names(&collection), vec!["a", "b"]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_apply_created_with_known_id_replaces_in_place() {
        let first = Widget::new("a");
        let id = first.id;
        let mut collection = Collection::from(vec![first, Widget::new("b")]);

        let mut echo = collection.get(&id).expect("record should exist").clone();
        echo.name = "a2".to_string();
        collection.apply_created(echo);

        assert_eq!(names(&collection), vec!["a2", "b"]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_apply_updated_replaces_by_id() {
        let widget = Widget::new("before");
        let id = widget.id;
        let mut collection = Collection::from(vec![Widget::new("x"), widget, Widget::new("y")]);

        let mut updated = collection.get(&id).expect("record should exist").clone();
        updated.name = "after".to_string();

        assert!(collection.apply_updated(updated));
        assert_eq!(names(&collection), vec!["x", "after", "y"]);
    }

    #[test]
    fn test_apply_updated_unknown_id_changes_nothing() {
        let mut collection = Collection::from(vec![Widget::new("a")]);
        let before = collection.snapshot();

        assert!(!collection.apply_updated(Widget::new("stranger")));
        assert_eq!(collection.snapshot(), before);
    }

    #[test]
    fn test_apply_deleted_preserves_order_of_the_rest() {
        let middle = Widget::new("b");
        let id = middle.id;
        let mut collection = Collection::from(vec![Widget::new("a"), middle, Widget::new("c")]);

        assert!(collection.apply_deleted(&id));
        assert_eq!(names(&collection), vec!["a", "c"]);
        assert!(!collection.apply_deleted(&id));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut collection = Collection::from(vec![Widget::new("a")]);
        let snapshot = collection.snapshot();

        collection.apply_created(Widget::new("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::<Widget>::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get(&Uuid::new_v4()).is_none());
    }
}
