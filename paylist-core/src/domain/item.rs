//! Uniform list item shared by every source

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Zero-argument action bound to one row
pub type SelectAction = Arc<dyn Fn() + Send + Sync>;

/// Caller-supplied selection for one native record type
///
/// Adapters bind it to a single record when they build the [`ListItem`],
/// so the list never needs to know which record type it is showing.
pub type Select<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Presentation record every source normalizes into
///
/// Immutable once built. Cloning shares the same bound action.
#[derive(Clone)]
pub struct ListItem {
    title: String,
    subtitle: String,
    on_select: SelectAction,
}

impl ListItem {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        on_select: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            on_select: Arc::new(on_select),
        }
    }

    /// Build an item whose action calls `select` with its own copy of `record`
    pub fn bound<R>(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        record: R,
        select: &Select<R>,
    ) -> Self
    where
        R: Send + Sync + 'static,
    {
        let select = Arc::clone(select);
        Self::new(title, subtitle, move || select(&record))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Run the row's selection action
    pub fn select(&self) {
        (self.on_select)()
    }
}

impl fmt::Debug for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListItem")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .finish_non_exhaustive()
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ListItem", 2)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("subtitle", &self.subtitle)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_bound_item_selects_its_own_record() {
        let picked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&picked);
        let select: Select<u32> = Arc::new(move |n: &u32| sink.lock().unwrap().push(*n));

        let first = ListItem::bound("one", "", 1u32, &select);
        let second = ListItem::bound("two", "", 2u32, &select);

        second.select();
        first.select();
        second.clone().select();

        assert_eq!(*picked.lock().unwrap(), vec![2, 1, 2]);
    }

    #[test]
    fn test_serializes_title_and_subtitle_only() {
        let item = ListItem::new("Alice", "+1 555 0100", || {});
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Alice", "subtitle": "+1 555 0100"}));
    }

    #[test]
    fn test_debug_omits_action() {
        let item = ListItem::new("Alice", "+1 555 0100", || {});
        let debug = format!("{:?}", item);
        assert!(debug.contains("Alice"));
        assert!(debug.contains(".."));
    }
}
