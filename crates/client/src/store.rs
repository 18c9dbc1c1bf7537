//! The application state store.
//!
//! An explicit state object owned by the composition root: four collection
//! mirrors, UI state (selection, tag filter), and the operations that keep
//! the mirrors synchronized with the server. Mutations are two-phase:
//! issue the remote call, and on success apply a pure reducer to the
//! previous snapshot; on failure the snapshot is kept and the collection's
//! error flag carries a display string. No operation here ever returns an
//! error to the caller.

use std::collections::HashSet;

use uuid::Uuid;

use pinmap_core::filter::filter_pins;
use pinmap_core::model::{Pin, RegionBoundary, TagDefinition};
use pinmap_core::settings::MapSettings;

use crate::api::{ApiClient, PinDraft, PinUpdate, TagDraft};
use crate::collection::{sync_collection, Collection};
use crate::persist::SnapshotStore;

/// Snapshot file names, one per collection.
const SNAP_PINS: &str = "pins";
const SNAP_TAGS: &str = "tags";
const SNAP_BOUNDARY: &str = "boundary";
const SNAP_SETTINGS: &str = "settings";

/// Client-side application state.
pub struct Store {
    api: ApiClient,
    snapshots: Option<SnapshotStore>,

    pub pins: Collection<Vec<Pin>>,
    pub tags: Collection<Vec<TagDefinition>>,
    /// `None` means no boundary is set, which is a valid state.
    pub boundary: Collection<Option<RegionBoundary>>,
    /// `None` means no settings stored; the defaults apply.
    pub settings: Collection<Option<MapSettings>>,

    pub selected_pin_id: Option<Uuid>,
    pub tag_filter: HashSet<String>,
}

impl Store {
    /// A store with empty mirrors and no snapshot persistence.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshots: None,
            pins: Collection::default(),
            tags: Collection::default(),
            boundary: Collection::default(),
            settings: Collection::default(),
            selected_pin_id: None,
            tag_filter: HashSet::new(),
        }
    }

    /// A store that restores its mirrors from the given snapshot directory
    /// and rewrites them on every change.
    pub fn with_snapshots(api: ApiClient, snapshots: SnapshotStore) -> Self {
        let mut store = Self::new(api);
        if let Some(pins) = snapshots.load(SNAP_PINS) {
            store.pins.value = pins;
        }
        if let Some(tags) = snapshots.load(SNAP_TAGS) {
            store.tags.value = tags;
        }
        if let Some(boundary) = snapshots.load(SNAP_BOUNDARY) {
            store.boundary.value = boundary;
        }
        if let Some(settings) = snapshots.load(SNAP_SETTINGS) {
            store.settings.value = settings;
        }
        store.snapshots = Some(snapshots);
        store
    }

    // -----------------------------------------------------------------------
    // Loads
    // -----------------------------------------------------------------------

    pub async fn load_pins(&mut self) {
        let Self { api, pins, .. } = self;
        sync_collection(pins, api.list_pins(None), |v, items| *v = items).await;
        self.save(SNAP_PINS);
    }

    pub async fn load_tags(&mut self) {
        let Self { api, tags, .. } = self;
        sync_collection(tags, api.list_tags(), |v, items| *v = items).await;
        self.save(SNAP_TAGS);
    }

    pub async fn load_boundary(&mut self) {
        let Self { api, boundary, .. } = self;
        sync_collection(boundary, api.get_boundary(), |v, b| *v = b).await;
        self.save(SNAP_BOUNDARY);
    }

    pub async fn load_settings(&mut self) {
        let Self { api, settings, .. } = self;
        sync_collection(settings, api.get_settings(), |v, s| *v = s).await;
        self.save(SNAP_SETTINGS);
    }

    /// Refresh all four collections concurrently. Completes regardless of
    /// individual failures; those are visible via each collection's error
    /// flag. A partial refresh is accepted when some loads fail.
    pub async fn load_all(&mut self) {
        let Self {
            api,
            pins,
            tags,
            boundary,
            settings,
            ..
        } = self;
        tokio::join!(
            sync_collection(pins, api.list_pins(None), |v, items| *v = items),
            sync_collection(tags, api.list_tags(), |v, items| *v = items),
            sync_collection(boundary, api.get_boundary(), |v, b| *v = b),
            sync_collection(settings, api.get_settings(), |v, s| *v = s),
        );
        self.save(SNAP_PINS);
        self.save(SNAP_TAGS);
        self.save(SNAP_BOUNDARY);
        self.save(SNAP_SETTINGS);
    }

    // -----------------------------------------------------------------------
    // Pin mutations
    // -----------------------------------------------------------------------

    pub async fn add_pin(&mut self, draft: PinDraft) {
        let Self { api, pins, .. } = self;
        sync_collection(pins, api.create_pin(&draft), |v, pin| v.push(pin)).await;
        self.save(SNAP_PINS);
    }

    pub async fn update_pin(&mut self, id: Uuid, update: PinUpdate) {
        let Self { api, pins, .. } = self;
        sync_collection(pins, api.update_pin(id, &update), |v, pin| {
            if let Some(slot) = v.iter_mut().find(|p| p.id == id) {
                *slot = pin;
            }
        })
        .await;
        self.save(SNAP_PINS);
    }

    pub async fn delete_pin(&mut self, id: Uuid) {
        let Self { api, pins, .. } = self;
        sync_collection(pins, api.delete_pin(id), |v, ()| {
            v.retain(|p| p.id != id);
        })
        .await;

        // Deleting the selected pin clears the selection.
        if self.pins.error.is_none() && self.selected_pin_id == Some(id) {
            self.selected_pin_id = None;
        }
        self.save(SNAP_PINS);
    }

    // -----------------------------------------------------------------------
    // Tag mutations
    // -----------------------------------------------------------------------

    pub async fn add_tag(&mut self, draft: TagDraft) {
        let Self { api, tags, .. } = self;
        sync_collection(tags, api.create_tag(&draft), |v, tag| v.push(tag)).await;
        self.save(SNAP_TAGS);
    }

    pub async fn update_tag(&mut self, id: Uuid, name: Option<&str>, color: Option<&str>) {
        let Self { api, tags, .. } = self;
        sync_collection(tags, api.update_tag(id, name, color), |v, tag| {
            if let Some(slot) = v.iter_mut().find(|t| t.id == id) {
                *slot = tag;
            }
        })
        .await;
        self.save(SNAP_TAGS);
    }

    pub async fn delete_tag(&mut self, id: Uuid) {
        let Self { api, tags, .. } = self;
        sync_collection(tags, api.delete_tag(id), |v, ()| {
            v.retain(|t| t.id != id);
        })
        .await;
        self.save(SNAP_TAGS);
    }

    // -----------------------------------------------------------------------
    // Boundary and settings mutations
    // -----------------------------------------------------------------------

    pub async fn set_boundary(&mut self, boundary: RegionBoundary) {
        let Self {
            api,
            boundary: mirror,
            ..
        } = self;
        sync_collection(mirror, api.set_boundary(&boundary), |v, b| *v = Some(b)).await;
        self.save(SNAP_BOUNDARY);
    }

    pub async fn delete_boundary(&mut self) {
        let Self {
            api,
            boundary: mirror,
            ..
        } = self;
        sync_collection(mirror, api.delete_boundary(), |v, ()| *v = None).await;
        self.save(SNAP_BOUNDARY);
    }

    pub async fn update_settings(&mut self, settings: MapSettings) {
        let Self {
            api,
            settings: mirror,
            ..
        } = self;
        sync_collection(mirror, api.update_settings(&settings), |v, s| *v = Some(s)).await;
        self.save(SNAP_SETTINGS);
    }

    // -----------------------------------------------------------------------
    // UI state
    // -----------------------------------------------------------------------

    pub fn select_pin(&mut self, id: Option<Uuid>) {
        self.selected_pin_id = id;
    }

    pub fn set_tag_filter(&mut self, filter: HashSet<String>) {
        self.tag_filter = filter;
    }

    pub fn toggle_tag_filter(&mut self, tag: &str) {
        if !self.tag_filter.remove(tag) {
            self.tag_filter.insert(tag.to_string());
        }
    }

    // -----------------------------------------------------------------------
    // Derived projections (pure reads)
    // -----------------------------------------------------------------------

    /// Pins matching the active tag filter; everything when the filter is
    /// empty.
    pub fn filtered_pins(&self) -> Vec<&Pin> {
        filter_pins(&self.pins.value, &self.tag_filter)
    }

    /// The selected pin, or `None` when nothing is selected or the id no
    /// longer matches.
    pub fn selected_pin(&self) -> Option<&Pin> {
        self.selected_pin_id
            .and_then(|id| self.pins.value.iter().find(|p| p.id == id))
    }

    /// Stored settings, or the hard-coded defaults while none exist.
    pub fn effective_settings(&self) -> MapSettings {
        self.settings.value.clone().unwrap_or_default()
    }

    /// All currently-set collection errors, for an aggregate banner. The
    /// retry action is re-running [`Store::load_all`].
    pub fn errors(&self) -> Vec<&str> {
        [
            self.pins.error.as_deref(),
            self.tags.error.as_deref(),
            self.boundary.error.as_deref(),
            self.settings.error.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn save(&self, name: &str) {
        let Some(snapshots) = &self.snapshots else {
            return;
        };
        match name {
            SNAP_PINS => snapshots.save(SNAP_PINS, &self.pins.value),
            SNAP_TAGS => snapshots.save(SNAP_TAGS, &self.tags.value),
            SNAP_BOUNDARY => snapshots.save(SNAP_BOUNDARY, &self.boundary.value),
            SNAP_SETTINGS => snapshots.save(SNAP_SETTINGS, &self.settings.value),
            _ => unreachable!("unknown snapshot name: {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmap_core::types::Timestamp;

    fn pin(title: &str, main_tag: &str, supporting: &[&str]) -> Pin {
        let now: Timestamp = chrono::Utc::now();
        Pin {
            id: Uuid::new_v4(),
            title: title.into(),
            position: [52.1, 19.0],
            main_tag: main_tag.into(),
            supporting_tags: supporting.iter().map(|s| s.to_string()).collect(),
            content: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn store_with_pins(pins: Vec<Pin>) -> Store {
        let mut store = Store::new(ApiClient::new("http://localhost:0"));
        store.pins.value = pins;
        store
    }

    #[test]
    fn empty_filter_yields_every_pin() {
        let store = store_with_pins(vec![pin("a", "health", &[]), pin("b", "food", &[])]);
        assert_eq!(store.filtered_pins().len(), 2);
    }

    #[test]
    fn filter_matches_main_and_supporting_tags() {
        let mut store = store_with_pins(vec![
            pin("clinic", "health", &[]),
            pin("library", "education", &["health"]),
            pin("cafe", "food", &[]),
        ]);
        store.toggle_tag_filter("health");

        let titles: Vec<_> = store
            .filtered_pins()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["clinic", "library"]);
    }

    #[test]
    fn toggling_a_filter_twice_removes_it() {
        let mut store = store_with_pins(vec![pin("a", "health", &[])]);
        store.toggle_tag_filter("food");
        store.toggle_tag_filter("food");
        assert!(store.tag_filter.is_empty());
    }

    #[test]
    fn selected_pin_is_none_without_selection_or_match() {
        let pins = vec![pin("a", "health", &[])];
        let mut store = store_with_pins(pins);
        assert!(store.selected_pin().is_none());

        store.select_pin(Some(Uuid::new_v4()));
        assert!(store.selected_pin().is_none(), "stale id matches nothing");

        let id = store.pins.value[0].id;
        store.select_pin(Some(id));
        assert_eq!(store.selected_pin().unwrap().title, "a");
    }

    #[test]
    fn effective_settings_fall_back_to_defaults() {
        let store = store_with_pins(vec![]);
        assert_eq!(store.effective_settings(), MapSettings::default());
    }

    #[test]
    fn errors_aggregates_only_set_flags() {
        let mut store = store_with_pins(vec![]);
        store.boundary.error = Some("server returned 500: boom".into());
        store.tags.error = Some("transport error: refused".into());

        let errors = store.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"server returned 500: boom"));
    }
}
