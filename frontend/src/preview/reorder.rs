use std::collections::HashSet;

use log::error;
use serde::Deserialize;

/// Pointer travel (CSS px) before a press on a row turns into a drag.
pub const ACTIVATION_DISTANCE_PX: f64 = 5.0;

const SEED: &str = include_str!("versions.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Version {
    pub id: String,
    pub label: String,
    pub filename: String,
    pub size: String,
    #[serde(default)]
    pub is_active: bool,
    pub thumbnail_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Document,
    Video,
}

impl Version {
    pub fn kind(&self) -> ContentKind {
        let ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "mp4" | "mov" | "webm" | "m4v" | "avi" => ContentKind::Video,
            _ => ContentKind::Document,
        }
    }
}

/// A finished drag: the dragged row and the row it was released over, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub source: String,
    pub destination: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VersionList {
    items: Vec<Version>,
    open_menu: Option<String>,
    failed_thumbnails: HashSet<String>,
}

impl VersionList {
    pub fn new(items: Vec<Version>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn seeded() -> Self {
        match serde_json::from_str::<Vec<Version>>(SEED) {
            Ok(items) => Self::new(items),
            Err(e) => {
                error!("Failed to parse version seed data: {}", e);
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[Version] {
        &self.items
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|v| v.id == id)
    }

    /// Moves the source row to the destination row's index. Returns false and
    /// leaves the list untouched when the drop has nowhere valid to go.
    pub fn on_drag_end(&mut self, end: &DragEnd) -> bool {
        let destination = match end.destination.as_deref() {
            Some(id) if id != end.source => id,
            _ => return false,
        };

        let (from, to) = match (self.position(&end.source), self.position(destination)) {
            (Some(from), Some(to)) => (from, to),
            _ => return false,
        };

        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        true
    }

    pub fn open_menu(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }

    pub fn toggle_menu(&mut self, id: &str) {
        if self.open_menu.as_deref() == Some(id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id.to_string());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    pub fn mark_active(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        for version in &mut self.items {
            version.is_active = version.id == id;
        }
        self.open_menu = None;
        true
    }

    /// Removes a row. The last remaining row stays, and removing the active
    /// row hands the flag to whichever row is now first.
    pub fn remove(&mut self, id: &str) -> bool {
        let index = match self.position(id) {
            Some(index) if self.items.len() > 1 => index,
            _ => return false,
        };

        let removed = self.items.remove(index);
        if removed.is_active {
            if let Some(first) = self.items.first_mut() {
                first.is_active = true;
            }
        }
        self.failed_thumbnails.remove(id);
        self.open_menu = None;
        true
    }

    /// Records a thumbnail load error. Returns true the first time only.
    pub fn thumbnail_failed(&mut self, id: &str) -> bool {
        self.failed_thumbnails.insert(id.to_string())
    }

    pub fn shows_placeholder(&self, id: &str) -> bool {
        self.failed_thumbnails.contains(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Press {
    id: String,
    x: f64,
    y: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// The press never travelled far enough to become a drag.
    Click(String),
    Drop(DragEnd),
    Nothing,
}

/// Tells a click on a row apart from a drag of that row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragGesture {
    press: Option<Press>,
    active: bool,
    over: Option<String>,
}

impl DragGesture {
    pub fn press(&mut self, id: &str, x: f64, y: f64) {
        self.press = Some(Press {
            id: id.to_string(),
            x,
            y,
        });
        self.active = false;
        self.over = None;
    }

    /// Returns true on the move that activates the drag.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        let press = match &self.press {
            Some(press) if !self.active => press,
            _ => return false,
        };

        let distance = (x - press.x).hypot(y - press.y);
        if distance > ACTIVATION_DISTANCE_PX {
            self.active = true;
            self.over = Some(press.id.clone());
            return true;
        }
        false
    }

    /// The row under the pointer changed; `None` means outside every row.
    pub fn hover(&mut self, id: Option<&str>) -> bool {
        if !self.active {
            return false;
        }
        let id = id.map(str::to_string);
        if self.over == id {
            return false;
        }
        self.over = id;
        true
    }

    pub fn release(&mut self) -> Release {
        let press = self.press.take();
        let active = std::mem::take(&mut self.active);
        let over = self.over.take();

        match press {
            Some(press) if active => Release::Drop(DragEnd {
                source: press.id,
                destination: over,
            }),
            Some(press) => Release::Click(press.id),
            None => Release::Nothing,
        }
    }

    /// Drops any press or drag without a result. Returns true if a drag was live.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.dragging().is_some();
        *self = Self::default();
        was_dragging
    }

    /// The pointer left the widget. Its release will never reach us, so the
    /// gesture ends here the same way a drop outside every row does.
    pub fn leave(&mut self) -> bool {
        self.cancel()
    }

    pub fn dragging(&self) -> Option<&str> {
        match &self.press {
            Some(press) if self.active => Some(press.id.as_str()),
            _ => None,
        }
    }

    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Lifted,
    Moved,
    Dropped(DragEnd),
    Cancelled,
    Ignored,
}

/// Keyboard reordering: lift with space or enter, pick a slot with the arrow
/// keys, drop with space or enter, escape to put it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardDrag {
    lifted: Option<String>,
    target: usize,
}

impl KeyboardDrag {
    pub fn key(&mut self, key: &str, focused_id: &str, items: &[Version]) -> KeyOutcome {
        // A key on any row other than the lifted one ends the lift.
        if self.lifted.as_deref().map_or(false, |source| source != focused_id) {
            self.cancel();
            return KeyOutcome::Cancelled;
        }

        match (key, self.lifted.take()) {
            (" " | "Enter", None) => match items.iter().position(|v| v.id == focused_id) {
                Some(index) => {
                    self.lifted = Some(focused_id.to_string());
                    self.target = index;
                    KeyOutcome::Lifted
                }
                None => KeyOutcome::Ignored,
            },
            (" " | "Enter", Some(source)) => KeyOutcome::Dropped(DragEnd {
                source,
                destination: items.get(self.target).map(|v| v.id.clone()),
            }),
            ("ArrowUp", Some(source)) => {
                self.lifted = Some(source);
                self.target = self.target.saturating_sub(1);
                KeyOutcome::Moved
            }
            ("ArrowDown", Some(source)) => {
                self.lifted = Some(source);
                if self.target + 1 < items.len() {
                    self.target += 1;
                }
                KeyOutcome::Moved
            }
            ("Escape", Some(_)) => KeyOutcome::Cancelled,
            (_, lifted) => {
                self.lifted = lifted;
                KeyOutcome::Ignored
            }
        }
    }

    /// Puts a lifted row back. Returns true if one was lifted.
    pub fn cancel(&mut self) -> bool {
        self.target = 0;
        self.lifted.take().is_some()
    }

    pub fn lifted(&self) -> Option<&str> {
        self.lifted.as_deref()
    }

    pub fn target(&self) -> Option<usize> {
        self.lifted.as_ref().map(|_| self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &VersionList) -> Vec<&str> {
        list.items().iter().map(|v| v.id.as_str()).collect()
    }

    fn drag_end(source: &str, destination: Option<&str>) -> DragEnd {
        DragEnd {
            source: source.to_string(),
            destination: destination.map(str::to_string),
        }
    }

    #[test]
    fn seed_parses_with_one_active_version() {
        let list = VersionList::seeded();
        assert_eq!(ids(&list), vec!["v4", "v3", "v2", "v1"]);
        assert_eq!(list.items().iter().filter(|v| v.is_active).count(), 1);
    }

    #[test]
    fn kind_follows_extension() {
        let list = VersionList::seeded();
        assert_eq!(list.items()[0].kind(), ContentKind::Video);
        assert_eq!(list.items()[2].kind(), ContentKind::Document);

        let mut upper = list.items()[0].clone();
        upper.filename = "CUT.MOV".to_string();
        assert_eq!(upper.kind(), ContentKind::Video);
        upper.filename = "no-extension".to_string();
        assert_eq!(upper.kind(), ContentKind::Document);
    }

    #[test]
    fn drag_down_moves_single_row() {
        let mut list = VersionList::seeded();
        assert!(list.on_drag_end(&drag_end("v4", Some("v2"))));
        assert_eq!(ids(&list), vec!["v3", "v2", "v4", "v1"]);
    }

    #[test]
    fn drag_up_moves_single_row() {
        let mut list = VersionList::seeded();
        assert!(list.on_drag_end(&drag_end("v1", Some("v3"))));
        assert_eq!(ids(&list), vec!["v4", "v1", "v3", "v2"]);
    }

    #[test]
    fn every_valid_drop_is_a_permutation() {
        let original = VersionList::seeded();
        let all = ids(&original).into_iter().map(str::to_string).collect::<Vec<_>>();

        for source in &all {
            for destination in &all {
                if source == destination {
                    continue;
                }
                let mut list = original.clone();
                assert!(list.on_drag_end(&drag_end(source, Some(destination.as_str()))));

                let mut sorted = ids(&list);
                sorted.sort_unstable();
                let mut expected = all.iter().map(String::as_str).collect::<Vec<_>>();
                expected.sort_unstable();
                assert_eq!(sorted, expected);

                let target = original.position(destination).unwrap();
                assert_eq!(list.position(source), Some(target));

                let rest_before: Vec<_> = ids(&original).into_iter().filter(|id| *id != source.as_str()).collect();
                let rest_after: Vec<_> = ids(&list).into_iter().filter(|id| *id != source.as_str()).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn invalid_drops_leave_list_identical() {
        let original = VersionList::seeded();

        for end in [
            drag_end("v3", Some("v3")),
            drag_end("v3", None),
            drag_end("v3", Some("v9")),
            drag_end("v9", Some("v3")),
        ] {
            let mut list = original.clone();
            assert!(!list.on_drag_end(&end));
            assert_eq!(list, original);
        }
    }

    #[test]
    fn one_menu_open_at_a_time() {
        let mut list = VersionList::seeded();
        list.toggle_menu("v4");
        assert_eq!(list.open_menu(), Some("v4"));

        list.toggle_menu("v2");
        assert_eq!(list.open_menu(), Some("v2"));

        list.toggle_menu("v2");
        assert_eq!(list.open_menu(), None);

        list.toggle_menu("v1");
        list.close_menu();
        assert_eq!(list.open_menu(), None);
    }

    #[test]
    fn mark_active_keeps_exactly_one() {
        let mut list = VersionList::seeded();
        list.toggle_menu("v2");
        assert!(list.mark_active("v2"));

        let active: Vec<_> = list.items().iter().filter(|v| v.is_active).map(|v| v.id.as_str()).collect();
        assert_eq!(active, vec!["v2"]);
        assert_eq!(list.open_menu(), None);
        assert!(!list.mark_active("v9"));
    }

    #[test]
    fn removing_active_row_promotes_first() {
        let mut list = VersionList::seeded();
        assert!(list.remove("v4"));
        assert_eq!(ids(&list), vec!["v3", "v2", "v1"]);
        assert!(list.items()[0].is_active);

        assert!(list.remove("v1"));
        assert!(list.remove("v2"));
        assert!(!list.remove("v3"));
        assert_eq!(ids(&list), vec!["v3"]);
    }

    #[test]
    fn thumbnail_failure_is_sticky() {
        let mut list = VersionList::seeded();
        assert!(!list.shows_placeholder("v3"));

        assert!(list.thumbnail_failed("v3"));
        assert!(!list.thumbnail_failed("v3"));
        assert!(list.shows_placeholder("v3"));

        // Moving the row keeps its failure with it.
        list.on_drag_end(&drag_end("v3", Some("v1")));
        assert!(list.shows_placeholder("v3"));
        assert!(!list.shows_placeholder("v1"));
    }

    #[test]
    fn short_press_is_a_click() {
        let mut gesture = DragGesture::default();
        gesture.press("v2", 10.0, 10.0);
        assert!(!gesture.pointer_moved(13.0, 13.0));
        assert!(!gesture.hover(Some("v1")));
        assert_eq!(gesture.dragging(), None);

        assert_eq!(gesture.release(), Release::Click("v2".to_string()));
        assert_eq!(gesture.release(), Release::Nothing);
    }

    #[test]
    fn long_move_becomes_drag() {
        let mut gesture = DragGesture::default();
        gesture.press("v2", 10.0, 10.0);
        assert!(gesture.pointer_moved(10.0, 16.0));
        assert!(!gesture.pointer_moved(10.0, 40.0));
        assert_eq!(gesture.dragging(), Some("v2"));
        assert_eq!(gesture.over(), Some("v2"));

        assert!(gesture.hover(Some("v4")));
        assert_eq!(gesture.release(), Release::Drop(drag_end("v2", Some("v4"))));
        assert_eq!(gesture.dragging(), None);
    }

    #[test]
    fn drag_released_outside_has_no_destination() {
        let mut gesture = DragGesture::default();
        gesture.press("v2", 0.0, 0.0);
        gesture.pointer_moved(0.0, 20.0);
        gesture.hover(None);

        let mut list = VersionList::seeded();
        let before = list.clone();
        match gesture.release() {
            Release::Drop(end) => assert!(!list.on_drag_end(&end)),
            other => panic!("expected drop, got {:?}", other),
        }
        assert_eq!(list, before);
    }

    #[test]
    fn leaving_the_widget_ends_the_drag() {
        let mut gesture = DragGesture::default();
        gesture.press("v2", 0.0, 0.0);
        gesture.pointer_moved(0.0, 20.0);
        assert!(gesture.leave());

        // Released outside, then the pointer comes back over a row.
        assert_eq!(gesture.dragging(), None);
        assert!(!gesture.hover(Some("v1")));
        assert_eq!(gesture.over(), None);
        assert_eq!(gesture.release(), Release::Nothing);
    }

    #[test]
    fn leaving_without_a_drag_changes_nothing_visible() {
        let mut gesture = DragGesture::default();
        assert!(!gesture.leave());

        gesture.press("v3", 0.0, 0.0);
        assert!(!gesture.leave());
        assert_eq!(gesture.release(), Release::Nothing);
    }

    #[test]
    fn cancel_reports_whether_a_drag_was_live() {
        let mut gesture = DragGesture::default();
        assert!(!gesture.cancel());

        gesture.press("v4", 0.0, 0.0);
        gesture.pointer_moved(9.0, 0.0);
        assert!(gesture.cancel());
        assert_eq!(gesture.dragging(), None);
    }

    #[test]
    fn keyboard_lift_move_drop() {
        let list = VersionList::seeded();
        let mut keys = KeyboardDrag::default();

        assert_eq!(keys.key("ArrowDown", "v4", list.items()), KeyOutcome::Ignored);
        assert_eq!(keys.key(" ", "v4", list.items()), KeyOutcome::Lifted);
        assert_eq!(keys.lifted(), Some("v4"));
        assert_eq!(keys.key("ArrowDown", "v4", list.items()), KeyOutcome::Moved);
        assert_eq!(keys.key("ArrowDown", "v4", list.items()), KeyOutcome::Moved);
        assert_eq!(keys.target(), Some(2));
        assert_eq!(keys.key("a", "v4", list.items()), KeyOutcome::Ignored);
        assert_eq!(keys.lifted(), Some("v4"));

        assert_eq!(
            keys.key("Enter", "v4", list.items()),
            KeyOutcome::Dropped(drag_end("v4", Some("v2")))
        );
        assert_eq!(keys.lifted(), None);
        assert_eq!(keys.target(), None);
    }

    #[test]
    fn keyboard_target_stays_in_bounds() {
        let list = VersionList::seeded();
        let mut keys = KeyboardDrag::default();
        keys.key("Enter", "v1", list.items());
        keys.key("ArrowDown", "v1", list.items());
        assert_eq!(keys.target(), Some(3));

        for _ in 0..10 {
            keys.key("ArrowUp", "v1", list.items());
        }
        assert_eq!(keys.target(), Some(0));

        assert_eq!(keys.key("Escape", "v1", list.items()), KeyOutcome::Cancelled);
        assert_eq!(keys.lifted(), None);
    }

    #[test]
    fn key_on_another_row_cancels_the_lift() {
        let list = VersionList::seeded();
        let mut keys = KeyboardDrag::default();

        assert_eq!(keys.key(" ", "v4", list.items()), KeyOutcome::Lifted);
        assert_eq!(keys.key("ArrowDown", "v4", list.items()), KeyOutcome::Moved);

        // Focus moved to v1 without a blur reaching us.
        assert_eq!(keys.key("Enter", "v1", list.items()), KeyOutcome::Cancelled);
        assert_eq!(keys.lifted(), None);

        assert_eq!(keys.key("Enter", "v1", list.items()), KeyOutcome::Lifted);
        assert_eq!(keys.target(), Some(3));
    }

    #[test]
    fn blur_puts_the_lifted_row_back() {
        let list = VersionList::seeded();
        let mut keys = KeyboardDrag::default();
        assert!(!keys.cancel());

        keys.key(" ", "v3", list.items());
        keys.key("ArrowUp", "v3", list.items());
        assert!(keys.cancel());
        assert_eq!(keys.lifted(), None);
        assert_eq!(keys.target(), None);

        assert_eq!(keys.key("ArrowDown", "v3", list.items()), KeyOutcome::Ignored);
    }

    #[test]
    fn keyboard_drop_in_place_is_a_no_op() {
        let mut list = VersionList::seeded();
        let before = list.clone();
        let mut keys = KeyboardDrag::default();

        keys.key(" ", "v3", list.items());
        match keys.key(" ", "v3", list.items()) {
            KeyOutcome::Dropped(end) => assert!(!list.on_drag_end(&end)),
            other => panic!("expected drop, got {:?}", other),
        }
        assert_eq!(list, before);
    }
}
