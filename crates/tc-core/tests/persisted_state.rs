//! Integration tests: persisted canvas state (tc-core).
//!
//! Exercises `save` / `load` through the `KeyValueStore` seam the way a
//! host does across sessions.

use pretty_assertions::assert_eq;
use tc_core::persist::{self, KeyValueStore, MemoryStore};
use tc_core::{CanvasState, TextItem};

const KEY: &str = "canvasState";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn styled_items() -> Vec<TextItem> {
    let mut title = TextItem::new("Title", 312.75, 48.125).with_font(42.0, "Georgia");
    title.is_bold = true;
    title.is_underline = true;

    let mut note = TextItem::new("a note — with ünïcödé", 0.1, 599.9).with_font(10.0, "Courier New");
    note.is_italic = true;

    vec![title, note, TextItem::new("", 400.0, 300.0)]
}

#[test]
fn save_then_load_roundtrips_every_field() {
    init_logging();
    let items = styled_items();
    let mut store = MemoryStore::new();

    persist::save(&mut store, KEY, &items).unwrap();
    let restored = persist::load(&store, KEY);

    assert_eq!(restored, items);
}

#[test]
fn save_overwrites_previous_state() {
    init_logging();
    let mut store = MemoryStore::new();
    persist::save(&mut store, KEY, &styled_items()).unwrap();
    persist::save(&mut store, KEY, &[]).unwrap();

    assert!(persist::load(&store, KEY).is_empty());
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"{"textArray":[]}"#));
}

#[test]
fn loads_state_written_by_older_sessions() {
    init_logging();
    let mut store = MemoryStore::new();
    store
        .set(
            KEY,
            r#"{"textArray":[{"text":"Hello","x":400,"y":300,"fontSize":18,"fontFamily":"Arial","isItalic":false,"isBold":true,"isUnderline":false}]}"#,
        )
        .unwrap();

    let items = persist::load(&store, KEY);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content, "Hello");
    assert!(items[0].is_bold);
    assert_eq!((items[0].x, items[0].y), (400.0, 300.0));
}

#[test]
fn keys_are_independent() {
    init_logging();
    let mut store = MemoryStore::new();
    persist::save(&mut store, "a", &styled_items()).unwrap();

    assert!(persist::load(&store, "b").is_empty());
    assert_eq!(
        CanvasState::from_json(&store.get("a").unwrap().unwrap())
            .unwrap()
            .text_array
            .len(),
        3
    );
}
