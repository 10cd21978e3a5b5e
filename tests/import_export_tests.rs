//! Import / export tests

use std::sync::Arc;

use serde_json::json;

use quicktab::errors::QuicktabError;
use quicktab::services::{EXPORT_VERSION, LinkSettings, LinkStore, Position};
use quicktab::storage::{IMAGES_KEY, KvStore, LINKS_KEY, MemoryStore};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

async fn seeded_store() -> (LinkStore, Arc<MemoryStore>) {
    let kv = Arc::new(MemoryStore::new());
    let store = LinkStore::load(kv.clone(), LinkSettings::default()).await;
    (store, kv)
}

#[tokio::test]
async fn test_export_shape() {
    let (mut store, _) = seeded_store().await;
    store.add_uploaded_image("logo", PNG).await.unwrap();

    let value = serde_json::to_value(store.export()).unwrap();
    assert_eq!(value["version"], EXPORT_VERSION);
    assert!(value["exportDate"].as_str().unwrap().contains('T'));
    assert_eq!(value["links"].as_array().unwrap().len(), 4);
    assert_eq!(value["links"][0][0]["type"], "RemoteVectorIcon");
    assert_eq!(value["links"][0][0]["icon"], "reddit");
    assert_eq!(value["uploadedImages"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_round_trip() {
    let (mut source, _) = seeded_store().await;
    let id = source.add_uploaded_image("logo", PNG).await.unwrap();
    source
        .add_link(quicktab::storage::RawLink {
            name: "Mine".into(),
            url: "https://mine.example.com".into(),
            kind: "UploadedImage".into(),
            icon_ref: Some(id),
            color: None,
        })
        .await
        .unwrap();
    source
        .move_link(Position::new(4, 0), Position::new(0, 0), false)
        .await
        .unwrap();

    let exported = serde_json::to_string(&source.export()).unwrap();

    let kv = Arc::new(MemoryStore::new());
    let mut target = LinkStore::load(
        kv,
        LinkSettings {
            seed_defaults: false,
            ..LinkSettings::default()
        },
    )
    .await;
    let summary = target.import_str(&exported).await.unwrap();

    assert_eq!(summary.version, EXPORT_VERSION);
    assert_eq!(summary.links, 17);
    assert_eq!(summary.images, Some(1));
    assert_eq!(target.grid(), source.grid());
    assert_eq!(target.images(), source.images());
}

#[tokio::test]
async fn test_import_v1_keeps_images() {
    let (mut store, kv) = seeded_store().await;
    let id = store.add_uploaded_image("logo", PNG).await.unwrap();

    let summary = store
        .import(&json!({
            "version": "1.0",
            "links": [[{"name": "X", "url": "https://x.com", "type": "Automatic"}]]
        }))
        .await
        .unwrap();

    assert_eq!(summary.images, None);
    assert_eq!(store.grid().link_count(), 1);
    assert_eq!(store.get_link(Position::new(0, 0)).unwrap().name, "X");
    assert!(store.images().contains_key(&id));

    let stored = kv.get(LINKS_KEY).await.unwrap().unwrap();
    assert_eq!(stored[0][0]["name"], "X");
    assert!(kv.get(IMAGES_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_import_missing_icon_keeps_grid() {
    let (mut store, kv) = seeded_store().await;
    let before = store.grid().clone();

    let err = store
        .import(&json!({
            "version": "1.1",
            "links": [
                [{"name": "Ok", "url": "https://ok.com", "type": "Automatic"}],
                [{"name": "Bad", "url": "https://bad.com", "type": "RemoteVectorIcon"}]
            ]
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, QuicktabError::Validation(_)));
    assert!(err.message().starts_with("Row 1, link 0"));
    assert_eq!(store.grid(), &before);
    assert!(kv.get(LINKS_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_import_rejections() {
    let (mut store, _) = seeded_store().await;
    let before = store.grid().clone();

    let bad_inputs = [
        json!([]),
        json!({"version": "2.0", "links": []}),
        json!({"version": "1.1"}),
        json!({"version": "1.1", "links": [{"name": "X"}]}),
        json!({"version": "1.1", "links": [[{"name": "X", "url": "javascript:void(0)", "type": "Automatic"}]]}),
        json!({"version": "1.1", "links": [], "uploadedImages": {"img_1": {"name": "x", "data": "data:text/plain;base64,AA==", "timestamp": 0}}}),
    ];

    for input in bad_inputs {
        let err = store.import(&input).await.unwrap_err();
        assert!(matches!(err, QuicktabError::Validation(_)), "{} -> {:?}", input, err);
    }
    assert_eq!(store.grid(), &before);

    let err = store.import_str("{not json").await.unwrap_err();
    assert!(matches!(err, QuicktabError::Validation(_)));
}

#[tokio::test]
async fn test_import_accepts_data_and_blob_links() {
    let (mut store, _) = seeded_store().await;

    store
        .import(&json!({
            "version": "1.1",
            "links": [[
                {"name": "Note", "url": "data:text/plain,hello", "type": "Automatic"},
                {"name": "Blob", "url": "blob:https://example.com/0b6e7c1a", "type": "Automatic"}
            ]]
        }))
        .await
        .unwrap();

    assert_eq!(store.grid().link_count(), 2);
    assert_eq!(
        store.get_link(Position::new(0, 0)).unwrap().url,
        "data:text/plain,hello"
    );
}

#[tokio::test]
async fn test_import_drops_empty_rows_and_defaults_version() {
    let (mut store, _) = seeded_store().await;

    let summary = store
        .import(&json!({
            "links": [
                [],
                [{"name": "A", "url": "https://a.com", "type": "lucide", "icon": "cpu", "color": "#FF4500"}],
                []
            ]
        }))
        .await
        .unwrap();

    assert_eq!(summary.version, "1.0");
    assert_eq!(summary.rows, 1);
    assert_eq!(store.grid().row_count(), 1);
}

#[tokio::test]
async fn test_import_empty_links_clears_grid() {
    let (mut store, _) = seeded_store().await;
    store
        .import(&json!({"version": "1.1", "links": [], "uploadedImages": {}}))
        .await
        .unwrap();
    assert!(store.grid().is_empty());
    assert!(store.images().is_empty());
}
