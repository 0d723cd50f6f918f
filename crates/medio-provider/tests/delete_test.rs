mod helpers;

use helpers::{image_options, media_file, png_bytes, provider_with};
use medio_core::ProviderError;
use medio_provider::test_helpers::StoreOp;

#[tokio::test]
async fn delete_issues_exactly_six_calls_for_two_specs_with_webp() {
    let (provider, default_store, _) = provider_with(image_options());
    let mut file = media_file("abc123", ".png", "image/png", png_bytes(64, 64));
    file.path = Some("uploads".to_string());

    provider.delete(&file).await.unwrap();

    // 2 thumbnail-format + 2 thumbnail-webp + 1 original-webp + 1 original
    let delete_keys = default_store.delete_keys();
    assert_eq!(delete_keys.len(), 6);
    assert!(delete_keys.contains(&"media/uploads/thumbnail_abc123.png".to_string()));
    assert!(delete_keys.contains(&"media/uploads/thumbnail_abc123.webp".to_string()));
    assert!(delete_keys.contains(&"media/uploads/medium_abc123.png".to_string()));
    assert!(delete_keys.contains(&"media/uploads/medium_abc123.webp".to_string()));
    assert!(delete_keys.contains(&"media/uploads/abc123.webp".to_string()));
    // The original is always deleted last
    assert_eq!(delete_keys.last().unwrap(), "media/uploads/abc123.png");
}

#[tokio::test]
async fn delete_derives_the_same_original_key_as_upload() {
    let (provider, default_store, _) = provider_with(image_options());
    let mut file = media_file("abc123", ".png", "image/png", png_bytes(64, 64));
    file.path = Some("uploads".to_string());

    provider.upload(&mut file).await.unwrap();
    assert!(default_store.has_object("media/uploads/abc123.png"));

    provider.delete(&file).await.unwrap();
    assert!(!default_store.has_object("media/uploads/abc123.png"));
    assert!(!default_store.has_object("media/uploads/thumbnail_abc123.png"));
}

#[tokio::test]
async fn webp_disabled_skips_sibling_deletes() {
    let mut options = image_options();
    options.webp = false;
    let (provider, default_store, _) = provider_with(options);
    let file = media_file("abc123", ".png", "image/png", png_bytes(64, 64));

    provider.delete(&file).await.unwrap();

    let delete_keys = default_store.delete_keys();
    assert_eq!(delete_keys.len(), 3);
    assert!(delete_keys.iter().all(|k| !k.ends_with(".webp")));
}

#[tokio::test]
async fn video_extension_targets_the_video_store() {
    let (provider, default_store, video_store) = provider_with(image_options());
    let file = media_file("vid42", ".mp4", "video/mp4", Vec::new());

    provider.delete(&file).await.unwrap();

    // The original-webp delete still goes to the default store
    assert_eq!(
        default_store.delete_keys(),
        vec!["media/vid42.webp".to_string()]
    );
    assert_eq!(video_store.delete_keys(), vec!["media/vid42.mp4".to_string()]);
}

#[tokio::test]
async fn video_domain_url_targets_the_video_store_despite_extension() {
    let mut options = image_options();
    options.thumbnails = Vec::new();
    options.webp = false;
    options.custom_video_domain = Some("https://videos.example.com".to_string());
    let (provider, default_store, video_store) = provider_with(options);

    let mut file = media_file("clip9", ".png", "image/png", Vec::new());
    file.url = Some("https://videos.example.com/media/clip9.png".to_string());

    provider.delete(&file).await.unwrap();

    assert!(default_store.calls().is_empty());
    assert_eq!(video_store.delete_keys(), vec!["media/clip9.png".to_string()]);
}

#[tokio::test]
async fn side_delete_failures_are_swallowed() {
    let (provider, default_store, _) = provider_with(image_options());
    default_store.fail_delete_on("media/thumbnail_abc123.png");
    default_store.fail_delete_on("media/abc123.webp");
    let file = media_file("abc123", ".png", "image/png", png_bytes(64, 64));

    provider.delete(&file).await.unwrap();

    // Every side delete was still attempted, plus the original
    assert_eq!(default_store.delete_keys().len(), 6);
}

#[tokio::test]
async fn original_delete_failure_is_surfaced() {
    let (provider, default_store, _) = provider_with(image_options());
    default_store.fail_delete_on("media/abc123.png");
    let file = media_file("abc123", ".png", "image/png", png_bytes(64, 64));

    let err = provider.delete(&file).await.unwrap_err();
    assert!(matches!(err, ProviderError::Storage(_)));
}

#[tokio::test]
async fn non_image_without_webp_issues_a_single_delete() {
    let mut options = image_options();
    options.webp = false;
    let (provider, default_store, video_store) = provider_with(options);
    let file = media_file("doc7", ".pdf", "application/pdf", Vec::new());

    provider.delete(&file).await.unwrap();

    let calls = default_store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].op, StoreOp::Delete);
    assert_eq!(calls[0].key, "media/doc7.pdf");
    assert!(video_store.calls().is_empty());
}
