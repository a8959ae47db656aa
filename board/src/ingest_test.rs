use super::*;

#[test]
fn image_mime_prefixes_are_accepted() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/jpeg"));
    assert!(is_image_mime("image/svg+xml"));
}

#[test]
fn non_image_mimes_are_rejected() {
    assert!(!is_image_mime("text/plain"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime(""));
    // Prefix check is on the type family, not a substring match.
    assert!(!is_image_mime("text/image"));
}

#[test]
fn only_data_urls_are_embedded() {
    assert!(is_embedded_src("data:image/png;base64,AAAA"));
    assert!(!is_embedded_src("https://example.com/pic.png"));
    assert!(!is_embedded_src(""));
}
