#[cfg(test)]
mod tests {
    use shared::accessibility::AccessibilityInfo;
    use shared::media::{MediaSource, classify_source, extension};

    #[test]
    fn test_gallery_sources_resolve_once() {
        let sources = [
            Some("https://x.test/img.png?v=2"),
            Some("https://x.test/clip.mov"),
            None,
        ];

        let resolved: Vec<MediaSource> = sources.iter().map(|s| classify_source(*s)).collect();

        assert!(resolved[0].is_image());
        assert!(resolved[1].is_video());
        assert!(resolved[2].is_loading());
    }

    #[test]
    fn test_extension_takes_last_fragment() {
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("https://x.test/a.b/c.png?x=1.2"), "png");
        assert_eq!(extension("noext"), "noext");
    }

    #[test]
    fn test_video_slide_announcement() {
        let source = classify_source(Some("/videos/intro.mp4"));
        let info = AccessibilityInfo::slide(&source, "");
        assert_eq!(info.aria_label(), "Video: intro.mp4");
    }
}
