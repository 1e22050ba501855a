use lightbox_types::MediaItem;
use lightbox_widgets::{SlideProps, ThumbnailStrip, swatches};
use shared::PropsError;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Select(String),
    Next(String),
    Close,
}

fn pair() -> Vec<MediaItem> {
    vec![
        MediaItem::new("a", "https://x.test/a.jpg", "https://x.test/a_t.jpg"),
        MediaItem::new("b", "https://x.test/b.png?v=2", "https://x.test/b_t.jpg"),
    ]
}

#[test]
fn test_selecting_second_swatch_emits_only_select() {
    let images = pair();
    let calls = RefCell::new(Vec::new());

    let strip = ThumbnailStrip::new(&images, Some("a")).on_select(|id| {
        calls.borrow_mut().push(id.clone());
        Msg::Select(id)
    });

    let message = strip.press(1);
    assert_eq!(message, Some(Msg::Select("b".to_string())));
    assert_eq!(*calls.borrow(), vec!["b".to_string()]);
    assert_ne!(message, Some(Msg::Next("a".to_string())));
    assert_ne!(message, Some(Msg::Close));
}

#[test]
fn test_selection_follows_current_id() {
    let images = pair();

    let count = |current: Option<&str>| swatches(&images, current).iter().filter(|s| s.selected).count();
    assert_eq!(count(Some("a")), 1);
    assert_eq!(count(Some("b")), 1);
    assert_eq!(count(Some("c")), 0);
    assert_eq!(count(None), 0);
}

#[test]
fn test_props_validation() {
    let images = pair();
    assert!(SlideProps { images: &images, id: "a" }.validate().is_ok());

    let blank = vec![MediaItem::new("", "x.jpg", "")];
    assert_eq!(
        SlideProps { images: &blank, id: "" }.validate(),
        Err(PropsError::EmptyId(0))
    );
}
