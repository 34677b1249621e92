use crate::{FcmError, Topic};

#[test]
fn should_accept_every_documented_character() {
    let topic = Topic::new("news-en_US.v1~a%").unwrap();

    assert_eq!(topic.name(), "news-en_US.v1~a%");
}

#[test]
fn should_reject_whitespace() {
    assert_eq!(
        Topic::new("news en"),
        Err(FcmError::InvalidTopicName("news en".to_string()))
    );
}

#[test]
fn should_reject_empty_names() {
    assert_eq!(
        Topic::new(""),
        Err(FcmError::InvalidTopicName(String::new()))
    );
}

#[test]
fn should_reject_non_ascii_names() {
    assert!(Topic::new("nachrichtenüberblick").is_err());
}

#[test]
fn should_reject_slashes() {
    assert!(Topic::new("/topics/news").is_err());
}

#[test]
fn should_render_the_display_form() {
    let topic = Topic::new("news").unwrap();

    assert_eq!(topic.to_string(), "'news' in topics");
}

#[test]
fn should_build_the_send_path() {
    let topic = Topic::new("news").unwrap();

    assert_eq!(topic.path(), "/topics/news");
}
