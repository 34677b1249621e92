use std::borrow::Cow;

use serde::Serialize;

use crate::cow_strs;


/// The display part of a message, rendered by the client OS. Build one with
/// [`NotificationBuilder`] and attach it via
/// [`MessageBuilder::notification`](crate::MessageBuilder::notification);
/// messages without one are data-only and invisible to the user.
#[derive(Serialize, Debug, PartialEq, Default)]
pub struct Notification<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    body_loc_args: Option<Vec<Cow<'a, str>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    body_loc_key: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    click_action: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    title_loc_args: Option<Vec<Cow<'a, str>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    title_loc_key: Option<&'a str>,
}

impl<'a> Notification<'a> {
    pub fn title(&self) -> Option<&str> {
        self.title
    }

    pub fn body(&self) -> Option<&str> {
        self.body
    }
}

/// Accumulates the fields of a [`Notification`].
///
/// # Examples:
/// ```rust
/// use fcm_legacy::NotificationBuilder;
///
/// let mut builder = NotificationBuilder::new();
/// builder.title("Australia vs New Zealand");
/// builder.body("3 runs to win in 1 ball");
/// let notification = builder.finalize();
/// ```
#[derive(Debug, Default)]
pub struct NotificationBuilder<'a> {
    notification: Notification<'a>,
}

impl<'a> NotificationBuilder<'a> {
    pub fn new() -> NotificationBuilder<'a> {
        NotificationBuilder::default()
    }

    /// Title shown in the notification shade.
    pub fn title(&mut self, title: &'a str) -> &mut Self {
        self.notification.title = Some(title);
        self
    }

    /// Body text shown under the title.
    pub fn body(&mut self, body: &'a str) -> &mut Self {
        self.notification.body = Some(body);
        self
    }

    /// Notification icon, a drawable resource name on Android.
    pub fn icon(&mut self, icon: &'a str) -> &mut Self {
        self.notification.icon = Some(icon);
        self
    }

    /// Sound to play on arrival.
    pub fn sound(&mut self, sound: &'a str) -> &mut Self {
        self.notification.sound = Some(sound);
        self
    }

    /// Badge count on the app icon, iOS only. The server takes it as a
    /// string.
    pub fn badge(&mut self, badge: &'a str) -> &mut Self {
        self.notification.badge = Some(badge);
        self
    }

    /// Notifications sharing a tag replace each other.
    pub fn tag(&mut self, tag: &'a str) -> &mut Self {
        self.notification.tag = Some(tag);
        self
    }

    /// Icon color, in `#rrggbb` form.
    pub fn color(&mut self, color: &'a str) -> &mut Self {
        self.notification.color = Some(color);
        self
    }

    /// Action taken when the user taps the notification.
    pub fn click_action(&mut self, click_action: &'a str) -> &mut Self {
        self.notification.click_action = Some(click_action);
        self
    }

    /// Localization key for the body.
    pub fn body_loc_key(&mut self, body_loc_key: &'a str) -> &mut Self {
        self.notification.body_loc_key = Some(body_loc_key);
        self
    }

    /// Values substituted for the body key's format specifiers.
    pub fn body_loc_args<S>(&mut self, body_loc_args: &'a [S]) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.notification.body_loc_args = Some(cow_strs(body_loc_args));
        self
    }

    /// Localization key for the title.
    pub fn title_loc_key(&mut self, title_loc_key: &'a str) -> &mut Self {
        self.notification.title_loc_key = Some(title_loc_key);
        self
    }

    /// Values substituted for the title key's format specifiers.
    pub fn title_loc_args<S>(&mut self, title_loc_args: &'a [S]) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.notification.title_loc_args = Some(cow_strs(title_loc_args));
        self
    }

    /// Complete the build and get a `Notification` instance.
    pub fn finalize(self) -> Notification<'a> {
        self.notification
    }
}
