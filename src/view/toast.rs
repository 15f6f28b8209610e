use crate::model::{Notification, NotificationKind};

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
        NotificationKind::Info => "ℹ",
    }
}

/// The toast line, or nothing when it is hidden.
pub fn render_toast(notification: &Notification) -> String {
    if !notification.show {
        return String::new();
    }
    format!("{} {}", icon(notification.kind), notification.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_by_kind_and_hidden() {
        let mut toast = Notification::shown(NotificationKind::Error, "Error loading patients");
        assert_eq!(render_toast(&toast), "✖ Error loading patients");

        toast.hide();
        assert!(render_toast(&toast).is_empty());

        let info = Notification::shown(NotificationKind::Info, "hello");
        assert_eq!(render_toast(&info), "ℹ hello");
    }
}
