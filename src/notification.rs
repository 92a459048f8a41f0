/// Sink for messages that must reach the user, such as a rejected import.
pub trait Notifier {
    fn notify(&self, body: &str);
}

/// Sends desktop notifications through the session bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, body: &str) {
        send(body);
    }
}

pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname("stylecraft")
        .summary("Style editor")
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}
