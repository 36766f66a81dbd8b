use threadline_client::{NotificationKind, Notifier};

pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success => eprintln!("{title} {message}"),
            NotificationKind::Error => eprintln!("error: {title} {message}"),
        }
    }
}
