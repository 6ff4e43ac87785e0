use crate::core::Notifier;

/// 把使用者訊息寫到 stderr
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn report(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
