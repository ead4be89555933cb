pub mod contact;
pub mod telegram;

pub use contact::{ContactError, ContactServiceImpl, ContactServiceTrait, Notifier, NotifyError};
pub use telegram::TelegramNotifier;
