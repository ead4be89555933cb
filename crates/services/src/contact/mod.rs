pub mod errors;
pub mod models;
pub mod normalize;
pub mod ports;
pub mod service;
pub mod validation;

pub use errors::ContactError;
pub use models::{ContactForm, ContactSubmission};
pub use ports::{ContactServiceTrait, Notifier, NotifyError, MAX_ERROR_DETAIL_LENGTH};
pub use service::ContactServiceImpl;
pub use validation::validate;

#[cfg(any(test, feature = "test-mocks"))]
pub use ports::{MockContactServiceTrait, MockNotifier};
