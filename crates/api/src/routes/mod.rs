pub mod common;
pub mod contact;
pub mod health;
pub mod ping;
pub mod site;

pub use contact::submit_contact;
pub use health::health_check;
pub use ping::ping;
