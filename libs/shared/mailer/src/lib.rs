pub mod mailer;
pub mod templates;

pub use mailer::{dispatch, EmailMessage, MailClient, MailError};
