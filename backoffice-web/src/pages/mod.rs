pub mod login;
mod section;

pub use login::LoginPage;
pub use section::SectionPage;
