mod login;
mod profile;
mod register;

pub use login::LoginPage;
pub use profile::ProfileSettingsPage;
pub use register::RegisterPage;
