pub use super::club::Entity as Club;
pub use super::user::Entity as User;
