pub use super::albums::Entity as Albums;
pub use super::media::Entity as Media;
pub use super::user_albums::Entity as UserAlbums;
pub use super::user_media_data::Entity as UserMediaData;
pub use super::users::Entity as Users;
