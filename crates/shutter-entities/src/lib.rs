pub mod types;
pub mod users;
pub mod albums;
pub mod user_albums;
pub mod media;
pub mod user_media_data;

pub mod prelude;
