pub mod catalogue;
pub mod genre;
pub mod ids;
pub mod playlist;
pub mod song;

pub use catalogue::Catalogue;
pub use genre::{Genre, GenreParseError};
pub use ids::SongId;
pub use playlist::Playlist;
pub use song::{Song, SongRecord};
