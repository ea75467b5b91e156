pub mod album;
pub mod artist;
pub mod ids;
pub mod playlist;
pub mod song;
pub mod user;

pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
