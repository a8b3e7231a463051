pub mod a001_playlist;
pub mod a002_artist;
