use crate::domain::album::Album;
use crate::domain::artist::Artist;
use crate::domain::playlist::Playlist;
use crate::domain::song::Song;
use crate::domain::user::User;
use crate::errors::CatalogError;
use crate::ports::Catalog;

/// Servicio de aplicación sobre el puerto [`Catalog`].
///
/// Es la fachada que consumiría una capa externa (HTTP, CLI…): traduce
/// llamadas entrantes a operaciones del catálogo y reexpide resultados
/// y errores hacia afuera sin transformarlos.
pub struct CatalogService<C>
where
  C: Catalog,
{
  catalog: C,
}

impl<C> CatalogService<C>
where
  C: Catalog,
{
  pub fn new(catalog: C) -> Self {
    Self { catalog }
  }

  // -------- COMANDOS (escritura) --------

  pub fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, CatalogError> {
    self.catalog.create_user(name, mobile)
  }

  pub fn create_artist(&mut self, name: &str) -> Result<Artist, CatalogError> {
    self.catalog.create_artist(name)
  }

  pub fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, CatalogError> {
    self.catalog.create_album(title, artist_name)
  }

  pub fn create_song(
    &mut self,
    title: &str,
    album_title: &str,
    duration_secs: u32,
  ) -> Result<Song, CatalogError> {
    self.catalog.create_song(title, album_title, duration_secs)
  }

  pub fn create_playlist_by_length(
    &mut self,
    mobile: &str,
    title: &str,
    duration_secs: u32,
  ) -> Result<Playlist, CatalogError> {
    self.catalog.create_playlist_by_length(mobile, title, duration_secs)
  }

  pub fn create_playlist_by_titles(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[String],
  ) -> Result<Playlist, CatalogError> {
    self.catalog.create_playlist_by_titles(mobile, title, song_titles)
  }

  pub fn follow_playlist(
    &mut self,
    mobile: &str,
    playlist_title: &str,
  ) -> Result<Playlist, CatalogError> {
    self.catalog.follow_playlist(mobile, playlist_title)
  }

  pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, CatalogError> {
    self.catalog.like_song(mobile, song_title)
  }

  // -------- QUERY (read) --------

  pub fn get_user(&self, mobile: &str) -> Result<Option<User>, CatalogError> {
    self.catalog.find_user(mobile)
  }

  pub fn get_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError> {
    self.catalog.find_artist(name)
  }

  pub fn get_album(&self, title: &str) -> Result<Option<Album>, CatalogError> {
    self.catalog.find_album(title)
  }

  pub fn get_song(&self, title: &str) -> Result<Option<Song>, CatalogError> {
    self.catalog.find_song(title)
  }

  pub fn get_playlist(&self, title: &str) -> Result<Option<Playlist>, CatalogError> {
    self.catalog.find_playlist(title)
  }

  pub fn list_users(&self) -> Result<Vec<User>, CatalogError> {
    self.catalog.list_users()
  }

  pub fn list_artists(&self) -> Result<Vec<Artist>, CatalogError> {
    self.catalog.list_artists()
  }

  pub fn list_albums(&self) -> Result<Vec<Album>, CatalogError> {
    self.catalog.list_albums()
  }

  pub fn list_songs(&self) -> Result<Vec<Song>, CatalogError> {
    self.catalog.list_songs()
  }

  pub fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
    self.catalog.list_playlists()
  }

  pub fn most_popular_artist(&self) -> Result<String, CatalogError> {
    self.catalog.most_popular_artist()
  }

  pub fn most_popular_song(&self) -> Result<String, CatalogError> {
    self.catalog.most_popular_song()
  }
}
