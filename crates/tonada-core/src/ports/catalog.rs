use crate::domain::album::Album;
use crate::domain::artist::Artist;
use crate::domain::playlist::Playlist;
use crate::domain::song::Song;
use crate::domain::user::User;
use crate::errors::CatalogError;

/// Puerto principal del catálogo.
///
/// Agrupa las operaciones de creación, asociación y consulta sobre el
/// modelo usuarios / artistas / álbumes / canciones / playlists. El
/// contrato es síncrono y de un solo escritor: los comandos toman
/// `&mut self` y toda búsqueda previa a una mutación ocurre antes de
/// tocar el estado, de modo que un fallo deja el catálogo intacto.
///
/// Las implementaciones devuelven las entidades por valor (clones),
/// nunca referencias al estado interno: nadie fuera del catálogo puede
/// mutar una lista de relación directamente.
pub trait Catalog {
  // --- Métodos de Comando (Escritura) ---

  /// Registra un usuario nuevo con su lista de playlists vacía.
  /// No falla nunca; el móvil repetido no se valida aquí.
  fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, CatalogError>;

  /// Registra un artista nuevo con su lista de álbumes vacía.
  fn create_artist(&mut self, name: &str) -> Result<Artist, CatalogError>;

  /// Registra un álbum bajo el artista con ese nombre exacto,
  /// creándolo si todavía no existe.
  fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, CatalogError>;

  /// Registra una canción bajo un álbum ya existente.
  /// Falla con `NotFound(Album)` si el título no corresponde a ninguno.
  fn create_song(
    &mut self,
    title: &str,
    album_title: &str,
    duration_secs: u32,
  ) -> Result<Song, CatalogError>;

  /// Crea una playlist con todas las canciones cuya duración coincide
  /// exactamente. El creador queda como propietario y primer oyente.
  fn create_playlist_by_length(
    &mut self,
    mobile: &str,
    title: &str,
    duration_secs: u32,
  ) -> Result<Playlist, CatalogError>;

  /// Crea una playlist con las canciones cuyos títulos aparecen en
  /// `song_titles`, en orden de registro del catálogo.
  fn create_playlist_by_titles(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[String],
  ) -> Result<Playlist, CatalogError>;

  /// Suscribe al usuario como oyente de la playlist. Idempotente: si
  /// ya era oyente (o el creador) devuelve la playlist sin cambios.
  fn follow_playlist(
    &mut self,
    mobile: &str,
    playlist_title: &str,
  ) -> Result<Playlist, CatalogError>;

  /// Marca la canción como favorita del usuario. Idempotente. Un "me
  /// gusta" nuevo se propaga también al artista del álbum.
  fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, CatalogError>;

  // --- Métodos de Consulta (Lectura) por clave natural ---

  fn find_user(&self, mobile: &str) -> Result<Option<User>, CatalogError>;
  fn find_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError>;
  fn find_album(&self, title: &str) -> Result<Option<Album>, CatalogError>;
  fn find_song(&self, title: &str) -> Result<Option<Song>, CatalogError>;
  fn find_playlist(&self, title: &str) -> Result<Option<Playlist>, CatalogError>;

  // --- Métodos de Consulta (Lectura) de Listado ---
  // Siempre en orden de registro.

  fn list_users(&self) -> Result<Vec<User>, CatalogError>;
  fn list_artists(&self) -> Result<Vec<Artist>, CatalogError>;
  fn list_albums(&self) -> Result<Vec<Album>, CatalogError>;
  fn list_songs(&self) -> Result<Vec<Song>, CatalogError>;
  fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError>;

  // --- Agregados ---

  /// Nombre del artista con más "me gusta"; empates los gana el primero
  /// registrado. Cadena vacía si no hay artistas.
  fn most_popular_artist(&self) -> Result<String, CatalogError>;

  /// Título de la canción con más "me gusta", exigiendo al menos uno.
  /// Cadena vacía si ninguna canción ha sido marcada.
  fn most_popular_song(&self) -> Result<String, CatalogError>;
}
