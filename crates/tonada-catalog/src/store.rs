use std::collections::HashMap;

use log::{debug, trace};

use tonada_core::domain::album::Album;
use tonada_core::domain::artist::Artist;
use tonada_core::domain::playlist::Playlist;
use tonada_core::domain::song::Song;
use tonada_core::domain::user::User;
use tonada_core::domain::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
use tonada_core::errors::{CatalogError, EntityKind};
use tonada_core::ports::Catalog;

/// Catálogo en memoria: implementación de referencia del puerto
/// [`Catalog`].
///
/// Los registros de entidades (`Vec`) conservan el orden de creación,
/// que es el orden de desempate de los agregados. Las relaciones entre
/// entidades viven en mapas indexados por ID tipado; las listas de
/// miembros están ordenadas y no admiten duplicados.
///
/// No hay sincronización interna: un llamador concurrente debe
/// serializar el acceso desde fuera (un lock alrededor del store).
#[derive(Debug, Default)]
pub struct MemoryCatalog {
  users: Vec<User>,
  artists: Vec<Artist>,
  albums: Vec<Album>,
  songs: Vec<Song>,
  playlists: Vec<Playlist>,

  artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
  album_songs: HashMap<AlbumId, Vec<SongId>>,
  playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
  playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
  creator_playlist: HashMap<UserId, PlaylistId>,
  user_playlists: HashMap<UserId, Vec<PlaylistId>>,
  song_likers: HashMap<SongId, Vec<UserId>>,
}

impl MemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  // -------- Vistas de relación (solo lectura) --------
  // Devuelven slices sobre el estado interno; vacío si el ID no tiene
  // entrada (nunca es un error).

  pub fn albums_of(&self, artist: ArtistId) -> &[AlbumId] {
    match self.artist_albums.get(&artist) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  pub fn songs_of(&self, album: AlbumId) -> &[SongId] {
    match self.album_songs.get(&album) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  pub fn songs_in_playlist(&self, playlist: PlaylistId) -> &[SongId] {
    match self.playlist_songs.get(&playlist) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  pub fn listeners_of(&self, playlist: PlaylistId) -> &[UserId] {
    match self.playlist_listeners.get(&playlist) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  pub fn likers_of(&self, song: SongId) -> &[UserId] {
    match self.song_likers.get(&song) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  pub fn playlists_of(&self, user: UserId) -> &[PlaylistId] {
    match self.user_playlists.get(&user) {
      Some(v) => v.as_slice(),
      None => &[],
    }
  }

  /// Última playlist creada por el usuario. El registro es singular:
  /// cada creación nueva sobrescribe la anterior.
  pub fn created_playlist_of(&self, user: UserId) -> Option<PlaylistId> {
    self.creator_playlist.get(&user).copied()
  }

  /// Contador de "me gusta" del usuario, derivado: cuántas canciones
  /// lo tienen en su lista de likers.
  pub fn liked_song_count(&self, user: UserId) -> usize {
    self.song_likers.values().filter(|likers| likers.contains(&user)).count()
  }

  // -------- Búsquedas por clave natural --------
  // Escaneo lineal con coincidencia exacta; con títulos repetidos gana
  // el registrado primero.

  fn user_by_mobile(&self, mobile: &str) -> Option<&User> {
    self.users.iter().find(|u| u.mobile == mobile)
  }

  fn artist_by_name(&self, name: &str) -> Option<&Artist> {
    self.artists.iter().find(|a| a.name == name)
  }

  fn album_by_title(&self, title: &str) -> Option<&Album> {
    self.albums.iter().find(|a| a.title == title)
  }

  fn song_by_title(&self, title: &str) -> Option<&Song> {
    self.songs.iter().find(|s| s.title == title)
  }

  fn playlist_by_title(&self, title: &str) -> Option<&Playlist> {
    self.playlists.iter().find(|p| p.title == title)
  }

  /// Artista propietario de la canción, resuelto vía la relación
  /// álbum → canciones y la referencia álbum → artista.
  fn artist_of(&self, song: SongId) -> Option<ArtistId> {
    let (album_id, _) = self.album_songs.iter().find(|(_, songs)| songs.contains(&song))?;
    self.albums.iter().find(|a| a.id == *album_id).map(|a| a.artist_id)
  }

  /// Alta común de las dos variantes de creación de playlist: registra
  /// la playlist con sus canciones, pone al creador como primer oyente
  /// y sobrescribe su registro de "playlist creada".
  fn register_playlist(&mut self, creator: UserId, title: &str, songs: Vec<SongId>) -> Playlist {
    let playlist =
      Playlist { id: PlaylistId::new(), title: title.to_owned(), creator_id: creator };

    self.playlist_songs.insert(playlist.id, songs);
    self.playlist_listeners.insert(playlist.id, vec![creator]);
    self.creator_playlist.insert(creator, playlist.id);
    self.user_playlists.entry(creator).or_default().push(playlist.id);
    self.playlists.push(playlist.clone());

    debug!("playlist created: {title}");
    playlist
  }
}

impl Catalog for MemoryCatalog {
  fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, CatalogError> {
    let user = User { id: UserId::new(), name: name.to_owned(), mobile: mobile.to_owned() };
    self.user_playlists.insert(user.id, Vec::new());
    self.users.push(user.clone());

    debug!("user created: {name} ({mobile})");
    Ok(user)
  }

  fn create_artist(&mut self, name: &str) -> Result<Artist, CatalogError> {
    let artist = Artist { id: ArtistId::new(), name: name.to_owned(), likes: 0 };
    self.artist_albums.insert(artist.id, Vec::new());
    self.artists.push(artist.clone());

    debug!("artist created: {name}");
    Ok(artist)
  }

  fn create_album(&mut self, title: &str, artist_name: &str) -> Result<Album, CatalogError> {
    // Búsqueda por nombre exacto sobre todo el registro; solo se crea
    // un artista nuevo cuando el nombre no existe todavía.
    let artist_id = match self.artist_by_name(artist_name).map(|a| a.id) {
      Some(id) => id,
      None => self.create_artist(artist_name)?.id,
    };

    let album = Album { id: AlbumId::new(), title: title.to_owned(), artist_id };
    self.album_songs.insert(album.id, Vec::new());
    self.artist_albums.entry(artist_id).or_default().push(album.id);
    self.albums.push(album.clone());

    debug!("album created: {title} (artist: {artist_name})");
    Ok(album)
  }

  fn create_song(
    &mut self,
    title: &str,
    album_title: &str,
    duration_secs: u32,
  ) -> Result<Song, CatalogError> {
    let album_id = self
      .album_by_title(album_title)
      .map(|a| a.id)
      .ok_or_else(|| CatalogError::not_found(EntityKind::Album, album_title))?;

    let song = Song { id: SongId::new(), title: title.to_owned(), duration_secs, likes: 0 };
    self.song_likers.insert(song.id, Vec::new());
    self.album_songs.entry(album_id).or_default().push(song.id);
    self.songs.push(song.clone());

    debug!("song created: {title} (album: {album_title})");
    Ok(song)
  }

  fn create_playlist_by_length(
    &mut self,
    mobile: &str,
    title: &str,
    duration_secs: u32,
  ) -> Result<Playlist, CatalogError> {
    let creator = self
      .user_by_mobile(mobile)
      .map(|u| u.id)
      .ok_or_else(|| CatalogError::not_found(EntityKind::User, mobile))?;

    let selected: Vec<SongId> =
      self.songs.iter().filter(|s| s.duration_secs == duration_secs).map(|s| s.id).collect();

    Ok(self.register_playlist(creator, title, selected))
  }

  fn create_playlist_by_titles(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[String],
  ) -> Result<Playlist, CatalogError> {
    let creator = self
      .user_by_mobile(mobile)
      .map(|u| u.id)
      .ok_or_else(|| CatalogError::not_found(EntityKind::User, mobile))?;

    let selected: Vec<SongId> = self
      .songs
      .iter()
      .filter(|s| song_titles.iter().any(|t| *t == s.title))
      .map(|s| s.id)
      .collect();

    Ok(self.register_playlist(creator, title, selected))
  }

  fn follow_playlist(
    &mut self,
    mobile: &str,
    playlist_title: &str,
  ) -> Result<Playlist, CatalogError> {
    let user_id = self
      .user_by_mobile(mobile)
      .map(|u| u.id)
      .ok_or_else(|| CatalogError::not_found(EntityKind::User, mobile))?;

    let playlist = self
      .playlist_by_title(playlist_title)
      .cloned()
      .ok_or_else(|| CatalogError::not_found(EntityKind::Playlist, playlist_title))?;

    let listeners = self.playlist_listeners.entry(playlist.id).or_default();
    if listeners.contains(&user_id) {
      // Ya era oyente (o el creador): no se reordena ni se duplica.
      trace!("follow ignored, already a listener: {mobile} -> {playlist_title}");
      return Ok(playlist);
    }
    listeners.push(user_id);

    let followed = self.user_playlists.entry(user_id).or_default();
    if !followed.contains(&playlist.id) {
      followed.push(playlist.id);
    }

    debug!("playlist followed: {playlist_title} by {mobile}");
    Ok(playlist)
  }

  fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, CatalogError> {
    let user_id = self
      .user_by_mobile(mobile)
      .map(|u| u.id)
      .ok_or_else(|| CatalogError::not_found(EntityKind::User, mobile))?;

    let pos = self
      .songs
      .iter()
      .position(|s| s.title == song_title)
      .ok_or_else(|| CatalogError::not_found(EntityKind::Song, song_title))?;
    let song_id = self.songs[pos].id;

    let likers = self.song_likers.entry(song_id).or_default();
    if likers.contains(&user_id) {
      trace!("like ignored, already a liker: {mobile} -> {song_title}");
      return Ok(self.songs[pos].clone());
    }
    likers.push(user_id);
    self.songs[pos].likes += 1;

    // Propagación: un "me gusta" nuevo sube también el contador del
    // artista del álbum. Los duplicados no llegan hasta aquí.
    if let Some(artist_id) = self.artist_of(song_id) {
      if let Some(artist) = self.artists.iter_mut().find(|a| a.id == artist_id) {
        artist.likes += 1;
      }
    }

    debug!("song liked: {song_title} by {mobile}");
    Ok(self.songs[pos].clone())
  }

  fn find_user(&self, mobile: &str) -> Result<Option<User>, CatalogError> {
    Ok(self.user_by_mobile(mobile).cloned())
  }

  fn find_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError> {
    Ok(self.artist_by_name(name).cloned())
  }

  fn find_album(&self, title: &str) -> Result<Option<Album>, CatalogError> {
    Ok(self.album_by_title(title).cloned())
  }

  fn find_song(&self, title: &str) -> Result<Option<Song>, CatalogError> {
    Ok(self.song_by_title(title).cloned())
  }

  fn find_playlist(&self, title: &str) -> Result<Option<Playlist>, CatalogError> {
    Ok(self.playlist_by_title(title).cloned())
  }

  fn list_users(&self) -> Result<Vec<User>, CatalogError> {
    Ok(self.users.clone())
  }

  fn list_artists(&self) -> Result<Vec<Artist>, CatalogError> {
    Ok(self.artists.clone())
  }

  fn list_albums(&self) -> Result<Vec<Album>, CatalogError> {
    Ok(self.albums.clone())
  }

  fn list_songs(&self) -> Result<Vec<Song>, CatalogError> {
    Ok(self.songs.clone())
  }

  fn list_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
    Ok(self.playlists.clone())
  }

  fn most_popular_artist(&self) -> Result<String, CatalogError> {
    // Comparación estricta: los empates los conserva el primero en
    // orden de registro. Sin artistas no hay candidato.
    let mut best: Option<&Artist> = None;
    for artist in &self.artists {
      match best {
        Some(current) if artist.likes <= current.likes => {}
        _ => best = Some(artist),
      }
    }
    Ok(best.map(|a| a.name.clone()).unwrap_or_default())
  }

  fn most_popular_song(&self) -> Result<String, CatalogError> {
    // El umbral parte de cero: una canción sin "me gusta" nunca gana.
    let mut best_likes = 0;
    let mut best_title = String::new();
    for song in &self.songs {
      if song.likes > best_likes {
        best_likes = song.likes;
        best_title = song.title.clone();
      }
    }
    Ok(best_title)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn seeded() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.create_artist("Mercedes Sosa").unwrap();
    catalog.create_album("Cantora", "Mercedes Sosa").unwrap();
    catalog.create_song("Zona de Promesas", "Cantora", 215).unwrap();
    catalog.create_song("Deja la Vida Volar", "Cantora", 262).unwrap();
    catalog.create_user("Ana", "111").unwrap();
    catalog.create_user("Bruno", "222").unwrap();
    catalog
  }

  #[test]
  fn test_created_users_retrievable_by_mobile() {
    let mut catalog = MemoryCatalog::new();
    catalog.create_user("Ana", "111").unwrap();
    catalog.create_user("Bruno", "222").unwrap();

    let ana = catalog.find_user("111").unwrap().unwrap();
    assert_eq!(ana.name, "Ana");
    assert_eq!(catalog.find_user("333").unwrap(), None);

    let users = catalog.list_users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users.iter().filter(|u| u.mobile == "111").count(), 1);
    // Lista de playlists vacía desde el alta.
    assert!(catalog.playlists_of(ana.id).is_empty());
  }

  #[test]
  fn test_create_album_reuses_existing_artist_by_name() {
    let mut catalog = MemoryCatalog::new();
    catalog.create_artist("Soda Stereo").unwrap();
    catalog.create_artist("Gustavo Cerati").unwrap();

    // El artista buscado no es el primero del registro: aun así se
    // reutiliza en vez de crear un duplicado.
    let album = catalog.create_album("Bocanada", "Gustavo Cerati").unwrap();
    assert_eq!(catalog.list_artists().unwrap().len(), 2);

    let cerati = catalog.find_artist("Gustavo Cerati").unwrap().unwrap();
    assert_eq!(album.artist_id, cerati.id);
    assert_eq!(catalog.albums_of(cerati.id), &[album.id]);
  }

  #[test]
  fn test_create_album_creates_missing_artist() {
    let mut catalog = MemoryCatalog::new();
    let album = catalog.create_album("Clics Modernos", "Charly García").unwrap();

    let charly = catalog.find_artist("Charly García").unwrap().unwrap();
    assert_eq!(album.artist_id, charly.id);
    assert_eq!(charly.likes, 0);
    assert_eq!(catalog.list_artists().unwrap().len(), 1);
  }

  #[test]
  fn test_create_song_requires_existing_album() {
    let mut catalog = MemoryCatalog::new();
    let err = catalog.create_song("Huérfana", "No Existe", 180).unwrap_err();

    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Album, .. }));
    assert_eq!(err.to_string(), "album not found: No Existe");
    // El fallo no deja rastro en ningún registro.
    assert!(catalog.list_songs().unwrap().is_empty());
    assert!(catalog.list_albums().unwrap().is_empty());
  }

  #[test]
  fn test_playlist_by_length_attaches_matching_songs() {
    let mut catalog = seeded();
    catalog.create_song("Otra de 215", "Cantora", 215).unwrap();

    let playlist = catalog.create_playlist_by_length("111", "Solo 215", 215).unwrap();
    let attached = catalog.songs_in_playlist(playlist.id);
    assert_eq!(attached.len(), 2);

    let zona = catalog.find_song("Zona de Promesas").unwrap().unwrap();
    let otra = catalog.find_song("Otra de 215").unwrap().unwrap();
    assert_eq!(attached, &[zona.id, otra.id]);
  }

  #[test]
  fn test_playlist_by_titles_attaches_named_songs() {
    let mut catalog = seeded();
    let titles = vec!["Deja la Vida Volar".to_owned(), "No Registrada".to_owned()];
    let playlist = catalog.create_playlist_by_titles("111", "Favoritas", &titles).unwrap();

    let deja = catalog.find_song("Deja la Vida Volar").unwrap().unwrap();
    assert_eq!(catalog.songs_in_playlist(playlist.id), &[deja.id]);
  }

  #[test]
  fn test_playlist_creator_is_first_listener_and_owner() {
    let mut catalog = seeded();
    let playlist = catalog.create_playlist_by_length("111", "De Ana", 215).unwrap();

    let ana = catalog.find_user("111").unwrap().unwrap();
    assert_eq!(playlist.creator_id, ana.id);
    assert_eq!(catalog.listeners_of(playlist.id), &[ana.id]);
    assert_eq!(catalog.playlists_of(ana.id), &[playlist.id]);
    assert_eq!(catalog.created_playlist_of(ana.id), Some(playlist.id));
  }

  #[test]
  fn test_creator_playlist_record_keeps_only_the_latest() {
    let mut catalog = seeded();
    let first = catalog.create_playlist_by_length("111", "Primera", 215).unwrap();
    let second = catalog.create_playlist_by_titles("111", "Segunda", &[]).unwrap();

    let ana = catalog.find_user("111").unwrap().unwrap();
    // El registro singular se sobrescribe; la lista general acumula.
    assert_eq!(catalog.created_playlist_of(ana.id), Some(second.id));
    assert_eq!(catalog.playlists_of(ana.id), &[first.id, second.id]);
  }

  #[test]
  fn test_playlist_creation_requires_existing_user() {
    let mut catalog = seeded();
    let err = catalog.create_playlist_by_length("999", "Fantasma", 215).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::User, .. }));
    assert!(catalog.list_playlists().unwrap().is_empty());

    let err = catalog.create_playlist_by_titles("999", "Fantasma", &[]).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::User, .. }));
    assert!(catalog.list_playlists().unwrap().is_empty());
  }

  #[test]
  fn test_follow_playlist_is_idempotent() {
    let mut catalog = seeded();
    let playlist = catalog.create_playlist_by_length("111", "Compartida", 215).unwrap();

    let ana = catalog.find_user("111").unwrap().unwrap();
    let bruno = catalog.find_user("222").unwrap().unwrap();

    catalog.follow_playlist("222", "Compartida").unwrap();
    assert_eq!(catalog.listeners_of(playlist.id), &[ana.id, bruno.id]);
    assert_eq!(catalog.playlists_of(bruno.id), &[playlist.id]);

    // Repetir no duplica ni reordena; el creador tampoco se duplica.
    catalog.follow_playlist("222", "Compartida").unwrap();
    catalog.follow_playlist("111", "Compartida").unwrap();
    assert_eq!(catalog.listeners_of(playlist.id), &[ana.id, bruno.id]);
    assert_eq!(catalog.playlists_of(bruno.id), &[playlist.id]);
  }

  #[test]
  fn test_follow_playlist_not_found_errors() {
    let mut catalog = seeded();
    let err = catalog.follow_playlist("999", "Nada").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::User, .. }));

    let err = catalog.follow_playlist("111", "Nada").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Playlist, .. }));
  }

  #[test]
  fn test_like_song_is_idempotent_and_counts_match_likers() {
    let mut catalog = seeded();

    let song = catalog.like_song("111", "Zona de Promesas").unwrap();
    assert_eq!(song.likes, 1);

    // Segunda llamada: mismo estado que tras la primera.
    let song = catalog.like_song("111", "Zona de Promesas").unwrap();
    assert_eq!(song.likes, 1);
    assert_eq!(catalog.likers_of(song.id).len(), 1);

    let song = catalog.like_song("222", "Zona de Promesas").unwrap();
    assert_eq!(song.likes, 2);
    assert_eq!(catalog.likers_of(song.id).len(), song.likes as usize);

    let ana = catalog.find_user("111").unwrap().unwrap();
    assert_eq!(catalog.liked_song_count(ana.id), 1);
  }

  #[test]
  fn test_like_song_propagates_once_to_artist() {
    let mut catalog = seeded();

    catalog.like_song("111", "Zona de Promesas").unwrap();
    catalog.like_song("111", "Zona de Promesas").unwrap();
    catalog.like_song("222", "Deja la Vida Volar").unwrap();

    let sosa = catalog.find_artist("Mercedes Sosa").unwrap().unwrap();
    assert_eq!(sosa.likes, 2);
  }

  #[test]
  fn test_like_song_not_found_errors() {
    let mut catalog = seeded();
    let err = catalog.like_song("999", "Zona de Promesas").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::User, .. }));

    let err = catalog.like_song("111", "Inexistente").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Song, .. }));

    let song = catalog.find_song("Zona de Promesas").unwrap().unwrap();
    assert_eq!(song.likes, 0);
    assert!(catalog.likers_of(song.id).is_empty());
  }

  #[test]
  fn test_most_popular_artist_empty_and_ties() {
    let mut catalog = MemoryCatalog::new();
    assert_eq!(catalog.most_popular_artist().unwrap(), "");

    // Con cero likes gana el primero registrado.
    catalog.create_artist("Primero").unwrap();
    catalog.create_artist("Segundo").unwrap();
    assert_eq!(catalog.most_popular_artist().unwrap(), "Primero");

    catalog.create_album("B", "Segundo").unwrap();
    catalog.create_song("Tema B", "B", 100).unwrap();
    catalog.create_user("Ana", "111").unwrap();
    catalog.like_song("111", "Tema B").unwrap();
    assert_eq!(catalog.most_popular_artist().unwrap(), "Segundo");
  }

  #[test]
  fn test_most_popular_song_requires_at_least_one_like() {
    let mut catalog = seeded();
    assert_eq!(catalog.most_popular_song().unwrap(), "");

    catalog.like_song("111", "Deja la Vida Volar").unwrap();
    assert_eq!(catalog.most_popular_song().unwrap(), "Deja la Vida Volar");

    // Empate a un like: lo conserva la registrada primero.
    catalog.like_song("222", "Zona de Promesas").unwrap();
    assert_eq!(catalog.most_popular_song().unwrap(), "Deja la Vida Volar");
  }

  #[test]
  fn test_end_to_end_scenario() {
    let mut catalog = MemoryCatalog::new();
    catalog.create_artist("A1").unwrap();
    catalog.create_album("Alb1", "A1").unwrap();
    catalog.create_song("S1", "Alb1", 200).unwrap();
    catalog.create_user("U1", "111").unwrap();

    let song = catalog.like_song("111", "S1").unwrap();
    assert_eq!(song.likes, 1);
    assert_eq!(catalog.most_popular_song().unwrap(), "S1");
    assert_eq!(catalog.most_popular_artist().unwrap(), "A1");
  }
}
