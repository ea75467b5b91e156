use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un usuario.
///
/// La clave *natural* de un usuario es su número de móvil, pero las
/// relaciones internas del catálogo se indexan siempre por este ID
/// asignado en la creación, nunca por el móvil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    UserId(Uuid::new_v4())
  }

  /// Construye un `UserId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    UserId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for UserId {
  fn from(u: Uuid) -> Self {
    UserId(u)
  }
}

impl From<UserId> for Uuid {
  fn from(id: UserId) -> Self {
    id.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl From<ArtistId> for Uuid {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de un álbum.
///
/// Toda relación entre entidades usa IDs tipados, nunca títulos ni
/// nombres: dos entidades con los mismos campos siguen siendo
/// distinguibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(Uuid);

impl AlbumId {
  pub fn new() -> Self {
    AlbumId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    AlbumId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for AlbumId {
  fn from(u: Uuid) -> Self {
    AlbumId(u)
  }
}

impl From<AlbumId> for Uuid {
  fn from(id: AlbumId) -> Self {
    id.0
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    SongId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u)
  }
}

impl From<SongId> for Uuid {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de una playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(Uuid);

impl PlaylistId {
  pub fn new() -> Self {
    PlaylistId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    PlaylistId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for PlaylistId {
  fn from(u: Uuid) -> Self {
    PlaylistId(u)
  }
}

impl From<PlaylistId> for Uuid {
  fn from(id: PlaylistId) -> Self {
    id.0
  }
}

impl fmt::Display for PlaylistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
