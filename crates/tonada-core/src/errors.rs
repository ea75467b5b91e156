use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Clase de entidad a la que se refiere un fallo de búsqueda.
///
/// Se usa junto con [`CatalogError::NotFound`] para que las capas
/// superiores (HTTP, CLI, etc.) puedan distinguir qué registro faltó
/// sin analizar el mensaje de texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
  User,
  Artist,
  Album,
  Song,
  Playlist,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      EntityKind::User => "user",
      EntityKind::Artist => "artist",
      EntityKind::Album => "album",
      EntityKind::Song => "song",
      EntityKind::Playlist => "playlist",
    };
    f.write_str(name)
  }
}

/// Error genérico del núcleo de Tonada.
///
/// Las capas superiores deberían mapear este error a mensajes de
/// usuario o logs. Todos los fallos son deterministas: dada la misma
/// entrada y el mismo estado, el resultado es el mismo, así que no
/// tiene sentido reintentar.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// Una búsqueda por clave natural (mobile, título, nombre) no
  /// encontró la entidad. La operación que falló no mutó nada.
  #[error("{kind} not found: {key}")]
  NotFound { kind: EntityKind, key: String },
}

impl CatalogError {
  pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
    CatalogError::NotFound { kind, key: key.into() }
  }
}
