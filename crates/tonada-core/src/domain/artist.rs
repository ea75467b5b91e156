use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del sistema.
///
/// Un artista es la identidad artística base que agrupa sus álbumes.
/// Su contador de "me gusta" es un agregado: nunca se incrementa
/// directamente, solo por propagación cuando un usuario marca como
/// favorita una canción de uno de sus álbumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre principal (canónico) del artista.
  pub name: String,

  /// "Me gusta" acumulados vía propagación desde sus canciones.
  pub likes: u32,
}
