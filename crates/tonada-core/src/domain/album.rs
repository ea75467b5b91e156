use crate::domain::ids::{AlbumId, ArtistId};
use serde::{Deserialize, Serialize};

/// Representa un álbum publicado por un artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  /// Identificador único del álbum.
  pub id: AlbumId,

  /// Título del álbum tal como aparece oficialmente.
  pub title: String,

  /// Artista propietario. Referencia fuerte por ID; el catálogo
  /// garantiza que el artista existe antes de crear el álbum.
  pub artist_id: ArtistId,
}
