use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};

/// Representa una canción concreta dentro de un álbum.
///
/// Una canción no puede existir sin un álbum previo; la relación
/// álbum → canciones vive en el catálogo, no aquí.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción.
  pub id: SongId,

  /// El título de la canción.
  pub title: String,

  /// Duración en segundos.
  pub duration_secs: u32,

  /// "Me gusta" recibidos. Invariante: siempre igual al tamaño de la
  /// lista de likers que el catálogo mantiene para esta canción.
  pub likes: u32,
}
