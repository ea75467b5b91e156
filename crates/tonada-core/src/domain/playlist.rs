use crate::domain::ids::{PlaylistId, UserId};
use serde::{Deserialize, Serialize};

/// Representa una playlist creada por un usuario.
///
/// El creador queda registrado aparte de la lista general de oyentes,
/// aunque también es siempre el primer oyente. Las canciones y los
/// oyentes de la playlist viven en los mapas de relación del catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  /// Identificador único de la playlist.
  pub id: PlaylistId,

  /// Título de la playlist.
  pub title: String,

  /// Usuario que originó la playlist.
  pub creator_id: UserId,
}
