use crate::domain::ids::UserId;
use serde::{Deserialize, Serialize};

/// Representa a un oyente dentro del sistema.
///
/// El número de móvil es la clave natural con la que las operaciones
/// públicas localizan al usuario; el catálogo no impone unicidad sobre
/// el nombre. El contador de "me gusta" de un usuario es derivado
/// (cuántas listas de likers lo contienen) y nunca se almacena aquí.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  /// Identificador único del usuario.
  pub id: UserId,

  /// Nombre visible del usuario.
  pub name: String,

  /// Número de móvil, clave de búsqueda.
  pub mobile: String,
}
