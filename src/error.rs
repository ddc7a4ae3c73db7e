use std::fmt;

/// Catégorie d'échec commune aux opérations du cœur.
///
/// Permet à l'appelant (CLI, shell) de réagir sans inspecter le détail
/// de chaque type d'erreur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Employé, date ou fichier absent.
    NotFound,
    /// Index de créneau (ou date calculée) hors bornes.
    OutOfRange,
    /// Employé non disponible ce jour-là.
    Unavailable,
    /// Données persistées illisibles.
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::Malformed => "malformed",
        };
        f.write_str(s)
    }
}
