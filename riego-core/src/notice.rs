//! User-facing notices shared by the web dialogs and the CLI.

use crate::field::Field;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
    Success,
}

impl NoticeKind {
    pub fn icon(self) -> &'static str {
        match self {
            NoticeKind::Warning => "⚠️",
            NoticeKind::Error => "❌",
            NoticeKind::Success => "✅",
        }
    }
}

/// A titled message shown in a dialog (web) or on stderr (CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn empty_field(field: Field) -> Self {
        Self::new(
            NoticeKind::Warning,
            "Campo vacío",
            format!("Por favor completa el campo \"{}\".", field.key()),
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new(NoticeKind::Error, "Error", "Usuario o contraseña incorrectos")
    }

    /// Generic transport/server failure. The cause is logged, never shown.
    pub fn server_unreachable() -> Self {
        Self::new(
            NoticeKind::Error,
            "Error",
            "No se pudo obtener respuesta del servidor.",
        )
    }

    pub fn signed_out() -> Self {
        Self::new(
            NoticeKind::Success,
            "Sesión cerrada",
            "Has cerrado sesión correctamente.",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind.icon(), self.title, self.text)
    }
}

/// Text of the logout confirmation prompt.
pub struct LogoutPrompt;

impl LogoutPrompt {
    pub const TITLE: &'static str = "¿Estás seguro?";
    pub const TEXT: &'static str = "Se cerrará tu sesión actual.";
    pub const CONFIRM: &'static str = "Sí, cerrar sesión";
    pub const CANCEL: &'static str = "Cancelar";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_names_the_key() {
        let notice = Notice::empty_field(Field::SolarRadiation);
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, "Por favor completa el campo \"radiacionSolar\".");
    }

    #[test]
    fn test_server_notice_is_generic() {
        let notice = Notice::server_unreachable();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.starts_with("No se pudo obtener respuesta del servidor"));
    }
}
