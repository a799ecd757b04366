//! Utilidades de validación
//!
//! Reglas de campo para `Usuario`. Cada helper devuelve un
//! `validator::ValidationError` con el mensaje que se muestra al cliente;
//! `validate_usuario` las aplica en orden y se detiene en el primer fallo.

use std::borrow::Cow;
use validator::ValidationError;

use crate::models::usuario::Usuario;

pub const NULL_USER_MESSAGE: &str = "user cannot be null.";
pub const INVALID_ID_MESSAGE: &str = "Id must be a positive number.";
pub const NAME_REQUIRED_MESSAGE: &str = "name is required.";
pub const EMAIL_REQUIRED_MESSAGE: &str = "email is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "email is not valid.";

/// Longitud mínima aceptada para un email
pub const EMAIL_MIN_LENGTH: usize = 5;

/// Resultado de validar un usuario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = error_with_message("not_empty", message);
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un id sea positivo
pub fn validate_positive_id(id: i32) -> Result<(), ValidationError> {
    if id <= 0 {
        let mut error = error_with_message("positive", INVALID_ID_MESSAGE);
        error.add_param("value".into(), &id);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email: debe contener `@` y tener al menos 5 caracteres
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || value.chars().count() < EMAIL_MIN_LENGTH {
        let mut error = error_with_message("email", INVALID_EMAIL_MESSAGE);
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

fn check_usuario(usuario: Option<&Usuario>, require_id_positive: bool) -> Result<(), ValidationError> {
    let usuario = usuario.ok_or_else(|| error_with_message("required", NULL_USER_MESSAGE))?;

    if require_id_positive {
        validate_positive_id(usuario.id)?;
    }
    validate_not_empty(&usuario.nombre, NAME_REQUIRED_MESSAGE)?;
    validate_not_empty(&usuario.email, EMAIL_REQUIRED_MESSAGE)?;
    validate_email(&usuario.email)?;

    Ok(())
}

/// Validar un usuario candidato.
///
/// `require_id_positive` es `true` al crear y `false` al actualizar, ya que
/// en la actualización el id viene de la ruta y no del payload.
pub fn validate_usuario(usuario: Option<&Usuario>, require_id_positive: bool) -> ValidationResult {
    match check_usuario(usuario, require_id_positive) {
        Ok(()) => ValidationResult::Valid,
        Err(error) => ValidationResult::Invalid(
            error
                .message
                .map(|message| message.into_owned())
                .unwrap_or_else(|| error.code.into_owned()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(message: &str) -> ValidationResult {
        ValidationResult::Invalid(message.to_string())
    }

    #[test]
    fn test_valid_usuario() {
        let usuario = Usuario::new(1, "Ana", "ana@x.com");
        assert_eq!(validate_usuario(Some(&usuario), true), ValidationResult::Valid);
        assert!(validate_usuario(Some(&usuario), false).is_valid());
    }

    #[test]
    fn test_null_usuario() {
        assert_eq!(validate_usuario(None, true), invalid(NULL_USER_MESSAGE));
        assert_eq!(validate_usuario(None, false), invalid(NULL_USER_MESSAGE));
    }

    #[test]
    fn test_id_only_checked_when_required() {
        let usuario = Usuario::new(0, "Ana", "ana@x.com");
        assert_eq!(validate_usuario(Some(&usuario), true), invalid(INVALID_ID_MESSAGE));
        assert_eq!(validate_usuario(Some(&usuario), false), ValidationResult::Valid);

        let negativo = Usuario::new(-3, "Ana", "ana@x.com");
        assert_eq!(validate_usuario(Some(&negativo), true), invalid(INVALID_ID_MESSAGE));
    }

    #[test]
    fn test_blank_name_is_invalid_regardless_of_id_rule() {
        for nombre in ["", " ", "\t\n"] {
            let usuario = Usuario::new(1, nombre, "ana@x.com");
            assert_eq!(validate_usuario(Some(&usuario), true), invalid(NAME_REQUIRED_MESSAGE));
            assert_eq!(validate_usuario(Some(&usuario), false), invalid(NAME_REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn test_blank_email() {
        let usuario = Usuario::new(1, "Ana", "   ");
        assert_eq!(validate_usuario(Some(&usuario), true), invalid(EMAIL_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_email_format() {
        let corto = Usuario::new(1, "Ana", "a@b");
        assert_eq!(validate_usuario(Some(&corto), true), invalid(INVALID_EMAIL_MESSAGE));

        let sin_arroba = Usuario::new(1, "Ana", "abcde");
        assert_eq!(validate_usuario(Some(&sin_arroba), true), invalid(INVALID_EMAIL_MESSAGE));

        let minimo = Usuario::new(1, "Ana", "a@bcd");
        assert_eq!(validate_usuario(Some(&minimo), true), ValidationResult::Valid);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let usuario = Usuario::new(0, "", "");
        assert_eq!(validate_usuario(Some(&usuario), true), invalid(INVALID_ID_MESSAGE));
        assert_eq!(validate_usuario(Some(&usuario), false), invalid(NAME_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_field_helpers() {
        assert!(validate_positive_id(1).is_ok());
        assert!(validate_positive_id(0).is_err());
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_not_empty("x", NAME_REQUIRED_MESSAGE).is_ok());
        assert!(validate_not_empty(" ", NAME_REQUIRED_MESSAGE).is_err());
    }
}
