//! Contact form validation.
//!
//! Submissions are not sent anywhere; a valid form only produces a
//! confirmation toast.

use jacare_core::{Email, EmailError};
use serde::Deserialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// At least one field is blank.
    #[error("missing contact fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid contact email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A contact form that passed validation, with fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Check that every field is filled in and the email is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] naming every blank field, or
    /// [`ContactError::InvalidEmail`] if the address does not parse.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        Ok(ContactSubmission {
            name: self.name.trim().to_owned(),
            email: Email::parse(&self.email)?,
            phone: self.phone.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " João da Silva ".to_owned(),
            email: "Joao@Oficina.com.br".to_owned(),
            phone: "(11) 98765-4321".to_owned(),
            message: "Vocês têm pastilha para Gol G5?".to_owned(),
        }
    }

    #[test]
    fn test_valid_form() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "João da Silva");
        assert_eq!(submission.email.as_str(), "joao@oficina.com.br");
    }

    #[test]
    fn test_blank_fields_reported() {
        let form = ContactForm {
            phone: "   ".to_owned(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingFields(vec!["phone", "message"]))
        );
    }

    #[test]
    fn test_empty_form() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "missing contact fields: name, email, phone, message");
    }

    #[test]
    fn test_bad_email() {
        let form = ContactForm {
            email: "joao-sem-arroba".to_owned(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidEmail(EmailError::MissingAtSymbol))
        );
    }
}
