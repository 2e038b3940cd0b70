/// Minimum number of digits a WhatsApp number must carry.
pub const MIN_PHONE_DIGITS: usize = 6;

/// Shown when the phone field is left blank.
pub const EMPTY_PHONE_MESSAGE: &str = "Por favor ingresa tu número de WhatsApp";

/// Shown when the number has too few digits.
pub const INVALID_PHONE_MESSAGE: &str = "Por favor ingresa un número de WhatsApp válido";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("phone number is empty")]
    EmptyPhoneNumber,

    #[error("phone number has {digits} digits, need at least {}", MIN_PHONE_DIGITS)]
    PhoneTooShort { digits: usize },
}

impl ContactError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::EmptyPhoneNumber => EMPTY_PHONE_MESSAGE,
            ContactError::PhoneTooShort { .. } => INVALID_PHONE_MESSAGE,
        }
    }
}

/// Check a raw phone entry and return only its digits.
pub fn validate_phone(raw: &str) -> Result<String, ContactError> {
    if raw.trim().is_empty() {
        return Err(ContactError::EmptyPhoneNumber);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ContactError::PhoneTooShort {
            digits: digits.len(),
        });
    }

    Ok(digits)
}
