//! Stateless format validators.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-([0-9a-f]{4}-){3}[0-9a-f]{12}$").expect("valid GUID pattern")
});

// Full eight-group form only; `::` shorthand is rejected.
static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-f]{1,4}:){7}([0-9a-f]{1,4})$").expect("valid IPv6 pattern")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d{1,3})?\d{9,15}$").expect("valid phone pattern")
});

static SPANISH_DNI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{8})([A-Z])$").expect("valid DNI pattern")
});

/// Control letters indexed by the DNI number modulo 23.
const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date")]
    InvalidDate,
    #[error("Invalid phone number")]
    InvalidPhoneNumber,
}

/// Parses a date written day first, `dd/mm/yyyy`.
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    let mut parts = date.split('/').map(|p| p.trim().parse::<u32>());
    let (Some(Ok(day)), Some(Ok(month)), Some(Ok(year)), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ValidationError::InvalidDate);
    };

    let year = i32::try_from(year).map_err(|_| ValidationError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDate)
}

pub fn validate_guid(guid: &str) -> bool {
    GUID.is_match(guid)
}

pub fn validate_ipv6(ipv6: &str) -> bool {
    IPV6.is_match(ipv6)
}

/// Validates a phone number and returns its `+CC` prefix, empty when absent.
pub fn validate_phone_number(phone_number: &str) -> Result<String, ValidationError> {
    let captures = PHONE
        .captures(phone_number)
        .ok_or(ValidationError::InvalidPhoneNumber)?;
    Ok(captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default())
}

/// Checks a Spanish DNI: eight digits followed by the control letter those
/// digits select. The letter may be either case.
pub fn validate_spanish_dni(dni: &str) -> bool {
    let Some(captures) = SPANISH_DNI.captures(dni) else {
        return false;
    };
    let Ok(number) = captures[1].parse::<u32>() else {
        return false;
    };
    let expected = DNI_LETTERS[(number % 23) as usize];
    captures[2].as_bytes()[0].eq_ignore_ascii_case(&expected)
}
