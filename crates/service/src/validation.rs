//! Stateless checks turning a [`RawUserFields`] into a [`NewUser`].

use chrono::NaiveDate;

use crate::domain::{NewUser, RawUserFields};
use crate::errors::RegistryError;

pub const CPF_LEN: usize = 11;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate and normalize a registration request.
///
/// Required fields are checked in declaration order and the first missing one
/// is reported. Values are trimmed; a blank value counts as missing.
pub fn validate(raw: RawUserFields) -> Result<NewUser, RegistryError> {
    let cpf = required("cpf", raw.cpf)?;
    let first_name = required("first_name", raw.first_name)?;
    let last_name = required("last_name", raw.last_name)?;
    let email = required("email", raw.email)?;

    if cpf.chars().count() != CPF_LEN {
        return Err(RegistryError::InvalidCpf(cpf));
    }

    let birth_date = match raw.data_nascimento.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(parse_birth_date(s)?),
    };

    Ok(NewUser { cpf, first_name, last_name, email, birth_date })
}

/// Parse a strict ISO calendar date (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, RegistryError> {
    let invalid = || RegistryError::InvalidDateFormat(raw.to_string());
    let b = raw.as_bytes();
    // chrono accepts signs and unpadded fields; the wire format does not
    let shaped = b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

fn required(name: &'static str, value: Option<String>) -> Result<String, RegistryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(RegistryError::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> RawUserFields {
        RawUserFields {
            cpf: Some("12345678901".into()),
            first_name: Some("Ana".into()),
            last_name: Some("Silva".into()),
            email: Some("ana@x.com".into()),
            data_nascimento: None,
        }
    }

    #[test]
    fn accepts_minimal_input() {
        let u = validate(ana()).unwrap();
        assert_eq!(u.cpf, "12345678901");
        assert_eq!(u.email, "ana@x.com");
        assert_eq!(u.birth_date, None);
    }

    #[test]
    fn each_required_field_reported() {
        let cases: [(&'static str, fn(&mut RawUserFields)); 4] = [
            ("cpf", |r| r.cpf = None),
            ("first_name", |r| r.first_name = None),
            ("last_name", |r| r.last_name = None),
            ("email", |r| r.email = None),
        ];
        for (name, clear) in cases {
            let mut raw = ana();
            clear(&mut raw);
            assert_eq!(validate(raw), Err(RegistryError::MissingField(name)));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let raw = RawUserFields { email: Some("a@b.c".into()), ..Default::default() };
        assert_eq!(validate(raw), Err(RegistryError::MissingField("cpf")));
    }

    #[test]
    fn blank_counts_as_missing() {
        let mut raw = ana();
        raw.last_name = Some("   ".into());
        assert_eq!(validate(raw), Err(RegistryError::MissingField("last_name")));
    }

    #[test]
    fn values_are_trimmed() {
        let mut raw = ana();
        raw.first_name = Some("  Ana ".into());
        assert_eq!(validate(raw).unwrap().first_name, "Ana");
    }

    #[test]
    fn cpf_length_enforced() {
        let mut raw = ana();
        raw.cpf = Some("123".into());
        assert_eq!(validate(raw), Err(RegistryError::InvalidCpf("123".into())));
    }

    #[test]
    fn iso_date_parsed() {
        let mut raw = ana();
        raw.data_nascimento = Some("2020-01-01".into());
        let u = validate(raw).unwrap();
        assert_eq!(u.birth_date, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn malformed_date_rejected() {
        let mut raw = ana();
        raw.data_nascimento = Some("01-2020-01".into());
        assert_eq!(validate(raw), Err(RegistryError::InvalidDateFormat("01-2020-01".into())));
    }

    #[test]
    fn date_edge_cases() {
        assert!(parse_birth_date("2020-02-30").is_err());
        assert!(parse_birth_date("2020-1-01").is_err());
        assert!(parse_birth_date("2020/01/01").is_err());
        assert!(parse_birth_date("+020-01-01").is_err());
        assert!(parse_birth_date("-020-01-01").is_err());
        assert!(parse_birth_date("２０２０-01-01").is_err());
        assert!(parse_birth_date("2020-0a-01").is_err());
        assert!(parse_birth_date("2024-02-29").is_ok());
    }

    #[test]
    fn signed_year_rejected_at_validation() {
        let mut raw = ana();
        raw.data_nascimento = Some("+020-01-01".into());
        assert_eq!(validate(raw), Err(RegistryError::InvalidDateFormat("+020-01-01".into())));
    }

    #[test]
    fn empty_date_is_absent() {
        let mut raw = ana();
        raw.data_nascimento = Some("".into());
        assert_eq!(validate(raw).unwrap().birth_date, None);
    }
}
