use std::{fmt::Display, str::FromStr};

use snafu::{Location, Snafu};

/// International Maritime Organization number, the identity a vessel keeps
/// for its whole lifetime. Seven digits where the last is a check digit:
/// the first six digits weighted 7 down to 2, summed, modulo 10.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Imo(String);

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ImoError {
    #[snafu(display("IMO number was not exactly 7 digits: '{value}'"))]
    Malformed {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
    #[snafu(display("IMO number failed the check digit test: '{value}'"))]
    CheckDigit {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

impl FromStr for Imo {
    type Err = ImoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.len() != 7 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return imo_error::MalformedSnafu { value }.fail();
        }

        let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
        let sum: u32 = digits[..6].iter().zip((2..=7).rev()).map(|(d, w)| d * w).sum();
        if sum % 10 != digits[6] {
            return imo_error::CheckDigitSnafu { value }.fail();
        }

        Ok(Imo(value.into()))
    }
}

impl TryFrom<&str> for Imo {
    type Error = ImoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Imo {
    type Error = ImoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for Imo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Imo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Imo {
    pub fn into_inner(self) -> String {
        self.0
    }
}
