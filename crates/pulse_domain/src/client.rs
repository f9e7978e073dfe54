use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Identity of a bank client as issued by the backend.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Display, From)]
#[serde(transparent)]
pub struct ClientCode(i64);

impl ClientCode {
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for ClientCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// A bank customer record shown in the dashboard table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Client {
    pub client_code: ClientCode,
    pub name: String,
    pub product: String,
    pub status: ClientStatus,
    pub city: String,
}

impl Client {
    pub fn code(&self) -> ClientCode {
        self.client_code
    }
}

/// Segment the backend assigns to a client. Unknown values are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientStatus {
    #[strum(serialize = "Зарплатный клиент")]
    Salaried,
    #[strum(serialize = "Премиальный клиент")]
    Premium,
    #[strum(serialize = "Студент")]
    Student,
    #[strum(serialize = "Стандартный клиент")]
    Standard,
    #[strum(default)]
    Other(String),
}

impl ClientStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClientStatus::Salaried => "Зарплатный клиент",
            ClientStatus::Premium => "Премиальный клиент",
            ClientStatus::Student => "Студент",
            ClientStatus::Standard => "Стандартный клиент",
            ClientStatus::Other(status) => status,
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            ClientStatus::Salaried | ClientStatus::Premium => BadgeStyle::Primary,
            ClientStatus::Student => BadgeStyle::Secondary,
            ClientStatus::Standard | ClientStatus::Other(_) => BadgeStyle::Outline,
        }
    }
}

impl From<String> for ClientStatus {
    fn from(value: String) -> Self {
        match ClientStatus::from_str(&value) {
            Ok(status) => status,
            Err(_) => ClientStatus::Other(value),
        }
    }
}

impl From<ClientStatus> for String {
    fn from(value: ClientStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Secondary,
    Outline,
}
