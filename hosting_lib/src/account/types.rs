use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    #[serde(rename = "Primary Contact")]
    PrimaryContact,
    #[serde(rename = "Accounts")]
    Accounts,
    #[serde(rename = "Technical")]
    Technical,
    #[serde(rename = "Third Party")]
    ThirdParty,
    #[serde(rename = "Other")]
    Other,
}
impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContactType::PrimaryContact => "Primary Contact",
                ContactType::Accounts => "Accounts",
                ContactType::Technical => "Technical",
                ContactType::ThirdParty => "Third Party",
                ContactType::Other => "Other",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Contact {
    pub id: i64,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub first_name: String,
    pub last_name: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Prepaid credit balance of one type.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credit {
    #[serde(rename = "type")]
    pub credit_type: String,
    pub total: i64,
    pub remaining: i64,
}
