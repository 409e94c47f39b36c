use core::str::FromStr;

use serde::{Deserialize, Serialize};

use prodcat_core::{DomainError, Entity, UserId};

/// Sex of a user, as encoded by the source data (`"m"` / `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(DomainError::validation(format!(
                "sex must be \"m\" or \"f\", got {other:?}"
            ))),
        }
    }
}

/// A user who owns product categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex,
        }
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_round_trips_through_its_code() {
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(Sex::Male.as_str(), "m");
    }

    #[test]
    fn sex_rejects_unknown_code() {
        let err = "x".parse::<Sex>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for unknown sex"),
        }
    }

    #[test]
    fn deserializes_source_shape() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Roma","sex":"m"}"#).unwrap();
        assert_eq!(user, User::new(1, "Roma", Sex::Male));
        assert!(!user.is_female());
    }
}
