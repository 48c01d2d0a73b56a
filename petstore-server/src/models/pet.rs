//! Pet resource types
//!
//! `Pet` is the persisted shape, `NewPet` the validated create payload and
//! `PetUpdate` the partial update where `None` means "leave as stored".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// Store-assigned pet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(Uuid);

impl PetId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A persisted pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub age: i32,
    pub owner_name: String,
}

impl Pet {
    /// Overlay the supplied fields of `update` onto this pet.
    ///
    /// Unset fields keep their stored value; `id` never changes.
    pub fn merge(self, update: PetUpdate) -> Pet {
        Pet {
            id: self.id,
            name: update.name.unwrap_or(self.name),
            pet_type: update.pet_type.unwrap_or(self.pet_type),
            age: update.age.unwrap_or(self.age),
            owner_name: update.owner_name.unwrap_or(self.owner_name),
        }
    }
}

/// Validated payload for creating a pet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_name: String,
}

impl NewPet {
    /// Build a create payload, rejecting empty text and negative ages.
    ///
    /// # Example
    /// ```
    /// use petstore_server::models::NewPet;
    ///
    /// assert!(NewPet::new("Buddy", "dog", 5, "John Doe").is_ok());
    /// assert!(NewPet::new("", "dog", 5, "John Doe").is_err());
    /// assert!(NewPet::new("Buddy", "dog", -1, "John Doe").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        pet_type: impl Into<String>,
        age: i32,
        owner_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = non_empty("name", name.into())?;
        let pet_type = non_empty("type", pet_type.into())?;
        let owner_name = non_empty("ownerName", owner_name.into())?;

        if age < 0 {
            return Err(ValidationError::Negative { field: "age" });
        }

        Ok(Self {
            name,
            pet_type,
            age,
            owner_name,
        })
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Partial update; omitted and `null` fields both deserialize to `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub age: Option<i32>,
    pub owner_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buddy() -> Pet {
        Pet {
            id: PetId::new(Uuid::new_v4()),
            name: "Buddy".into(),
            pet_type: "dog".into(),
            age: 5,
            owner_name: "John Doe".into(),
        }
    }

    #[test]
    fn merge_only_overwrites_supplied_fields() {
        let before = buddy();
        let after = before.clone().merge(PetUpdate {
            age: Some(6),
            ..Default::default()
        });

        assert_eq!(after.age, 6);
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.pet_type, before.pet_type);
        assert_eq!(after.owner_name, before.owner_name);
    }

    #[test]
    fn empty_update_is_identity() {
        let before = buddy();
        assert_eq!(before.clone().merge(PetUpdate::default()), before);
    }

    #[test]
    fn update_treats_null_as_unset() {
        let update: PetUpdate =
            serde_json::from_str(r#"{"name": null, "ownerName": "Jane Smith"}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.owner_name.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn update_reads_type_key() {
        let update: PetUpdate = serde_json::from_str(r#"{"type": "cat"}"#).unwrap();
        assert_eq!(update.pet_type.as_deref(), Some("cat"));
    }

    #[test]
    fn pet_serializes_api_field_names() {
        let value = serde_json::to_value(buddy()).unwrap();
        assert_eq!(value["type"], "dog");
        assert_eq!(value["ownerName"], "John Doe");
        assert!(value.get("owner_name").is_none());
        assert!(value.get("pet_type").is_none());
    }

    #[test]
    fn new_pet_rejects_empty_fields() {
        let err = NewPet::new("Buddy", "", 5, "John Doe").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "type" });

        let err = NewPet::new("Buddy", "dog", 5, "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "ownerName" });
    }

    #[test]
    fn new_pet_accepts_zero_age() {
        assert!(NewPet::new("Buddy", "dog", 0, "John Doe").is_ok());
    }

    #[test]
    fn pet_id_parses_uuid() {
        let uuid = Uuid::new_v4();
        let id: PetId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), uuid);
        assert!("not-a-uuid".parse::<PetId>().is_err());
    }
}
