//! Pet repository
//!
//! Every statement is parameterized. Column names come from `PetField`, the
//! single place where API field names meet storage column names.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::models::{Analytics, NewPet, Pet, PetId, PetUpdate, TypeStatistic};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Writable pet attributes and where each one lives in the `pets` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetField {
    Name,
    Type,
    Age,
    OwnerName,
}

impl PetField {
    pub const ALL: [PetField; 4] = [Self::Name, Self::Type, Self::Age, Self::OwnerName];

    /// Field name in JSON payloads.
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Age => "age",
            Self::OwnerName => "ownerName",
        }
    }

    /// Column name in the `pets` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Age => "age",
            Self::OwnerName => "owner_name",
        }
    }

    fn is_set(self, update: &PetUpdate) -> bool {
        match self {
            Self::Name => update.name.is_some(),
            Self::Type => update.pet_type.is_some(),
            Self::Age => update.age.is_some(),
            Self::OwnerName => update.owner_name.is_some(),
        }
    }

    fn value(self, fields: &PetFields<'_>) -> FieldValue {
        match self {
            Self::Name => FieldValue::Text(fields.name.to_owned()),
            Self::Type => FieldValue::Text(fields.pet_type.to_owned()),
            Self::Age => FieldValue::Int(fields.age),
            Self::OwnerName => FieldValue::Text(fields.owner_name.to_owned()),
        }
    }
}

enum FieldValue {
    Text(String),
    Int(i32),
}

/// Borrowed view over the writable attributes of a pet record.
struct PetFields<'a> {
    name: &'a str,
    pet_type: &'a str,
    age: i32,
    owner_name: &'a str,
}

impl<'a> From<&'a Pet> for PetFields<'a> {
    fn from(p: &'a Pet) -> Self {
        Self {
            name: &p.name,
            pet_type: &p.pet_type,
            age: p.age,
            owner_name: &p.owner_name,
        }
    }
}

impl<'a> From<&'a NewPet> for PetFields<'a> {
    fn from(p: &'a NewPet) -> Self {
        Self {
            name: &p.name,
            pet_type: &p.pet_type,
            age: p.age,
            owner_name: &p.owner_name,
        }
    }
}

/// API names of the fields a partial update sets.
fn supplied_fields(update: &PetUpdate) -> Vec<&'static str> {
    PetField::ALL
        .into_iter()
        .filter(|f| f.is_set(update))
        .map(PetField::api_name)
        .collect()
}

/// `id` followed by every mapped column, for SELECT and RETURNING lists.
fn select_list() -> String {
    let mut columns = vec!["id"];
    columns.extend(PetField::ALL.iter().map(|f| f.column()));
    columns.join(", ")
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => builder.push_bind(v),
        FieldValue::Int(v) => builder.push_bind(v),
    };
}

fn insert_statement(pet: &NewPet) -> QueryBuilder<'static, Postgres> {
    let fields = PetFields::from(pet);
    let columns: Vec<_> = PetField::ALL.iter().map(|f| f.column()).collect();

    let mut builder = QueryBuilder::new("INSERT INTO pets (");
    builder.push(columns.join(", ")).push(") VALUES (");
    for (i, field) in PetField::ALL.into_iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, field.value(&fields));
    }
    builder.push(") RETURNING ").push(select_list());
    builder
}

/// UPDATE whose SET list covers every field of the merged record.
fn update_statement(id: PetId, merged: &Pet) -> QueryBuilder<'static, Postgres> {
    let fields = PetFields::from(merged);

    let mut builder = QueryBuilder::new("UPDATE pets SET ");
    for (i, field) in PetField::ALL.into_iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(field.column()).push(" = ");
        push_value(&mut builder, field.value(&fields));
    }
    builder
        .push(" WHERE id = ")
        .push_bind(id.as_uuid())
        .push(" RETURNING ")
        .push(select_list());
    builder
}

fn pet_from_row(row: &PgRow) -> Result<Pet, sqlx::Error> {
    Ok(Pet {
        id: PetId::new(row.try_get("id")?),
        name: row.try_get(PetField::Name.column())?,
        pet_type: row.try_get(PetField::Type.column())?,
        age: row.try_get(PetField::Age.column())?,
        owner_name: row.try_get(PetField::OwnerName.column())?,
    })
}

fn statistic_from_row(row: &PgRow) -> Result<(i64, TypeStatistic), sqlx::Error> {
    let total: i64 = row.try_get("total_pets")?;
    Ok((
        total,
        TypeStatistic {
            pet_type: row.try_get("type")?,
            count: row.try_get("count")?,
        },
    ))
}

/// Pet repository
#[derive(Clone)]
pub struct PetRepo {
    pool: PgPool,
}

impl PetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pet; the store assigns its id.
    pub async fn create_pet(&self, pet: NewPet) -> Result<Pet, DbError> {
        let row = insert_statement(&pet)
            .build()
            .fetch_one(&self.pool)
            .await?;

        let created = pet_from_row(&row)?;
        tracing::debug!(pet_id = %created.id, "Created pet");
        Ok(created)
    }

    /// Every pet, in the store's natural order.
    pub async fn get_all_pets(&self) -> Result<Vec<Pet>, DbError> {
        let rows = sqlx::query(&format!("SELECT {} FROM pets", select_list()))
            .fetch_all(&self.pool)
            .await?;

        let pets = rows
            .iter()
            .map(pet_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pets)
    }

    pub async fn get_pet_by_id(&self, id: PetId) -> Result<Option<Pet>, DbError> {
        let row = sqlx::query(&format!("SELECT {} FROM pets WHERE id = $1", select_list()))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(pet_from_row).transpose()?)
    }

    /// Merge `update` into the stored pet and write the result back.
    ///
    /// Returns `Ok(None)` when the pet does not exist, including when it is
    /// deleted between the read and the write. All columns are rewritten,
    /// not just the supplied ones.
    pub async fn update_pet(&self, id: PetId, update: PetUpdate) -> Result<Option<Pet>, DbError> {
        let Some(existing) = self.get_pet_by_id(id).await? else {
            return Ok(None);
        };

        let supplied = supplied_fields(&update);
        let merged = existing.merge(update);
        let mut statement = update_statement(id, &merged);
        tracing::debug!(
            pet_id = %id,
            supplied = ?supplied,
            columns = ?PetField::ALL.map(PetField::column),
            "Updating pet"
        );

        let row = statement.build().fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(pet_from_row).transpose()?)
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete_pet(&self, id: PetId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Read per-type counts from the `pet_statistics` view.
    pub async fn get_analytics(&self) -> Result<Analytics, DbError> {
        let rows = sqlx::query("SELECT total_pets, type, count FROM pet_statistics")
            .fetch_all(&self.pool)
            .await?;

        let stats = rows
            .iter()
            .map(statistic_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Analytics::from_rows(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_pet() -> Pet {
        Pet {
            id: PetId::new(Uuid::nil()),
            name: "Buddy".into(),
            pet_type: "dog".into(),
            age: 5,
            owner_name: "John Doe".into(),
        }
    }

    #[test]
    fn owner_field_maps_both_ways() {
        assert_eq!(PetField::OwnerName.column(), "owner_name");
        assert_eq!(PetField::OwnerName.api_name(), "ownerName");
    }

    #[test]
    fn api_names_match_serialized_pet() {
        let json = serde_json::to_value(sample_pet()).unwrap();
        let object = json.as_object().unwrap();
        for field in PetField::ALL {
            assert!(object.contains_key(field.api_name()), "{:?}", field);
        }
        assert_eq!(object.len(), PetField::ALL.len() + 1);
    }

    #[test]
    fn supplied_fields_lists_set_fields_only() {
        let update = PetUpdate {
            age: Some(6),
            owner_name: Some("Jane Smith".into()),
            ..Default::default()
        };
        assert_eq!(supplied_fields(&update), vec!["age", "ownerName"]);
        assert!(supplied_fields(&PetUpdate::default()).is_empty());
    }

    #[test]
    fn select_list_uses_storage_columns() {
        assert_eq!(select_list(), "id, name, type, age, owner_name");
    }

    #[test]
    fn insert_binds_every_field() {
        let pet = NewPet::new("Buddy", "dog", 5, "John Doe").unwrap();
        let builder = insert_statement(&pet);
        assert_eq!(
            builder.sql(),
            "INSERT INTO pets (name, type, age, owner_name) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, type, age, owner_name"
        );
    }

    #[test]
    fn update_rewrites_all_columns() {
        let merged = sample_pet().merge(PetUpdate {
            age: Some(6),
            ..Default::default()
        });
        let builder = update_statement(merged.id, &merged);
        assert_eq!(
            builder.sql(),
            "UPDATE pets SET name = $1, type = $2, age = $3, owner_name = $4 \
             WHERE id = $5 RETURNING id, name, type, age, owner_name"
        );
    }
}
