//! Pet endpoints

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::PetIdParam;
use crate::http::server::AppState;
use crate::models::{NewPet, Pet, PetUpdate, ValidationError};

/// Create pet request; every field is optional so absence is reported as a 400
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePetRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub age: Option<i32>,
    pub owner_name: Option<String>,
}

impl CreatePetRequest {
    pub fn validate(self) -> Result<NewPet, ValidationError> {
        let name = self.name.ok_or(ValidationError::Missing { field: "name" })?;
        let pet_type = self.pet_type.ok_or(ValidationError::Missing { field: "type" })?;
        let age = self.age.ok_or(ValidationError::Missing { field: "age" })?;
        let owner_name = self
            .owner_name
            .ok_or(ValidationError::Missing { field: "ownerName" })?;

        NewPet::new(name, pet_type, age, owner_name)
    }
}

/// Only JSON objects are accepted; arrays and scalars are malformed bodies.
type JsonObject = Map<String, Value>;

fn malformed(reason: impl ToString) -> ValidationError {
    ValidationError::MalformedBody {
        reason: reason.to_string(),
    }
}

/// Decode named fields out of a JSON object.
fn decode_object<T: DeserializeOwned>(object: JsonObject) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(object)).map_err(malformed)
}

/// GET /pets - list every pet
async fn list_pets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = state.pets.get_all_pets().await?;
    Ok(Json(pets))
}

/// POST /pets - create a pet
async fn create_pet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let Json(object) = payload.map_err(malformed)?;
    let pet = decode_object::<CreatePetRequest>(object)?.validate()?;
    let created = state.pets.create_pet(pet).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /pets/{id} - partially update a pet
async fn update_pet(
    State(state): State<Arc<AppState>>,
    PetIdParam(id): PetIdParam,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Json<Pet>, ApiError> {
    // A request without a JSON body supplies no fields.
    let update: PetUpdate = match payload {
        Ok(Json(object)) => decode_object(object)?,
        Err(JsonRejection::MissingJsonContentType(_)) => PetUpdate::default(),
        Err(e) => return Err(malformed(e).into()),
    };

    state
        .pets
        .update_pet(id, update)
        .await?
        .map(Json)
        .ok_or(ApiError::PetNotFound)
}

/// DELETE /pets/{id} - remove a pet
async fn delete_pet(
    State(state): State<Arc<AppState>>,
    PetIdParam(id): PetIdParam,
) -> Result<StatusCode, ApiError> {
    if state.pets.delete_pet(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::PetNotFound)
    }
}

/// PATCH|DELETE /pets/ - id segment left empty
async fn missing_id() -> ApiError {
    ApiError::Validation(ValidationError::MissingId)
}

/// Pet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pets", get(list_pets).post(create_pet))
        .route("/pets/", patch(missing_id).delete(missing_id))
        .route("/pets/{id}", patch(update_pet).delete(delete_pet))
}
