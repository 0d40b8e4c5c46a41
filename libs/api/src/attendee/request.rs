use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    registration::NewAttendee,
    validation::{self, FieldError, Validate},
};

const MIN_NAME_LENGTH: usize = 4;

#[derive(Deserialize)]
pub struct RegisterForEventParam {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

impl Validate for RegisterForEventParam {
    type Valid = String;

    fn validate(self) -> Result<String, Vec<FieldError>> {
        validation::uuid("eventId", &self.event_id).map_err(|e| vec![e])
    }
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterForEventBody {
    #[schema(min_length = 4, example = "Ana Souza", value_type = String)]
    pub name: Option<String>,
    #[schema(example = "ana@x.com", value_type = String)]
    pub email: Option<String>,
}

impl Validate for RegisterForEventBody {
    type Valid = NewAttendee;

    fn validate(self) -> Result<NewAttendee, Vec<FieldError>> {
        let mut errors = vec![];

        let name = validation::required("name", self.name)
            .and_then(|name| {
                validation::min_length("name", &name, MIN_NAME_LENGTH)
                    .map(|_| name)
            })
            .map_err(|e| errors.push(e))
            .ok();

        let email = validation::required("email", self.email)
            .and_then(|email| {
                validation::email("email", &email).map(|_| email)
            })
            .map_err(|e| errors.push(e))
            .ok();

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewAttendee { name, email }),
            _ => Err(errors),
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteAttendeeParam {
    pub id: String,
}

impl Validate for DeleteAttendeeParam {
    type Valid = i32;

    fn validate(self) -> Result<i32, Vec<FieldError>> {
        validation::integer("id", &self.id).map_err(|e| vec![e])
    }
}
