//! Wipes the store and fills it with one sample event and a crowd of
//! synthetic attendees for local development.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime, Utc};
use entity::prelude::*;
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use futures::future::try_join_all;
use rand::Rng;
use repository::{Repository, RepositoryError};
use toml::{map::Map, Value};
use tracing::info;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed config: {}", message)]
    InvalidConfig { message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub event_id: String,
    pub title: String,
    pub slug: String,
    pub details: String,
    pub maximum_attendees: i32,
    pub attendees: usize,
    /// Registrations are spread over this many days ...
    pub window_days: i64,
    /// ... ending this many days before now.
    pub window_offset_days: i64,
    pub check_in_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_id: "99713657-03a8-4c9f-831d-4cca180cb367".to_string(),
            title: "Unite Summit".to_string(),
            slug: "unite-summit".to_string(),
            details: "An event for developers who love to code!".to_string(),
            maximum_attendees: 120,
            attendees: 213,
            window_days: 30,
            window_offset_days: 8,
            check_in_window_days: 7,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeedReport {
    pub event_id: String,
    pub attendees: usize,
    pub check_ins: usize,
}

/// A generated attendee, optionally already checked in.
#[derive(Clone, Debug)]
pub struct SyntheticAttendee {
    pub attendee: AttendeeEntity,
    pub checked_in_at: Option<NaiveDateTime>,
}

pub async fn serve(
    repository: &Repository,
    config: &Config,
) -> Result<SeedReport, SeedError> {
    info!(task = "start seed", event_id = config.event_id);

    let deleted = repository.event.delete_all().await?;
    info!(task = "delete events", deleted);

    repository
        .event
        .save(EventEntity {
            id: config.event_id.clone(),
            title: config.title.clone(),
            slug: config.slug.clone(),
            details: Some(config.details.clone()),
            maximum_attendees: Some(config.maximum_attendees),
        })
        .await?;

    let attendees = generate_attendees(
        config,
        Utc::now().naive_utc(),
        &mut rand::thread_rng(),
    );
    let check_ins = attendees
        .iter()
        .filter(|a| a.checked_in_at.is_some())
        .count();

    let inserts = attendees.into_iter().map(|synthetic| async move {
        let attendee_id = repository.attendee.save(synthetic.attendee).await?;

        if let Some(created_at) = synthetic.checked_in_at {
            repository
                .check_in
                .save(CheckInEntity {
                    attendee_id,
                    created_at,
                    ..Default::default()
                })
                .await?;
        }

        Ok::<_, SeedError>(())
    });
    let inserted = try_join_all(inserts).await?.len();

    info!(task = "insert attendees", inserted, check_ins);

    Ok(SeedReport {
        event_id: config.event_id.clone(),
        attendees: inserted,
        check_ins,
    })
}

/// Builds `config.attendees` attendees with distinct lower-cased e-mails.
///
/// `created_at` falls in `[now - offset - window, now - offset]`; a coin
/// flip decides whether the attendee also gets a check-in within the last
/// `check_in_window_days`.
pub fn generate_attendees<R: Rng + ?Sized>(
    config: &Config,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<SyntheticAttendee> {
    let reference = now - Duration::days(config.window_offset_days);
    let mut emails = HashSet::with_capacity(config.attendees);
    let mut attendees = Vec::with_capacity(config.attendees);

    for index in 0..config.attendees {
        let email = SafeEmail().fake_with_rng::<String, _>(rng).to_lowercase();
        let email = if emails.contains(&email) {
            tag_email(&email, index)
        } else {
            email
        };
        emails.insert(email.clone());

        let created_at =
            reference - random_span(rng, config.window_days * SECONDS_PER_DAY);
        let checked_in_at = rng.gen_bool(0.5).then(|| {
            now - random_span(rng, config.check_in_window_days * SECONDS_PER_DAY)
        });

        attendees.push(SyntheticAttendee {
            attendee: AttendeeEntity {
                name: Name().fake_with_rng(rng),
                email,
                event_id: config.event_id.clone(),
                created_at,
                ..Default::default()
            },
            checked_in_at,
        });
    }

    attendees
}

/// Adds `+index` to the local part. Faker addresses never contain `+`,
/// so tagged addresses cannot collide with drawn ones or with each other.
fn tag_email(email: &str, index: usize) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}+{index}@{domain}"),
        None => format!("{email}+{index}"),
    }
}

fn random_span<R: Rng + ?Sized>(rng: &mut R, max_seconds: i64) -> Duration {
    Duration::seconds(rng.gen_range(0..=max_seconds.max(0)))
}

pub fn init_config(config: &Map<String, Value>) -> Result<Config, SeedError> {
    let seed = config.get("seed").ok_or_else(|| SeedError::InvalidConfig {
        message: "failed to get seed config".to_string(),
    })?;

    let string = |key: &str| {
        seed.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| SeedError::InvalidConfig {
                message: format!("failed to load {key} config"),
            })
    };
    let integer = |key: &str| {
        seed.get(key)
            .and_then(Value::as_integer)
            .filter(|value| *value >= 0)
            .ok_or_else(|| SeedError::InvalidConfig {
                message: format!("failed to load {key} config"),
            })
    };

    Ok(Config {
        event_id: string("event_id")?,
        title: string("title")?,
        slug: string("slug")?,
        details: string("details")?,
        maximum_attendees: i32::try_from(integer("maximum_attendees")?)
            .map_err(|e| SeedError::InvalidConfig {
                message: format!("maximum_attendees: {e}"),
            })?,
        attendees: usize::try_from(integer("attendees")?).map_err(|e| {
            SeedError::InvalidConfig {
                message: format!("attendees: {e}"),
            }
        })?,
        window_days: integer("window_days")?,
        window_offset_days: integer("window_offset_days")?,
        check_in_window_days: integer("check_in_window_days")?,
    })
}
