use entity::prelude::*;
use repository::{Repository, RepositoryError};
use tracing::info;

/// A validated registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("This e-mail is already registered for this event")]
    DuplicateRegistration,

    #[error("The maximum number of attendees has been reached for this event.")]
    CapacityExceeded,

    #[error("Event not found.")]
    EventNotFound,

    #[error("Attendee not found.")]
    AttendeeNotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RegistrationError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RegistrationError::Repository(_))
    }
}

/// Business rules for registering and removing attendees.
#[derive(Clone, Debug)]
pub struct RegistrationService {
    repo: Repository,
}

impl RegistrationService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Registers an attendee and returns the new attendee id.
    ///
    /// The event lookup and the attendee count are not read in one
    /// transaction, so concurrent registrations close to the limit can
    /// overbook by a few seats. The `(email, event_id)` unique index still
    /// rejects duplicates that race past the first lookup.
    pub async fn register(
        &self,
        event_id: &str,
        attendee: NewAttendee,
    ) -> Result<i32, RegistrationError> {
        let registered = self
            .repo
            .attendee
            .find_by_email_and_event(&attendee.email, event_id)
            .await?;

        if registered.is_some() {
            return Err(RegistrationError::DuplicateRegistration);
        }

        let (event, amount_of_attendees) = tokio::try_join!(
            self.repo.event.find_by_id(event_id),
            self.repo.attendee.count_by_event(event_id),
        )?;

        let Some(event) = event else {
            return Err(RegistrationError::EventNotFound);
        };

        if event.is_full(amount_of_attendees) {
            return Err(RegistrationError::CapacityExceeded);
        }

        let attendee_id = self
            .repo
            .attendee
            .save(AttendeeEntity {
                name: attendee.name,
                email: attendee.email,
                event_id: event.id,
                ..Default::default()
            })
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    RegistrationError::DuplicateRegistration
                } else {
                    RegistrationError::Repository(e)
                }
            })?;

        info!(task = "register", event_id, attendee_id);

        Ok(attendee_id)
    }

    pub async fn delete_attendee(
        &self,
        attendee_id: i32,
    ) -> Result<(), RegistrationError> {
        let Some(attendee) = self.repo.attendee.find_by_id(attendee_id).await?
        else {
            return Err(RegistrationError::AttendeeNotFound);
        };

        self.repo.attendee.delete(attendee.id).await?;

        info!(task = "delete attendee", attendee_id);

        Ok(())
    }
}
