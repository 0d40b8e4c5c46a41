pub mod attendee;
pub mod check_in;
pub mod event;

pub mod prelude {
    pub use crate::attendee::Attendee as AttendeeEntity;
    pub use crate::check_in::CheckIn as CheckInEntity;
    pub use crate::event::Event as EventEntity;
}
