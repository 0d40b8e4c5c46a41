use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Attendee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub event_id: String,
    pub created_at: NaiveDateTime,
}
