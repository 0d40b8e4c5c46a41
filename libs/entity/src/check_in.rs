use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct CheckIn {
    pub id: i32,
    pub attendee_id: i32,
    pub created_at: NaiveDateTime,
}
