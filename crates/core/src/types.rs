/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (e.g. a movie's release date) carry no time zone.
pub type Date = chrono::NaiveDate;
