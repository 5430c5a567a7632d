//! sea-orm entities for the users service database.

pub mod users;
