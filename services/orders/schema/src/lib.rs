//! sea-orm entities for the orders service database.

pub mod orders;
