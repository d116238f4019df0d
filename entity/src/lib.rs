//! SeaORM entities for the code camp database.

pub mod prelude;

pub mod camp;
pub mod speaker;
pub mod talk;
