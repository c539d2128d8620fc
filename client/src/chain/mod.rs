mod backfill;

pub use backfill::*;
