pub mod attendance;
pub mod events;
pub mod initialize;
pub mod log;
pub mod members;
pub mod migrate;
pub mod pool;
pub mod reference;
pub mod stats;

use crate::errors::AppError;

/// Wrap a decoding failure so it can travel through `rusqlite::Result`.
pub(crate) fn conversion_error(column: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}
