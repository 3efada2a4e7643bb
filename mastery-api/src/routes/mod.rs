pub(crate) mod error;
pub(crate) mod goals;
pub(crate) mod records;
pub(crate) mod reports;
pub(crate) mod users;

pub(crate) use error::ApiError;
