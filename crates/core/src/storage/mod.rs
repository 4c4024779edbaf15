mod error;
mod traits;

pub use error::{OfflinePersistenceError, RepositoryError, Result, StoreError};
pub use traits::{HolidayRepository, RemoteConnector};
