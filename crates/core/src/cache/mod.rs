mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::HOLIDAYS_KEY;
pub use serialization::{
    deserialize_holidays, serialize_holidays, Result as SerializationResult, SerializationError,
};
pub use traits::Cache;
