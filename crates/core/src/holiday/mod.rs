mod error;
mod ids;
mod sanitize;
mod status;
mod types;
mod validation;

pub use error::ValidationError;
pub use ids::{generate_local_id, is_local_id, is_valid_holiday_id, LOCAL_ID_PREFIX};
pub use sanitize::{sanitize, Sanitize};
pub use status::{
    days_until, holiday_status, sort_by_outbound_date, sort_for_dashboard, trip_duration,
    HolidayStatus,
};
pub use types::{Activity, HolidayDetails, HolidayRecord, Hotel};
pub use validation::{parse_holiday_date, validate_details};
