/// The single cache key holding the serialized list of every holiday.
pub const HOLIDAYS_KEY: &str = "holidays";
