pub mod dates;
pub mod file_magic;
pub mod validate;

pub use dates::{days_in_month, is_leap_year};
pub use file_magic::matches_declared_type;
pub use validate::{media_type_allowed, non_blank, normalize_media_type, validate_title};
