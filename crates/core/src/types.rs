/// All backend entity primary keys are 32-bit integers assigned server-side.
pub type ApiId = i32;

/// Review and log-generation dates are calendar dates (`YYYY-MM-DD`),
/// without a time component.
pub type ApiDate = chrono::NaiveDate;
