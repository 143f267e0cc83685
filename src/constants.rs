pub const ACTION_TYPE_FIELD: &str = "type";
pub const UNDEFINED_ACTION_KIND: &str = "undefined";
