// Defaults shared by the classifier, the document and the value conversions
pub const DEFAULT_COMMENT_SEPARATOR: char = ';';
pub const DEFAULT_SECTION: &str = "";
pub const STRING_TRUE: &str = "true";
pub const STRING_FALSE: &str = "false";
