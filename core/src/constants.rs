//! Centralized label constants
//!
//! Defaults shared by the encoder, the overlay layout and the batch driver.

/// Default QR canvas edge in pixels for a bare encode request
pub const DEFAULT_QR_SIZE: u32 = 100;

/// Canvas edge used for generated labels
pub const LABEL_SIZE: u32 = 400;

/// Reference canvas the overlay coordinates were laid out on
pub const OVERLAY_REFERENCE_SIZE: f32 = 400.0;

/// Quiet zone around the symbol, in modules
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Largest accepted quiet zone, four times the widest symbol
pub const MAX_QUIET_ZONE: u32 = 4 * 177;

/// Rows whose text contains this marker are spreadsheet headers
pub const HEADER_MARKER: &str = "Description";

/// Delimiter between the positional record fields
pub const FIELD_DELIMITER: char = '/';

/// Delimiter between the code and the display name in the last field
pub const NAME_DELIMITER: char = ',';

/// Number of slash-separated fields in a well-formed record
pub const RECORD_FIELD_COUNT: usize = 5;

/// Extension appended to every derived label filename
pub const LABEL_EXTENSION: &str = "png";

/// Spreadsheet extensions routed to the workbook reader
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
