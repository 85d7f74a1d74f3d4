/// Error code registry for takeaway
///
/// Error codes are organized by category:
/// - 1000-1999: Input errors
/// - 2000-2999: Format detection errors
/// - 3000-3999: Decode errors
/// - 4000-4999: Prompt errors
/// - 5000-5999: Persist errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const INPUT_NOT_FOUND: u16 = 1001;
    pub const INPUT_IS_DIRECTORY: u16 = 1002;
    pub const INPUT_OPEN_FAILED: u16 = 1003;
    pub const INPUT_READ_FAILED: u16 = 1004;

    // Format errors (2000-2999)
    pub const FORMAT_UNRECOGNIZED: u16 = 2001;
    pub const FORMAT_MISSING_EXTENSION: u16 = 2002;

    // Decode errors (3000-3999)
    pub const DECODE_INVALID_YAML: u16 = 3001;
    pub const DECODE_INVALID_JSON: u16 = 3002;

    // Prompt errors (4000-4999)
    pub const PROMPT_NO_ANSWER: u16 = 4001;
    pub const PROMPT_UNEXPECTED_ANSWER: u16 = 4002;

    // Persist errors (5000-5999)
    pub const PERSIST_CREATE_FAILED: u16 = 5001;
    pub const PERSIST_ENCODE_FAILED: u16 = 5002;
    pub const PERSIST_WRITE_FAILED: u16 = 5003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Order file not found",
        1002 => "Path is a directory, not a file",
        1003 => "Failed to open order file",
        1004 => "Failed to read order file",

        2001 => "Unrecognized order file extension",
        2002 => "Order file has no extension",

        3001 => "Invalid YAML in order file",
        3002 => "Invalid JSON in order file",

        4001 => "No answer was given",
        4002 => "Answer outside the offered choices",

        5001 => "Failed to create order file",
        5002 => "Failed to encode order",
        5003 => "Failed to write order file",

        _ => "Unknown error code",
    }
}
