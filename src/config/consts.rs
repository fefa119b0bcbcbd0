/// Value names always treated as externally supplied, seeded into the
/// namespace before any processor is examined.
pub const WELL_KNOWN_VALUES: &[&str] = &[
    VALUES_KEY,
    TASK_DIRECTORY_KEY,
    CLIENT_HTTP_REQUEST_FACTORY_KEY,
    TEMPLATE_KEY,
    PDF_CONFIG_KEY,
    SUBREPORT_DIR_KEY,
    OUTPUT_FORMAT_KEY,
    REQUEST_HEADERS_KEY,
];

/// Generic bag of all current values.
pub const VALUES_KEY: &str = "values";
/// Working directory of the current task.
pub const TASK_DIRECTORY_KEY: &str = "task_directory";
/// Factory for outbound client HTTP requests.
pub const CLIENT_HTTP_REQUEST_FACTORY_KEY: &str = "client_http_request_factory";
/// Template the request is rendered against.
pub const TEMPLATE_KEY: &str = "template";
/// Output/PDF configuration object.
pub const PDF_CONFIG_KEY: &str = "pdf_config";
/// Directory subreports are written to.
pub const SUBREPORT_DIR_KEY: &str = "subreport_dir";
/// Requested output format marker.
pub const OUTPUT_FORMAT_KEY: &str = "output_format";
/// JSON request headers forwarded from the client.
pub const REQUEST_HEADERS_KEY: &str = "request_headers";
