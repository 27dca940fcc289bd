/// Default base URL of the router management API, reachable from the LAN
pub const DEFAULT_BASE_URL: &str = "https://mabbox.bytel.fr/api/v1";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client to the router
pub const USER_AGENT: &str = "bbox-client/0.1.0";
/// Value of the `remember` form field sent on login
pub const LOGIN_REMEMBER: &str = "1";
/// Environment variable holding the router admin password
pub const PASSWORD_ENV: &str = "BBOX_PASSWORD";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "BBOX_BASE_URL";
/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_ENV: &str = "BBOX_TIMEOUT";
