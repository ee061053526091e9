/// environment variable
pub const APP_ENVIRONMENT: &str = "APP_ENVIRONMENT";
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// auth endpoints of the receipt api, relative to its base url
pub const AUTH_LOGIN_PATH: &str = "auth/login";
pub const AUTH_REGISTER_PATH: &str = "auth/register";

/// catalogue endpoints
pub const PRODUCTS_PATH: &str = "products";
pub const SALES_PATH: &str = "sales";
pub const SETTINGS_PATH: &str = "settings";
