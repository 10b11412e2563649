// Shared constants - these are the single source of truth for storage keys
// and fallback configuration.

/// localStorage key holding the bearer credential written by the login flow.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage key holding the serialized user profile.
pub const USER_STORAGE_KEY: &str = "user";

/// Backend fallback when no API_BASE_URL is injected at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Route used both as the unauthenticated landing target and the post-logout
/// target.
pub const LOGIN_ROUTE: &str = "/login";

// School information rendered on both dashboards.
pub const SCHOOL_NAME: &str = "Mayowa Nursery & Primary School";
pub const SCHOOL_ADDRESS: &str = "Oda Road, Akure, Ondo State, Nigeria";
pub const SCHOOL_ESTABLISHED: &str = "Established: 1995";
pub const SCHOOL_PHONE: &str = "Phone: +234 XXX XXX XXXX";
pub const SCHOOL_EMAIL: &str = "Email: info@mayowaschool.edu.ng";
