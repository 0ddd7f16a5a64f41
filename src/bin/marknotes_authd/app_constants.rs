use time::Duration;

pub const ACCESS_TOKEN_VALIDITY: Duration = Duration::hours(24);

pub const API_PREFIX: &str = "/auth";
