pub const API_PREFIX: &str = "/notes";
