pub struct ErrorCode;

impl ErrorCode {
    // Tooling and preflight errors: T1xx
    pub const DOCKER_NOT_INSTALLED: &'static str = "T100";
    pub const COMPOSE_NOT_INSTALLED: &'static str = "T101";
    pub const DAEMON_UNREACHABLE: &'static str = "T102";
    pub const COMPOSE_FILE_MISSING: &'static str = "T103";

    // Docker Compose errors: D1xx
    pub const DOCKER_COMPOSE_UP_FAILED: &'static str = "D100";
    pub const DOCKER_COMPOSE_DOWN_FAILED: &'static str = "D101";
    pub const DOCKER_COMPOSE_LIST_CONTAINERS_FAILED: &'static str = "D102";
    pub const DOCKER_COMPOSE_FILE_NOT_FOUND: &'static str = "D103";

    // Configuration errors: C1xx
    pub const CONFIG_READ_FAILED: &'static str = "C100";
    pub const CONFIG_PARSE_FAILED: &'static str = "C101";
}
