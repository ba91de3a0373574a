pub mod compose_client;
pub mod container_client;
pub mod docker_client;
pub mod docker_compose_client;
pub mod tool_locator;
