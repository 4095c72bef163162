use service::Services;

/// Shared handler state; cloning only bumps the service `Arc`s.
#[derive(Clone)]
pub struct ServerState {
    pub services: Services,
}

impl ServerState {
    pub fn new(services: Services) -> Self { Self { services } }
}
