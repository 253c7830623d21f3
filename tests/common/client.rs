use actix_web::{web, App};
use auth_api::{config::EnvConfig, routes::configure_routes, services::credentials::CredentialService};

pub struct TestClient {
    pub service: CredentialService,
}

impl TestClient {
    pub fn new(config: EnvConfig) -> Self {
        TestClient {
            service: CredentialService::new(config),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.service.clone()))
            .configure(configure_routes)
    }
}
