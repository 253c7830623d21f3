use actix_web::web;

pub mod health;
pub mod login;
pub mod register;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(login::login)
            .service(register::register),
    );
    cfg.service(web::scope("/health").service(health::health));
}
