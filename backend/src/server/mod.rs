//! Server construction and adapter wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{BeneficiaryOperations, PlanOperations};
use crate::domain::{BeneficiaryService, PlanService};
use crate::inbound::http::beneficiaries::{
    create_beneficiary, delete_beneficiary, get_beneficiary, list_beneficiaries,
    update_beneficiary,
};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::plans::{create_plan, delete_plan, get_plan, list_plans, update_plan};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DbPool, DieselBeneficiaryRepository, DieselPlanRepository};

/// Wire the database adapters into the rule-engine services.
fn build_http_state(pool: &DbPool) -> HttpState {
    let beneficiary_repo = Arc::new(DieselBeneficiaryRepository::new(pool.clone()));
    let plan_repo = Arc::new(DieselPlanRepository::new(pool.clone()));

    let beneficiaries: Arc<dyn BeneficiaryOperations> = Arc::new(BeneficiaryService::new(
        beneficiary_repo,
        Arc::clone(&plan_repo),
    ));
    let plans: Arc<dyn PlanOperations> = Arc::new(PlanService::new(plan_repo));

    HttpState::new(beneficiaries, plans)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(create_beneficiary)
        .service(list_beneficiaries)
        .service(get_beneficiary)
        .service(update_beneficiary)
        .service(delete_beneficiary)
        .service(create_plan)
        .service(list_plans)
        .service(get_plan)
        .service(update_plan)
        .service(delete_plan);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state, pool, and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    pool: DbPool,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&pool));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
