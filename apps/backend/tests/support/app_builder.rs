use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use scorepad::middleware::{
    cors_middleware, RequestTrace, SessionExtract, StructuredLogger, TraceSpan,
};
use scorepad::routes;
use scorepad::AppState;

/// The production app: same middleware stack and routes as `main`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(cors_middleware())
            .wrap(SessionExtract)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
