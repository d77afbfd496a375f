// src/api/middleware/auth.rs

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::debug;

use crate::api::utils::authorize;
use crate::core::gate::Gate;

/// Rejects requests without a live session and stores the caller's
/// [`AuthContext`](crate::core::auth::AuthContext) in the request extensions.
pub struct TokenValidator;

impl<S, B> Transform<S, ServiceRequest> for TokenValidator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenValidatorMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenValidatorMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct TokenValidatorMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TokenValidatorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // CORS preflight passes through untouched
        if req.method() == actix_web::http::Method::OPTIONS {
            let fut = service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        Box::pin(async move {
            let ctx = match authorize(req.headers(), req.app_data::<web::Data<Arc<Gate>>>()) {
                Ok(ctx) => ctx,
                Err(e) => {
                    debug!("Rejecting {} {}: {}", req.method(), req.path(), e);
                    let response = e.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            debug!("Session {} accepted for '{}'", ctx.session_id, ctx.username);
            req.extensions_mut().insert(ctx);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
