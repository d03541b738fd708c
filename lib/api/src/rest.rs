use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use flightpath_core::{FlightPath, Leg};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    flight_legs: Vec<Leg>,
}

/// Error body returned on every 400. All core errors are deterministic
/// input errors, so `retryable` is always false.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: bool,
    retryable: bool,
    message: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            retryable: false,
            message: message.into(),
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .route("/health", web::get().to(health))
                .route("/calculate", web::post().to(calculate))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok"
    })))
}

async fn calculate(req: web::Json<CalculateRequest>) -> ActixResult<HttpResponse> {
    let malformed = req
        .flight_legs
        .iter()
        .flat_map(|leg| [&leg.departure, &leg.arrival])
        .find(|code| !code.is_valid());

    if let Some(code) = malformed {
        warn!("Rejecting itinerary: malformed airport code {:?}", code.as_str());
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Invalid airport code: {:?}",
            code.as_str()
        ))));
    }

    info!("Calculating flight path over {} legs", req.flight_legs.len());

    match FlightPath::reconstruct(&req.flight_legs) {
        Ok(path) => Ok(HttpResponse::Ok().json(path)),
        Err(e) => {
            warn!("Rejecting itinerary: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())))
        }
    }
}
