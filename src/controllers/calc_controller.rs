use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::sizing::{CalculationInput, CalculationResult, ServiceHealth};
use crate::services::sizing_service;

/// GET /
/// Liveness acknowledgment
///
/// Plain-text confirmation that the backend is up, kept as the message the
/// frontend has always checked for.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is running", body = String)
    )
)]
pub async fn root() -> &'static str {
    "✅ Backend de SolarCalc funcionando correctamente."
}

/// POST /api/calculo
/// Compute a solar system sizing estimate
///
/// Sizes a residential solar installation from monthly consumption, tariff,
/// city and battery choice. Unknown cities fall back to a default irradiance;
/// negative or non-finite numbers are rejected.
#[utoipa::path(
    post,
    path = "/api/calculo",
    request_body = CalculationInput,
    responses(
        (status = 200, description = "Sizing estimate", body = CalculationResult),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing, mistyped or invalid input values")
    )
)]
pub async fn calculate(Json(input): Json<CalculationInput>) -> impl IntoResponse {
    if let Err(e) = sizing_service::validate(&input) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response();
    }
    Json(sizing_service::calculate(&input)).into_response()
}

/// GET /api/health
/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health", body = ServiceHealth)
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(ServiceHealth {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::app;

    fn calc_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/calculo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_returns_liveness_text() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("SolarCalc"));
    }

    #[tokio::test]
    async fn calculo_returns_full_breakdown() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": 300,
            "costoEnergia": 800,
            "ciudad": "Bogotá",
            "sistemaConBateria": false
        }));
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["ciudad"], "Bogotá");
        assert_eq!(json["consumoMensual"], 300.0);
        assert_eq!(json["sistemaConBateria"], false);
        assert_eq!(json["radiacion"], 4.5);
        assert_eq!(json["eficienciaSistema"], 0.85);
        assert_eq!(json["consumoDiario"], 10.0);
        assert_eq!(json["potenciaSistemaKWp"], "2.61");
        assert_eq!(json["cantidadPaneles"], 7);
        assert_eq!(json["costoTotal"], 11_100_000);
        assert_eq!(json["ahorroMensual"], 240_000.0);
        assert_eq!(json["tiempoRetorno"], 47);
    }

    #[tokio::test]
    async fn calculo_with_battery_includes_battery_cost() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": 300,
            "costoEnergia": 800,
            "ciudad": "Cali",
            "sistemaConBateria": true
        }));
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["radiacion"], 5.5);
        assert_eq!(json["eficienciaSistema"], 0.70);
        assert_eq!(json["potenciaSistemaKWp"], "2.60");
        assert_eq!(json["costoTotal"], 17_100_000);
    }

    #[tokio::test]
    async fn calculo_unknown_city_uses_default_irradiance() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": 300,
            "costoEnergia": 800,
            "ciudad": "Unknown",
            "sistemaConBateria": false
        }));
        let resp = app().oneshot(req).await.unwrap();

        let json = body_json(resp).await;
        assert_eq!(json["radiacion"], 5.0);
    }

    #[tokio::test]
    async fn calculo_zero_consumption_has_null_payback() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": 0,
            "costoEnergia": 800,
            "ciudad": "Bogotá",
            "sistemaConBateria": false
        }));
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["cantidadPaneles"], 0);
        assert_eq!(json["costoTotal"], 5_500_000); // inverter + installation
        assert_eq!(json["ahorroMensual"], 0.0);
        assert!(json["tiempoRetorno"].is_null());
    }

    #[tokio::test]
    async fn calculo_negative_consumption_returns_422() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": -50,
            "costoEnergia": 800,
            "ciudad": "Bogotá",
            "sistemaConBateria": false
        }));
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn calculo_missing_field_is_rejected() {
        let req = calc_request(serde_json::json!({
            "consumoMensual": 300,
            "ciudad": "Bogotá"
        }));
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn calculo_invalid_json_syntax_returns_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/calculo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/calculo")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "https://solarcalc.example")
            .body(Body::from(
                serde_json::json!({
                    "consumoMensual": 300,
                    "costoEnergia": 800,
                    "ciudad": "Cali",
                    "sistemaConBateria": false
                })
                .to_string(),
            ))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert!(json.get("version").is_some());
    }
}
