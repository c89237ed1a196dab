use utoipa::OpenApi;
use crate::controllers::calc_controller;
use crate::models::sizing;

#[derive(OpenApi)]
#[openapi(
    paths(
        calc_controller::root,
        calc_controller::calculate,
        calc_controller::health
    ),
    components(
        schemas(
            sizing::CalculationInput,
            sizing::CalculationResult,
            sizing::ServiceHealth
        )
    ),
    tags(
        (name = "solarcalc-backend", description = "SolarCalc Sizing API")
    )
)]
pub struct ApiDoc;
