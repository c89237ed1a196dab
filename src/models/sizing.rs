use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Request / response wire types ───────────────────────────────────────────
// Field names on the wire keep the Spanish contract the frontend speaks.

/// Sizing request: what the household consumes and where it is.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalculationInput {
    /// Monthly energy consumption (kWh)
    #[serde(rename = "consumoMensual")]
    pub monthly_consumption_kwh: f64,
    /// Energy tariff (COP per kWh)
    #[serde(rename = "costoEnergia")]
    pub energy_tariff: f64,
    /// City used for the irradiance lookup
    #[serde(rename = "ciudad")]
    pub city: String,
    /// Whether the quoted system includes battery storage
    #[serde(rename = "sistemaConBateria")]
    pub has_battery: bool,
}

/// Complete sizing estimate, echoing the inputs plus every intermediate
/// value so the frontend can show the full breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalculationResult {
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "consumoMensual")]
    pub monthly_consumption_kwh: f64,
    #[serde(rename = "sistemaConBateria")]
    pub has_battery: bool,
    /// Irradiance used for the sizing (kWh/m²/day)
    #[serde(rename = "radiacion")]
    pub irradiance: f64,
    #[serde(rename = "eficienciaSistema")]
    pub system_efficiency: f64,
    #[serde(rename = "consumoDiario")]
    pub daily_consumption_kwh: f64,
    #[serde(rename = "energiaRequeridaDiaria")]
    pub required_daily_energy_kwh: f64,
    /// Array capacity in kWp, formatted to two decimals
    #[serde(rename = "potenciaSistemaKWp")]
    pub system_capacity_kwp: String,
    #[serde(rename = "cantidadPaneles")]
    pub panel_count: u64,
    /// Total system cost (COP)
    #[serde(rename = "costoTotal")]
    pub total_cost: u64,
    /// Monthly bill savings (COP)
    #[serde(rename = "ahorroMensual")]
    pub monthly_savings: f64,
    /// Months until savings cover the cost; `null` when savings are zero
    #[serde(rename = "tiempoRetorno")]
    pub payback_months: Option<u64>,
}

// ─── Validation errors ───────────────────────────────────────────────────────

/// Invalid-input kinds rejected at the HTTP boundary before the
/// calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NonFiniteConsumption,
    NegativeConsumption,
    NonFiniteTariff,
    NegativeTariff,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InputError::NonFiniteConsumption => "consumoMensual must be a finite number",
            InputError::NegativeConsumption => "consumoMensual must not be negative",
            InputError::NonFiniteTariff => "costoEnergia must be a finite number",
            InputError::NegativeTariff => "costoEnergia must not be negative",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for InputError {}

// ─── REST API response types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    pub version: String,
}
