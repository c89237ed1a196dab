/// ============================================================
///  Solar System Sizing Engine
///
///  Algorithm pipeline:
///   1. Irradiance lookup   – fixed city table, default for unknown cities
///   2. System efficiency   – battery systems lose energy to storage/conversion
///   3. Daily consumption   – monthly figure over a 30-day month
///   4. Required daily energy – consumption grossed up by efficiency
///   5. Array capacity      – required energy / irradiance (kWp)
///   6. Panel count         – ceil(kWp × 1000 / panel wattage)
///   7. Cost breakdown      – panels + inverter + optional battery + installation
///   8. Payback             – ceil(total cost / monthly savings)
/// ============================================================

use crate::models::sizing::{CalculationInput, CalculationResult, InputError};

// ─── Sizing policy constants ─────────────────────────────────
/// Average daily solar irradiance per city (kWh/m²/day equivalent).
const CITY_IRRADIANCE: &[(&str, f64)] = &[
    ("Bogotá", 4.5),
    ("Medellín", 5.0),
    ("Cali", 5.5),
    ("Barranquilla", 6.0),
    ("Bucaramanga", 5.3),
];
/// Fallback for cities outside the table. Unknown cities are not an error.
const DEFAULT_IRRADIANCE: f64 = 5.0;

const EFFICIENCY_WITH_BATTERY: f64 = 0.70;
const EFFICIENCY_WITHOUT_BATTERY: f64 = 0.85;

const DAYS_PER_MONTH: f64 = 30.0;
/// Nominal panel rating (W) used for the whole catalogue.
const PANEL_WATTAGE: f64 = 410.0;

// ─── Cost constants (COP) ────────────────────────────────────
const PANEL_COST: u64 = 800_000;
const INVERTER_COST: u64 = 4_000_000;
const BATTERY_COST: u64 = 6_000_000;
const INSTALLATION_COST: u64 = 1_500_000;

/// Average daily irradiance for `city`, falling back to
/// [`DEFAULT_IRRADIANCE`] for any string outside the table
/// (including empty or misspelled input).
pub fn irradiance_for(city: &str) -> f64 {
    CITY_IRRADIANCE
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, irr)| *irr)
        .unwrap_or(DEFAULT_IRRADIANCE)
}

/// Usable fraction of generated energy. Battery-backed systems pay
/// storage/conversion losses.
pub fn system_efficiency(has_battery: bool) -> f64 {
    if has_battery {
        EFFICIENCY_WITH_BATTERY
    } else {
        EFFICIENCY_WITHOUT_BATTERY
    }
}

/// Boundary validation, kept separate from the pure calculation.
/// Zero consumption or tariff is allowed (it yields an empty system /
/// no payback); negative and non-finite values are rejected.
pub fn validate(input: &CalculationInput) -> Result<(), InputError> {
    if !input.monthly_consumption_kwh.is_finite() {
        return Err(InputError::NonFiniteConsumption);
    }
    if input.monthly_consumption_kwh < 0.0 {
        return Err(InputError::NegativeConsumption);
    }
    if !input.energy_tariff.is_finite() {
        return Err(InputError::NonFiniteTariff);
    }
    if input.energy_tariff < 0.0 {
        return Err(InputError::NegativeTariff);
    }
    Ok(())
}

/// Main entry point – pure sizing computation, one call per request.
///
/// Deterministic: identical input always produces identical output.
/// When monthly savings are zero (zero consumption or zero tariff) the
/// payback period is `None` rather than a division by zero.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let irradiance = irradiance_for(&input.city);
    let efficiency = system_efficiency(input.has_battery);

    let daily_consumption_kwh = input.monthly_consumption_kwh / DAYS_PER_MONTH;
    let required_daily_energy_kwh = daily_consumption_kwh / efficiency;
    let system_capacity_kwp = required_daily_energy_kwh / irradiance;

    // Fractional panels round up to a whole unit.
    let panel_count = ((system_capacity_kwp * 1000.0) / PANEL_WATTAGE).ceil() as u64;

    let battery_cost = if input.has_battery { BATTERY_COST } else { 0 };
    // Extreme consumption can push the panel subtotal past u64::MAX;
    // saturate instead of wrapping.
    let total_cost = panel_count
        .saturating_mul(PANEL_COST)
        .saturating_add(INVERTER_COST)
        .saturating_add(battery_cost)
        .saturating_add(INSTALLATION_COST);

    let monthly_savings = input.monthly_consumption_kwh * input.energy_tariff;
    let payback_months = if monthly_savings > 0.0 {
        Some((total_cost as f64 / monthly_savings).ceil() as u64)
    } else {
        None
    };

    CalculationResult {
        city: input.city.clone(),
        monthly_consumption_kwh: input.monthly_consumption_kwh,
        has_battery: input.has_battery,
        irradiance,
        system_efficiency: efficiency,
        daily_consumption_kwh,
        required_daily_energy_kwh,
        system_capacity_kwp: format!("{system_capacity_kwp:.2}"),
        panel_count,
        total_cost,
        monthly_savings,
        payback_months,
    }
}
