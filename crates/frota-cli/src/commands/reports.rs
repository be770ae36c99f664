//! Report command implementations

use anyhow::{Context, Result};
use frota_core::{
    Breakdown, Dashboard, FuelFilter, FuelSummary, MaintenanceFilter, MaintenanceSummary,
};

use super::truncate;

/// Describe the active filters, e.g. "mes=2024-01, placa=ABC1D23"
fn describe_filters(filters: &[(&str, Option<&str>)]) -> String {
    let active: Vec<String> = filters
        .iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| !v.is_empty() && *v != frota_core::ALL_SENTINEL)
                .map(|v| format!("{}={}", name, v))
        })
        .collect();
    if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    }
}

fn print_breakdown(title: &str, breakdown: &Breakdown, unit: &str) {
    println!();
    println!("   {}", title);
    if breakdown.is_empty() {
        println!("   (no data)");
        return;
    }

    let max = breakdown.values.iter().copied().fold(0.0_f64, f64::max);
    println!("   {:24} │ {:>14} │", breakdown.key_label, breakdown.value_label);
    println!("   ─────────────────────────┼────────────────┼──────────────────────");
    for (key, value) in breakdown.iter() {
        let width = if max > 0.0 {
            ((value / max) * 20.0).round() as usize
        } else {
            0
        };
        println!(
            "   {:24} │ {:>10.2} {:>3} │ {}",
            truncate(key, 24),
            value,
            unit,
            "█".repeat(width)
        );
    }
}

pub fn cmd_report_fuel(dashboard: &Dashboard, filter: &FuelFilter, json: bool) -> Result<()> {
    let summary = dashboard
        .fuel_summary(filter)
        .context("Failed to build fuel summary")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_fuel_summary(&summary, filter);
    Ok(())
}

fn print_fuel_summary(summary: &FuelSummary, filter: &FuelFilter) {
    println!();
    println!("⛽ Fuel Summary");
    println!(
        "   Filters: {}",
        describe_filters(&[
            ("mes", filter.mes.as_deref()),
            ("placa", filter.placa.as_deref()),
            ("posto", filter.posto.as_deref()),
            ("combustivel", filter.combustivel.as_deref()),
        ])
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if summary.meses.is_empty() {
        println!("   No fuel records match these filters.");
        return;
    }

    println!("   Total cost:      R$ {:>12.2}", summary.custo_total);
    println!("   Distance:        {:>12.1} km", summary.km_total);
    println!("   Fuel:            {:>12.1} L", summary.litros_total);
    println!("   Cost per km:     R$ {:>12.4}", summary.custo_por_km);
    println!("   Km per liter:    {:>12.2}", summary.km_por_litro);
    println!("   Cost per liter:  R$ {:>12.4}", summary.custo_por_litro);

    print_breakdown("📅 Cost by month", &summary.custo_mensal, "R$");
    print_breakdown("🛣️  Distance by month", &summary.km_mensal, "km");
    print_breakdown("🛢️  Liters by month", &summary.litros_mensal, "L");
    print_breakdown("🏪 Cost by station", &summary.gasto_por_posto, "R$");
    print_breakdown("🔥 Cost by fuel type", &summary.gasto_por_combustivel, "R$");

    println!();
    println!("   Plates: {}", summary.placas.join(", "));
}

pub fn cmd_report_maintenance(
    dashboard: &Dashboard,
    filter: &MaintenanceFilter,
    json: bool,
) -> Result<()> {
    let summary = dashboard
        .maintenance_summary(filter)
        .context("Failed to build maintenance summary")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_maintenance_summary(&summary, filter);
    Ok(())
}

fn print_maintenance_summary(summary: &MaintenanceSummary, filter: &MaintenanceFilter) {
    println!();
    println!("🔧 Maintenance Summary");
    println!(
        "   Filters: {}",
        describe_filters(&[
            ("mes", filter.mes.as_deref()),
            ("placa", filter.placa.as_deref()),
            ("oficina", filter.oficina.as_deref()),
        ])
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if summary.total_servicos == 0 {
        println!("   No maintenance records match these filters.");
        return;
    }

    println!("   Total cost:       R$ {:>12.2}", summary.custo_total);
    println!("   Services:         {:>15}", summary.total_servicos);
    println!("   Average service:  R$ {:>12.2}", summary.media_servico);

    print_breakdown("📅 Cost by month", &summary.custo_mensal, "R$");
    print_breakdown("🚚 Cost by plate", &summary.gasto_por_placa, "R$");
    print_breakdown("🏭 Cost by workshop", &summary.gasto_por_oficina, "R$");
}
