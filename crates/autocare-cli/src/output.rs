//! Output formatting module

use autocare_types::{
    DiagnosticReport, DueStatus, OutputFormat, ProjectedService, RegisteredVehicle, Result,
};

/// Print a registered vehicle list
pub fn output_vehicles(format: OutputFormat, vehicles: &[RegisteredVehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles registered.");
        return Ok(());
    }

    println!("\nRegistered Vehicles");
    println!("===================");
    for vehicle in vehicles {
        println!(
            "{}  {:>8} km  [{}]",
            vehicle.display_name(),
            vehicle.current_km,
            vehicle.id
        );
        if let Some(ref vin) = vehicle.vin {
            println!("  VIN: {}", vin);
        }
    }
    Ok(())
}

/// Print the projected schedule produced at registration
pub fn output_projection(
    format: OutputFormat,
    vehicle: &RegisteredVehicle,
    schedule: &[ProjectedService],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
        return Ok(());
    }

    println!("\nRegistered: {} [{}]", vehicle.display_name(), vehicle.id);
    println!("\nProjected Maintenance Schedule");
    println!("==============================");
    for item in schedule {
        println!(
            "{}{:<22} due at {:>8} km or {}  ({}, {})",
            if item.critical { "! " } else { "  " },
            item.service_type,
            item.due_km,
            item.due_date.format("%Y-%m-%d"),
            item.difficulty.label(),
            item.cost,
        );
    }
    Ok(())
}

/// Print due statuses, most urgent first
pub fn output_statuses(
    format: OutputFormat,
    vehicle: &RegisteredVehicle,
    statuses: &[DueStatus],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(statuses)?);
        return Ok(());
    }

    println!("\n{} ({} km)", vehicle.display_name(), vehicle.current_km);
    println!("{}", "-".repeat(40));
    if statuses.is_empty() {
        println!("No matching maintenance rules.");
        return Ok(());
    }
    for status in statuses {
        println!(
            "[{:<8}] {:<22} {:>7} km / {:>6.1} months remaining  ({})",
            status.urgency.label(),
            status.service_type,
            status.km_remaining,
            status.months_remaining,
            status.cost,
        );
    }
    Ok(())
}

/// Print one diagnostic report
pub fn output_report(format: OutputFormat, report: &DiagnosticReport) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let result = &report.result;
    println!("\nDiagnostic Report");
    println!("=================");
    println!(
        "Vehicle:    {} {} {}",
        result.vehicle.year, result.vehicle.make, result.vehicle.model
    );
    println!("Severity:   {}", result.severity.label());
    println!("Confidence: {:.0}%", result.confidence * 100.0);
    println!(
        "\nPrimary issue: {} ({} / {})  {:.0}%",
        result.primary.cause,
        result.primary.system,
        result.primary.symptom,
        result.primary.confidence * 100.0
    );

    if result.findings.len() > 1 {
        println!("\nOther candidates:");
        for finding in result.findings.iter().skip(1) {
            println!(
                "  {} ({} / {})  {:.0}%",
                finding.cause,
                finding.system,
                finding.symptom,
                finding.confidence * 100.0
            );
        }
    }

    let advice = &result.advice;
    println!("\nRepair guide ({}):", advice.difficulty.label());
    for (i, step) in advice.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!("Time: {}   Cost: {}", advice.estimated_time, advice.estimated_cost);
    Ok(())
}

/// Print a stored report list, one summary line each
pub fn output_report_list(format: OutputFormat, reports: &[DiagnosticReport]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No diagnostic reports stored.");
        return Ok(());
    }

    println!("\nDiagnostic Reports");
    println!("==================");
    for report in reports {
        println!(
            "{}  [{:<6}] {}  ({:.0}%)",
            report.created_at.format("%Y-%m-%d %H:%M"),
            report.result.severity.label(),
            report.result.primary.cause,
            report.result.confidence * 100.0,
        );
    }
    Ok(())
}
