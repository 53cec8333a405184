//! Plain-text rendering of estimate results.

use fitout_core::calculations::{CeilingEstimate, WallPanelEstimate};
use fitout_core::models::Panel;
use std::fmt::Write;

/// Shown when an estimator returns no result for the given dimensions.
pub const EMPTY_ESTIMATE: &str = "No estimate: enter positive dimensions.";

fn line(
    out: &mut String,
    label: &str,
    quantity: impl std::fmt::Display,
    cost: impl std::fmt::Display,
) {
    let _ = writeln!(out, "  {label:<24} {quantity:>10} {cost:>12}");
}

/// Itemized ceiling bill of materials.
pub fn ceiling(estimate: &CeilingEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Suspended ceiling estimate");
    line(&mut out, "Item", "Qty", "Cost");
    line(&mut out, "Panels", estimate.panels, estimate.panels_cost);
    line(
        &mut out,
        "Cross tees",
        estimate.cross_tees,
        estimate.cross_tees_cost,
    );
    line(
        &mut out,
        "Main tees (12 ft)",
        estimate.main_tees,
        estimate.main_tees_cost,
    );
    line(
        &mut out,
        "Wall angles (10 ft)",
        estimate.wall_angles,
        estimate.wall_angles_cost,
    );
    line(
        &mut out,
        "Binding wire",
        format!("{} g", estimate.binding_grams),
        estimate.binding_cost,
    );
    line(&mut out, "Nails", estimate.nails, estimate.nails_cost);

    let extras = &estimate.extras;
    if extras.led_bulbs > 0 {
        line(
            &mut out,
            "LED bulbs",
            extras.led_bulbs,
            estimate.led_bulbs_cost,
        );
    }
    if extras.decorative_bulbs > 0 {
        line(
            &mut out,
            "Decorative bulbs",
            extras.decorative_bulbs,
            estimate.decorative_bulbs_cost,
        );
    }
    if extras.rivets > 0 {
        line(&mut out, "Rivets", extras.rivets, estimate.rivets_cost);
    }
    if extras.super_nails > 0 {
        line(
            &mut out,
            "Super nails",
            extras.super_nails,
            estimate.super_nails_cost,
        );
    }
    if extras.silicone_tubes > 0 {
        line(
            &mut out,
            "Silicone tubes",
            extras.silicone_tubes,
            estimate.silicone_cost,
        );
    }
    if extras.extra_items > 0 {
        line(&mut out, "Extra", extras.extra_items, estimate.extra_cost);
    }

    line(&mut out, "Total", "", estimate.total_cost);
    out
}

/// Itemized wall panel bill with the color run.
pub fn wall(estimate: &WallPanelEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Wall panel estimate — {} ft × {} ft, {} panels",
        estimate.wall.width,
        estimate.wall.height,
        estimate.panel_type.as_str(),
    );
    let _ = writeln!(out, "  Run: {}", describe_run(&estimate.panels));
    line(&mut out, "Item", "Qty", "Cost");
    line(
        &mut out,
        "Panels",
        estimate.total_panels,
        estimate.panels_cost,
    );
    line(&mut out, "Clips", estimate.clips, estimate.clips_cost);
    line(&mut out, "Screws", estimate.screws, "");
    line(&mut out, "Roll plugs", estimate.roll_plugs, "");
    if estimate.led_strip_meters > rust_decimal::Decimal::ZERO {
        let label = match estimate.led_color {
            Some(color) => format!("LED strip ({})", color.as_str()),
            None => "LED strip".to_string(),
        };
        line(
            &mut out,
            &label,
            format!("{} m", estimate.led_strip_meters),
            estimate.led_strip_cost,
        );
    }
    if estimate.feature_area.is_some() {
        line(&mut out, "Feature area", "", estimate.feature_area_cost);
    }
    if estimate.labor_cost > rust_decimal::Decimal::ZERO {
        line(&mut out, "Labor", "", estimate.labor_cost);
    }
    line(&mut out, "Total", "", estimate.total_cost);
    out
}

/// Run-length summary of the panel run, e.g. `3× black-gold, 2× white-gold`.
fn describe_run(panels: &[Panel]) -> String {
    let mut spans: Vec<(usize, &str)> = Vec::new();
    for panel in panels {
        match spans.last_mut() {
            Some((count, color)) if *color == panel.color.as_str() => *count += 1,
            _ => spans.push((1, panel.color.as_str())),
        }
    }
    spans
        .iter()
        .map(|(count, color)| format!("{count}\u{d7} {color}"))
        .collect::<Vec<_>>()
        .join(", ")
}
