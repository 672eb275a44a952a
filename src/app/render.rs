//! Plain-text rendering of the dashboard panels.
//!
//! Renders whatever the views currently hold; it never triggers a fetch.
//! Rendering the same snapshots twice yields the same text.

use std::fmt::Write;

use crate::config::RouteSet;
use crate::dashboard::{to_map_markers, IdentityView, TopIpsView};

/// Renders the overview screen: navigation, identity card, ranked IP table
/// and the marker summary for the map panel.
pub fn render_overview(identity: &IdentityView, top_ips: &TopIpsView, routes: &RouteSet) -> String {
    let mut out = String::new();

    let nav: Vec<&str> = routes.iter().map(|route| route.label.as_str()).collect();
    let _ = writeln!(out, "Nav: {}", nav.join(" | "));
    let _ = writeln!(out);

    render_identity_card(&mut out, identity);
    let _ = writeln!(out);

    render_top_ips_table(&mut out, top_ips);

    let markers = to_map_markers(&top_ips.records);
    let _ = writeln!(out, "Map markers: {}", markers.len());
    for marker in &markers {
        let _ = writeln!(
            out,
            "  {} count={} lat={} lon={}",
            marker.ip, marker.count, marker.lat, marker.lon
        );
    }

    out
}

fn render_identity_card(out: &mut String, identity: &IdentityView) {
    if identity.loading {
        let _ = writeln!(out, "Host: loading system information...");
        return;
    }
    match (&identity.system_info, &identity.error) {
        (Some(info), _) => {
            let _ = writeln!(out, "Host: {} ({})", info.hostname, info.internal_ip);
        }
        (None, Some(message)) => {
            let _ = writeln!(out, "Host: {message}");
        }
        (None, None) => {
            let _ = writeln!(out, "Host: unknown");
        }
    }
}

fn render_top_ips_table(out: &mut String, top_ips: &TopIpsView) {
    match &top_ips.last_updated {
        Some(updated) => {
            let _ = writeln!(
                out,
                "Top Source IPs (updated {}, {} poll(s) applied):",
                updated.to_rfc3339(),
                top_ips.polls_applied
            );
        }
        None => {
            let _ = writeln!(out, "Top Source IPs (awaiting first poll):");
        }
    }

    let _ = writeln!(
        out,
        "{:<17} {:>7} {:<16} {:<12} {:<10} {}",
        "IP Address", "Count", "City", "Region", "Country", "ISP"
    );
    for record in &top_ips.records {
        let _ = writeln!(
            out,
            "{:<17} {:>7} {:<16} {:<12} {:<10} {}",
            record.ip, record.count, record.city, record.region, record.country, record.isp
        );
    }
}
