//! `HTML` response for the statistics.
//!
//! Every counter is the only content of an element whose id is its name in the
//! `JSON` document, for example `<span id="activeTorrents">2</span>`.
use axum::response::{Html, IntoResponse, Response};
use torrust_tracker_primitives::tracker_stats::TrackerStats;

/// `200` response with the statistics page.
#[must_use]
pub fn stats(stats: &TrackerStats) -> Response {
    Html(render(stats)).into_response()
}

/// It renders the statistics page.
#[must_use]
pub fn render(stats: &TrackerStats) -> String {
    let [torrents, active_torrents, peers_all, peers_seeder_only, peers_leecher_only, peers_seeder_and_leecher, peers_ipv4, peers_ipv6] =
        stats.counters().map(|(id, value)| counter(id, value));

    let clients: String = stats
        .clients
        .iter()
        .map(|(name, versions)| {
            let versions: String = versions
                .iter()
                .map(|(version, peers)| format!("<li>{}: {peers}</li>", escape(version)))
                .collect();

            format!("<li><strong>{}</strong><ul>{versions}</ul></li>", escape(name))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Tracker Statistics</title></head>\n\
         <body>\n\
         <h1>{torrents} torrents ({active_torrents} active)</h1>\n\
         <h2>Connected Peers: {peers_all}</h2>\n\
         <h3>Peers Seeding Only: {peers_seeder_only}</h3>\n\
         <h3>Peers Leeching Only: {peers_leecher_only}</h3>\n\
         <h3>Peers Seeding &amp; Leeching: {peers_seeder_and_leecher}</h3>\n\
         <h3>IPv4 Peers: {peers_ipv4}</h3>\n\
         <h3>IPv6 Peers: {peers_ipv6}</h3>\n\
         <h3>Clients:</h3>\n\
         <ul>{clients}</ul>\n\
         </body>\n\
         </html>\n"
    )
}

fn counter(id: &str, value: u64) -> String {
    format!("<span id=\"{id}\">{value}</span>")
}

/// Client versions of unknown clients are taken from the peer ID bytes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}
