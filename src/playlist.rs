use chrono::{DateTime, Utc};

use crate::api::{Event, FEED_REFERER, FEED_USER_AGENT};
use crate::leagues;
use crate::times::{game_status, utc_to_eastern};

/// Value for the icy-metadata player option line.
pub const VLC_ICY_METADATA: &str = "1";

/// Collect qualifying stream URLs from an event with Home/Away/Alt labels.
///
/// Scans the three positional server fields in order; a field qualifies
/// when present, non-empty, and not the literal string "null". Server 1
/// belongs to competitor 1 and server 2 to competitor 2, so the Home/Away
/// labels flip with the `competitors1_homeAway` flag. Server 3 is always
/// an alternate feed.
pub fn collect_links(event: &Event) -> Vec<(String, &'static str)> {
    let Some(channel) = event.channel.as_ref() else {
        return Vec::new();
    };
    let comp1_home = event
        .competitors1_home_away
        .as_deref()
        .map(|v| v.eq_ignore_ascii_case("home"))
        .unwrap_or(false);

    let slots = [
        (
            channel.server1_url.as_deref(),
            if comp1_home { "Home" } else { "Away" },
        ),
        (
            channel.server2_url.as_deref(),
            if comp1_home { "Away" } else { "Home" },
        ),
        (channel.server3_url.as_deref(), "Alt"),
    ];

    let mut links = Vec::new();
    for (url, label) in slots {
        if let Some(url) = url {
            if !url.is_empty() && !url.eq_ignore_ascii_case("null") {
                links.push((url.to_string(), label));
            }
        }
    }
    links
}

/// Generate the M3U playlist text with EXTVLCOPT headers and smart group
/// titles. One block per qualifying stream link, in event order.
///
/// `now` drives the status label so the output is deterministic for a
/// fixed input. No event can fail the build; missing fields fall back to
/// documented defaults.
pub fn build_m3u(events: &[Event], now: DateTime<Utc>) -> String {
    let mut lines = vec!["#EXTM3U".to_string()];
    for event in events {
        let mut title = event
            .match_name
            .as_deref()
            .unwrap_or("Unknown Event")
            .trim()
            .to_string();

        let date_str = event.date.as_deref().unwrap_or("");
        let time_et = utc_to_eastern(date_str);
        let status = game_status(date_str, now);
        if !time_et.is_empty() {
            title = format!("{} - {}", title, time_et);
        }
        if !status.is_empty() {
            title = format!("{} - {}", title, status);
        }

        let league = event
            .channel
            .as_ref()
            .and_then(|c| c.tv_category.as_ref())
            .and_then(|cat| cat.name.as_deref())
            .unwrap_or("LIVE");
        let (tvg_id, group_logo, group_display) = leagues::classify(league);

        let logo = match event.competitors1_logo.as_deref() {
            Some(own) if !own.is_empty() => own,
            _ => group_logo,
        };

        for (link, label) in collect_links(event) {
            lines.push(format!(
                "#EXTINF:-1 tvg-id=\"{}\" tvg-logo=\"{}\" group-title=\"Pixelsports - {} - {}\",{}",
                tvg_id, logo, group_display, label, title
            ));
            lines.push(format!("#EXTVLCOPT:http-user-agent={}", FEED_USER_AGENT));
            lines.push(format!("#EXTVLCOPT:http-referrer={}", FEED_REFERER));
            lines.push(format!("#EXTVLCOPT:http-icy-metadata={}", VLC_ICY_METADATA));
            lines.push(link);
        }
    }
    lines.join("\n")
}
