/// Fixed display identity for a recognized league keyword.
#[derive(Debug, Clone, Copy)]
pub struct LeagueInfo {
    pub keyword: &'static str,
    pub tvg_id: &'static str,
    pub logo: &'static str,
    pub group: &'static str,
}

/// Ordered keyword table; the first case-insensitive substring match wins,
/// so more specific keywords must come before broader ones.
pub const LEAGUE_TABLE: &[LeagueInfo] = &[
    LeagueInfo {
        keyword: "NFL",
        tvg_id: "NFL.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Maxx.png",
        group: "NFL",
    },
    LeagueInfo {
        keyword: "MLB",
        tvg_id: "MLB.Baseball.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Baseball3.png",
        group: "MLB",
    },
    LeagueInfo {
        keyword: "NHL",
        tvg_id: "NHL.Hockey.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Hockey2.png",
        group: "NHL",
    },
    LeagueInfo {
        keyword: "NBA",
        tvg_id: "NBA.Basketball.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Basketball-2.png",
        group: "NBA",
    },
    LeagueInfo {
        keyword: "NASCAR",
        tvg_id: "Racing.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Motorsports2.png",
        group: "NASCAR Cup Series",
    },
    LeagueInfo {
        keyword: "UFC",
        tvg_id: "UFC.Fight.Pass.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/CombatSports2.png",
        group: "UFC",
    },
    LeagueInfo {
        keyword: "SOCCER",
        tvg_id: "Soccer.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Soccer.png",
        group: "Soccer",
    },
    LeagueInfo {
        keyword: "BOXING",
        tvg_id: "PPV.EVENTS.Dummy.us",
        logo: "http://drewlive24.duckdns.org:9000/Logos/Combat-Sports.png",
        group: "Boxing",
    },
];

/// Identity used when no keyword matches.
pub const FALLBACK_TVG_ID: &str = "Pixelsports.Dummy.us";
pub const FALLBACK_GROUP: &str = "Live Sports";

/// Resolve a free-text league/category name to `(tvg_id, logo, group)`.
pub fn classify(league: &str) -> (&'static str, &'static str, &'static str) {
    let needle = league.to_lowercase();
    for info in LEAGUE_TABLE {
        if needle.contains(&info.keyword.to_lowercase()) {
            return (info.tvg_id, info.logo, info.group);
        }
    }
    (FALLBACK_TVG_ID, "", FALLBACK_GROUP)
}
