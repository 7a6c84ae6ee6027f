use chrono::Utc;

use pixelsports_m3u_lib::api::EventsClient;
use pixelsports_m3u_lib::playlist::build_m3u;

const OUTPUT_FILE: &str = "Pixelsports.m3u8";

#[tokio::main]
async fn main() {
    println!("[*] Fetching PixelSport live events…");
    if let Err(err) = run().await {
        println!("[!] Unexpected error: {}", err);
    }
}

async fn run() -> Result<(), anyhow::Error> {
    let client = EventsClient::new();
    let events = match client.fetch_events().await {
        Ok(events) => events,
        Err(err) => {
            println!("[!] Error fetching data: {}", err);
            return Ok(());
        }
    };

    if events.is_empty() {
        println!("[-] No live events found.");
        return Ok(());
    }

    let playlist = build_m3u(&events, Utc::now());
    std::fs::write(OUTPUT_FILE, &playlist)?;
    println!(
        "[+] Saved playlist: {} ({} events)",
        OUTPUT_FILE,
        events.len()
    );
    Ok(())
}
