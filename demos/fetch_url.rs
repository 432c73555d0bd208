use fetch_bridge::net::fetch;

#[tokio::main]
async fn main() {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/".to_string());

    match fetch(&url).await {
        Ok(resp) => {
            println!("{} {} (ok: {}, redirected: {})", resp.status, resp.status_text, resp.ok, resp.redirected);
            for (name, value) in &resp.headers {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
            println!();
            println!("{}", resp.text());
        }
        Err(err) => {
            eprintln!("fetch failed: {err}");
            std::process::exit(1);
        }
    }
}
