use evercraft_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("evercraft error: {err}");
        std::process::exit(1);
    }
}
