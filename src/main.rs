#[tokio::main]
async fn main() {
    if let Err(e) = sehatlink_lib::run().await {
        eprintln!("sehatlink: {e}");
        std::process::exit(1);
    }
}
