#[tokio::main]
async fn main() {
    auth_portal::serve().await;
}
