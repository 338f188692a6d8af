#[tokio::main]
async fn main() {
    subscription_value_lib::run().await
}
