use dify_probe::{ChatMessageRequest, Config, DifyClient, ProbeError};
use dotenv::dotenv;
use std::env;

const DEFAULT_QUERY: &str = "Hello, are you online?";
const PROBE_USER: &str = "test-user-123";
const SEPARATOR: &str = "------------------------------";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let client = DifyClient::new(Config::from_env());

    println!("Testing URL: {}", client.endpoint());
    println!("Sending request...");

    let request = ChatMessageRequest::blocking(&query, PROBE_USER);
    match client.send(&request).await {
        Ok(reply) => {
            println!("Status Code: {}", reply.status);
            println!("{SEPARATOR}");
            println!("Response Body:");
            println!("{}", reply.body);
            println!("{SEPARATOR}");
            if reply.is_json() {
                println!("✅ Success! Valid JSON response received.");
                if let Some(answer) = &reply.answer {
                    println!("🤖 Answer: {answer}");
                }
            } else {
                println!("Received non-JSON response.");
            }
        }
        Err(ProbeError::Api {
            status,
            reason,
            body,
        }) => {
            println!("❌ HTTP Error: {status} {reason}");
            println!("Error Details: {body}");
        }
        Err(ProbeError::Connect(reason)) => {
            println!("❌ Connection Error: {reason}");
            println!("Tip: Make sure you are connected to your network/VPN and the address is correct.");
        }
        Err(err) => {
            println!("❌ Unexpected Error: {err}");
        }
    }
}
