use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match event_service::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            eprintln!("event-service: {}", e);
            ExitCode::FAILURE
        }
    }
}
