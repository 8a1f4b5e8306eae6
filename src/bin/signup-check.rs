use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match signup_check::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
