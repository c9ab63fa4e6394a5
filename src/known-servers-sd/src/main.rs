use known_servers_sd::{cli, error_message};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = cli::process_command().await {
        error_message!("{err:#}");
        std::process::exit(1);
    }
}
