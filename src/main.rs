use deploy_vars::{cli, ui};

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run().await {
        // Single terminal failure signal: one message, exit 1, no outputs.
        ui::output::error(format!("Action failed with error: {:#}", err));
        std::process::exit(1);
    }
}
