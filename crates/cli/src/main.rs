use std::process::ExitCode;

fn main() -> ExitCode {
    prodcat_observability::init();

    match prodcat_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            eprintln!("prodcat: {err:#}");
            ExitCode::FAILURE
        }
    }
}
