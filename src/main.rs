use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = move_to_folder::cli::parse();
    app::run(args)
}
