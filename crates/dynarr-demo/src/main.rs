use std::process::ExitCode;

use dynarr_log::warn;

use dynarr_demo::{DemoSettings, expand_error, install_log_formats, run};

fn main() -> ExitCode {
    dynarr_log::init();
    if let Err(err) = install_log_formats() {
        warn!("default log formats kept: {}", err);
    }
    let result = DemoSettings::from_env().and_then(|settings| run(&settings));
    match result {
        Ok(report) => {
            print!("{}", report);
            println!("All demo operations completed successfully.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            if !expand_error!(&err) {
                eprintln!("dynarr-demo: {}", err);
            }
            ExitCode::FAILURE
        },
    }
}
