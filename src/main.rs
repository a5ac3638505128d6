use std::io;

use sun_lighting_report::{write_report, ReportError};

fn main() -> Result<(), ReportError> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out)
}
