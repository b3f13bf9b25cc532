use access_map::app::{AccessMapApp, AccessMapAppError};
use clap::Parser;

fn main() -> Result<(), AccessMapAppError> {
    env_logger::init();
    let args = AccessMapApp::parse();
    args.op.run()
}
