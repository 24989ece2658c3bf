//! prodtrack main entrypoint.

use prodtrack::run;
use prodtrack::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
