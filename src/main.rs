//! rworkhours main entrypoint.

use rworkhours::run;
use rworkhours::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
