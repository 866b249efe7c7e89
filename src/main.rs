#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use ride_pricing::enhance_document;

fn main() {
    console_error_panic_hook::set_once();
    // Listeners keep the controller alive once bound
    let _pricing = enhance_document();
}
