//! Dispatch a string to one of three numbered cases, or to a default.
//!
//! Run with `cargo run -p switchyard --example hello_switch`.

use switchyard::{DispatchTable, Directive};

type SwitchType = DispatchTable<i32, fn(String)>;

fn main() {
    let switch = SwitchType::new([
        Directive::case(1, |s: String| println!("Case 1: {s}")),
        Directive::case(2, |s: String| println!("Case 2: {s}")),
        Directive::case(4, |s: String| println!("Case 4: {s}")),
        Directive::default(|s: String| println!("Unknown case: {s}")),
    ]);

    switch.resolve(&1, ("Hello Switch!".to_string(),));
    switch.resolve(&3, ("x".to_string(),));
    switch.resolve(&2, ("y".to_string(),));
}
