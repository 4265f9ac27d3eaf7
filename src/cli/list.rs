//! # List Command
//!
//! Command to list registered validators.

use verify::registry;

pub fn list_command() {
    for name in registry::names() {
        println!("{name}");
    }
}
