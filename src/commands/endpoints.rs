//! `endpoints` and `info` command implementations

use crate::{endpoints::EndpointRegistry, Result};

/// One line per endpoint, optionally followed by its indented note.
pub fn format_endpoint_list(registry: &EndpointRegistry, notes: bool) -> String {
    let mut out = String::new();
    for (name, descriptor) in registry.iter() {
        out.push_str(name);
        out.push('\n');
        if notes {
            if let Some(note) = &descriptor.note {
                out.push_str("    ");
                out.push_str(note);
                out.push('\n');
            }
        }
    }
    out
}

pub fn handle_endpoints(registry: &EndpointRegistry, notes: bool) -> Result<()> {
    print!("{}", format_endpoint_list(registry, notes));
    Ok(())
}

pub fn handle_info(registry: &EndpointRegistry, endpoint: &str) -> Result<()> {
    let descriptor = registry.lookup(endpoint)?;
    println!("{}", serde_json::to_string_pretty(descriptor)?);
    Ok(())
}
