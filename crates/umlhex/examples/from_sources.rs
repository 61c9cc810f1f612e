//! Example: Rendering an in-memory set of diagrams
//!
//! This example builds a small name to source mapping in code and renders it
//! through the public PlantUML server into `diagrams_hex/`.

use indexmap::IndexMap;

use umlhex::{Renderer, config::RenderConfig, encode::encode_hex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagrams = IndexMap::new();
    diagrams.insert(
        "sequence_diagram".to_string(),
        "@startuml\nStudent -> Portal : login\nPortal --> Student : balance\n@enduml".to_string(),
    );
    diagrams.insert(
        "component_diagram".to_string(),
        "@startuml\n[Frontend] --> [Backend]\n[Backend] --> [Database]\n@enduml".to_string(),
    );

    let renderer = Renderer::with_http(RenderConfig::default())?;

    println!("Encoded first diagram: {}", encode_hex(&diagrams[0]));

    for (name, outcome) in renderer.render_all(&diagrams) {
        println!("{name}: {outcome}");
    }

    Ok(())
}
