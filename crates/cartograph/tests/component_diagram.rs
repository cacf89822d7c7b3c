//! Integration tests for the PlantUML component-diagram renderer

use cartograph::core::{
    BoundedContext, ContextMap, DownstreamRole, Relationship, Renderer, SymmetricRelationship,
    UpstreamDownstreamRelationship, UpstreamRole,
};
use cartograph::plantuml::ComponentDiagramRenderer;
use cartograph::render_component_diagram;

fn sample_map() -> ContextMap {
    let mut map = ContextMap::new();
    map.add_bounded_context(
        BoundedContext::new("CustomerManagement")
            .with_vision_statement("Manages the lifecycle of every customer and their contracts"),
    )
    .unwrap();
    map.add_bounded_context(BoundedContext::new("PolicyManagement")).unwrap();
    map.add_bounded_context(BoundedContext::new("PrintingContext")).unwrap();

    map.add_relationship(Relationship::SharedKernel(
        SymmetricRelationship::new("CustomerManagement", "PolicyManagement")
            .with_implementation_technology("Java Library"),
    ));
    map.add_relationship(Relationship::UpstreamDownstream(
        UpstreamDownstreamRelationship::customer_supplier("PrintingContext", "PolicyManagement")
            .with_upstream_role(UpstreamRole::OpenHostService)
            .with_downstream_role(DownstreamRole::AnticorruptionLayer)
            .with_implementation_technology("SOAP"),
    ));
    map
}

#[test]
fn empty_map_output_is_exactly_the_placeholder_note() {
    let map = ContextMap::new();
    let output = render_component_diagram(&map).unwrap();
    assert_eq!(
        output,
        "@startuml\n\
         \n\
         note \"Sorry, we cannot generate a component diagram. Your Context Map seems to be empty.\" as EmptyDiagramError\n\
         \n\
         @enduml\n"
    );
}

#[test]
fn full_map_renders_expected_text() {
    let output = render_component_diagram(&sample_map()).unwrap();
    assert_eq!(
        output,
        "@startuml\n\
         \n\
         component [CustomerManagement]\n\
         note right of [CustomerManagement]\n\
         Manages the lifecycle of every\n\
         customer and their contracts\n\
         end note\n\
         component [PolicyManagement]\n\
         component [PrintingContext]\n\
         \n\
         [CustomerManagement]<-->[PolicyManagement] : Shared Kernel (Java Library)\n\
         \n\
         interface \"Customer-Supplier (SOAP)\" as PolicyManagement_to_PrintingContext\n\
         [PrintingContext] --> PolicyManagement_to_PrintingContext : OHS\n\
         PolicyManagement_to_PrintingContext <.. [PolicyManagement] : use : ACL\n\
         \n\
         @enduml\n"
    );
}

#[test]
fn rendering_is_idempotent() {
    let map = sample_map();
    let renderer = ComponentDiagramRenderer::new();
    let first = renderer.render(&map).unwrap();
    let second = renderer.render(&map).unwrap();
    assert_eq!(first, second);
}

#[test]
fn contexts_and_relationships_keep_model_order() {
    let mut map = ContextMap::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        map.add_bounded_context(BoundedContext::new(name)).unwrap();
    }
    map.add_relationship(Relationship::Partnership(SymmetricRelationship::new(
        "Zeta", "Mid",
    )));
    map.add_relationship(Relationship::SharedKernel(SymmetricRelationship::new(
        "Alpha", "Zeta",
    )));

    let output = render_component_diagram(&map).unwrap();
    let zeta = output.find("component [Zeta]").unwrap();
    let alpha = output.find("component [Alpha]").unwrap();
    let mid = output.find("component [Mid]").unwrap();
    assert!(zeta < alpha && alpha < mid);

    let partnership = output.find("[Zeta]<-->[Mid]").unwrap();
    let shared_kernel = output.find("[Alpha]<-->[Zeta]").unwrap();
    assert!(partnership < shared_kernel);
}

#[test]
fn note_wrap_preserves_every_word() {
    let vision = "alpha beta gamma delta epsilon zeta eta";
    let mut map = ContextMap::new();
    map.add_bounded_context(BoundedContext::new("Orders").with_vision_statement(vision))
        .unwrap();

    let lines = ComponentDiagramRenderer::new().diagram_lines(&map);
    let open = lines.iter().position(|l| l == "note right of [Orders]").unwrap();
    let close = lines.iter().position(|l| l == "end note").unwrap();
    let reconstructed = lines[open + 1..close].join(" ");
    assert_eq!(reconstructed, vision);
}

#[test]
fn note_lines_reach_threshold_before_flushing() {
    let vision = "alpha beta gamma delta epsilon zeta eta";
    let mut map = ContextMap::new();
    map.add_bounded_context(BoundedContext::new("Orders").with_vision_statement(vision))
        .unwrap();

    let lines = ComponentDiagramRenderer::new().diagram_lines(&map);
    let open = lines.iter().position(|l| l == "note right of [Orders]").unwrap();
    let close = lines.iter().position(|l| l == "end note").unwrap();
    let note_lines = &lines[open + 1..close];
    // Counter counts one extra per word, so the flushed line's counter is
    // word lengths plus word count.
    for line in &note_lines[..note_lines.len() - 1] {
        let counter: usize = line.split(' ').map(|w| w.chars().count() + 1).sum();
        assert!(counter >= 30, "flushed line below threshold: {:?}", line);
    }
}

#[test]
fn duplicate_renders_from_concurrent_readers_match() {
    let map = std::sync::Arc::new(sample_map());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let map = std::sync::Arc::clone(&map);
        handles.push(std::thread::spawn(move || {
            ComponentDiagramRenderer::new().render(&map).unwrap()
        }));
    }
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}
