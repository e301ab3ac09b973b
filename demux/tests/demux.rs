//! End-to-end demultiplexer tests: one TriG document in, three Turtle
//! views out, then the views pushed through the render pipeline the way
//! the site generator composes them.

use graphnav_demux::{demux_document, DemuxError};
use graphnav_render::{render_document, PrefixTable, Region};

/// A TriG document shaped like an entity listing: one quad block per
/// view graph plus a default-graph statement that no view should see.
fn entity_listing() -> &'static str {
    "@prefix hydra: <http://www.w3.org/ns/hydra/core#> .\n\
     @prefix sdo: <https://schema.org/> .\n\
     @prefix eav: <http://av.meg.io/> .\n\
     <urn:pwid:meg:nav> {\n\
     _:apiDocs a hydra:ApiDocumentation ;\n\
         hydra:title \"Entity Graph API\" .\n\
     }\n\
     <urn:pwid:meg:data> {\n\
     <http://localhost:8080/api/entities/b4da> a sdo:LearningResource ;\n\
         sdo:name \"Lesson one\" .\n\
     <http://localhost:8080/api/entities/c9ee> a sdo:Course .\n\
     }\n\
     <urn:pwid:meg:details> {\n\
     <http://localhost:8080/api/entities/b4da> eav:hash \"0x1\" .\n\
     }\n\
     <http://example.org/audit> <http://example.org/seen> \"untracked\" .\n"
}

#[test]
fn quads_land_in_their_view_and_nowhere_else() -> Result<(), DemuxError> {
    let output = demux_document(entity_listing())?;

    assert!(output.navigation.contains(" a hydra:ApiDocumentation ;"));
    assert!(output
        .navigation
        .contains("    hydra:title \"Entity Graph API\" ."));
    assert!(!output.navigation.contains("sdo:"));

    assert!(output.data.contains(" a sdo:LearningResource ;"));
    assert!(output.data.contains("    sdo:name \"Lesson one\" ."));
    assert!(!output.data.contains("hydra:"));
    assert!(!output.data.contains("eav:"));

    assert!(output.details.contains("eav:hash \"0x1\""));
    assert!(!output.details.contains("hydra:"));

    Ok(())
}

#[test]
fn default_graph_statements_are_dropped() -> Result<(), DemuxError> {
    let output = demux_document(entity_listing())?;
    for view in [&output.navigation, &output.data, &output.details] {
        assert!(!view.contains("untracked"));
        assert!(!view.contains("audit"));
    }
    Ok(())
}

#[test]
fn prefix_directives_route_by_label() -> Result<(), DemuxError> {
    let output = demux_document(entity_listing())?;

    assert!(output
        .navigation
        .starts_with("@prefix hydra: <http://www.w3.org/ns/hydra/core#> .\n"));
    assert!(!output.navigation.contains("@prefix sdo:"));
    assert!(!output.navigation.contains("@prefix eav:"));

    assert!(output.data.contains("@prefix sdo: <https://schema.org/> ."));
    assert!(!output.data.contains("@prefix hydra:"));
    assert!(!output.data.contains("@prefix eav:"));

    assert!(output.details.contains("@prefix sdo: <https://schema.org/> ."));
    assert!(output.details.contains("@prefix eav: <http://av.meg.io/> ."));
    assert!(!output.details.contains("@prefix hydra:"));

    Ok(())
}

#[test]
fn subjects_keep_their_arrival_order() -> Result<(), DemuxError> {
    let output = demux_document(entity_listing())?;
    let first = output.data.find("b4da");
    let second = output.data.find("c9ee");
    assert!(first.is_some());
    assert!(second.is_some());
    assert!(first < second);
    Ok(())
}

#[test]
fn each_subject_block_becomes_one_fragment() -> Result<(), DemuxError> {
    let output = demux_document(entity_listing())?;
    // Prefix header, then one paragraph per subject.
    let paragraphs: Vec<&str> = output
        .data
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();
    assert_eq!(paragraphs.len(), 3);
    assert!(paragraphs[0].starts_with("@prefix"));
    assert!(paragraphs[1].contains("b4da"));
    assert!(paragraphs[2].contains("c9ee"));
    Ok(())
}

#[test]
fn views_render_without_reparsing_errors() -> Result<(), Box<dyn std::error::Error>> {
    let prefixes = PrefixTable::from_json(
        r#"{
            "hydra": { "url": "http://www.w3.org/ns/hydra/core#", "external": true },
            "sdo": { "url": "https://schema.org/", "external": true },
            "eav": { "url": "http://av.meg.io/" }
        }"#,
    )?;
    let output = demux_document(entity_listing())?;

    let nav = render_document(&output.navigation, &prefixes)?;
    assert!(nav.get(Region::Header).contains("class=\"ns\""));
    assert!(nav
        .get(Region::Navigation)
        .contains("class=\"definition\""));

    let data = render_document(&output.data, &prefixes)?;
    assert!(data.get(Region::Content).contains("class=\"internal\""));
    Ok(())
}

#[test]
fn truncated_trig_is_a_parse_error() {
    let result = demux_document("<urn:pwid:meg:data> { <http://example.org/s> .");
    assert!(matches!(result, Err(DemuxError::Parse(_))));
}

#[test]
fn unlexable_input_fails_before_the_parser_runs() {
    let result = demux_document("| not turtle at all");
    assert!(matches!(result, Err(DemuxError::Syntax(_))));
}
