// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end compilation of a realistic print pipeline.

use crate::config::consts::{CLIENT_HTTP_REQUEST_FACTORY_KEY, REQUEST_HEADERS_KEY, TEMPLATE_KEY};
use crate::graph::testing::TestProcessor;
use crate::graph::{DependencyRule, GraphBuilder, NodeId};
use crate::traits::Processor;
use crate::values::{InputField, InputSchema, OutputField, OutputSchema, ValueType};
use std::collections::HashSet;
use std::sync::Arc;

fn pipeline() -> Vec<Arc<dyn Processor>> {
    // create_map: reads the request's map definition, fetches tiles, and
    // publishes the rendered map graphic.
    let create_map = TestProcessor::new("create_map")
        .inputs(
            InputSchema::new()
                .field(InputField::new("map_definition", ValueType::new("map_definition")))
                .field(InputField::new(
                    CLIENT_HTTP_REQUEST_FACTORY_KEY,
                    ValueType::new("http_request_factory"),
                )),
        )
        .outputs(
            OutputSchema::new()
                .field(OutputField::new("map", ValueType::new("map_graphic")))
                .field(OutputField::new("timing", ValueType::new("stats")).renamable()),
        );

    // set_style: transforms the map in place.
    let set_style = TestProcessor::new("set_style").inputs(
        InputSchema::new()
            .field(InputField::new("map", ValueType::new("map_graphic")).pass_through())
            .field(InputField::new("style", ValueType::new("style")).with_default()),
    );

    // create_overview: consumes the styled map under its own local name.
    let create_overview = TestProcessor::new("create_overview")
        .inputs(InputSchema::new().field(InputField::new("overviewMap", ValueType::new("map_graphic"))))
        .input_mapping("map", "overviewMap")
        .outputs(OutputSchema::new().field(OutputField::new("overview", ValueType::new("map_graphic"))));

    // write_headers: no data-flow relation to the rest of the pipeline.
    let write_headers = TestProcessor::new("write_headers").inputs(
        InputSchema::new().field(InputField::new(REQUEST_HEADERS_KEY, ValueType::new("headers"))),
    );

    // render_report: assembles the final document.
    let render_report = TestProcessor::new("render_report")
        .inputs(
            InputSchema::new()
                .field(InputField::new("map", ValueType::new("map_graphic")))
                .field(InputField::new("overview", ValueType::new("map_graphic")))
                .field(InputField::new(TEMPLATE_KEY, ValueType::new("template"))),
        )
        .outputs(OutputSchema::new().field(OutputField::new("report", ValueType::new("report"))));

    vec![
        Arc::new(create_map),
        Arc::new(set_style),
        Arc::new(create_overview),
        Arc::new(write_headers),
        Arc::new(render_report),
    ]
}

fn attributes() -> HashSet<String> {
    ["map_definition", "timing"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn pipeline_compiles_with_expected_edges() {
    let rules = vec![DependencyRule::new("render_report", "write_headers")];
    let graph = GraphBuilder::with_rules(rules)
        .build(&pipeline(), &attributes())
        .unwrap();

    let create_map = NodeId(0);
    let set_style = NodeId(1);
    let create_overview = NodeId(2);
    let write_headers = NodeId(3);
    let render_report = NodeId(4);

    // Roots: only the nodes whose inputs are all external.
    assert_eq!(graph.root_ids(), &[create_map, write_headers]);

    // The styled map threads through set_style before anyone else reads it.
    assert!(graph.node(set_style).requires(create_map));
    assert!(graph.node(create_overview).requires(set_style));
    assert!(!graph.node(create_overview).requires(create_map));

    // render_report waits on data flow and on the configured rule.
    assert!(graph.node(render_report).requires(set_style));
    assert!(graph.node(render_report).requires(create_overview));
    assert!(graph.node(render_report).requires(write_headers));

    // Every supplied processor is reachable.
    assert_eq!(graph.all_processors().len(), 5);
}

#[test]
fn pipeline_renames_colliding_debug_output() {
    // "timing" is also a request attribute, so the renamable debug output of
    // create_map moves out of the way.
    let graph = GraphBuilder::new().build(&pipeline(), &attributes()).unwrap();
    let outputs = graph.node(NodeId(0)).outputs();
    assert_eq!(outputs[1].field, "timing");
    assert_eq!(outputs[1].name, "timing_1");
}

#[test]
fn pipeline_topology_renders_for_diagnostics() {
    let graph = GraphBuilder::new().build(&pipeline(), &attributes()).unwrap();
    let rendered = graph.to_string();
    assert!(rendered.contains("+ create_map\n"));
    assert!(rendered.contains("+ set_style <- [create_map]\n"));
    assert!(rendered.contains("+ render_report <- [set_style, create_overview]\n"));
}

#[test]
fn reordering_independent_processors_keeps_the_wiring() {
    // write_headers has no data-flow relation to the rest; moving it after
    // render_report must not change the edges.
    let mut processors = pipeline();
    processors.swap(3, 4);
    let graph = GraphBuilder::new().build(&processors, &attributes()).unwrap();

    let create_map = NodeId(0);
    let render_report = NodeId(3);
    let write_headers = NodeId(4);
    assert_eq!(graph.root_ids(), &[create_map, write_headers]);
    assert!(graph.node(render_report).requires(NodeId(1)));
    assert!(graph.node(render_report).requires(NodeId(2)));
}
