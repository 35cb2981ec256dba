//! Drives the rendering engine: parse DOT text, build a visual graph
//! and render it to SVG.

use layout::backends::svg::SVGWriter;
use layout::gv::parser::ast;
use layout::gv::{DotParser, GraphBuilder};
use layout::topo::layout::VisualGraph;

/// Options that are forwarded to the rendering engine.
#[derive(Default)]
pub struct RenderOptions {
    pub debug_mode: bool,
    pub disable_opt: bool,
    pub disable_layout: bool,
}

/// Parse the contents of a `.dot` file into an AST.
///
/// On a syntax error the parser prints its own diagnostic, pointing at
/// the offending token, and the error message is returned.
pub fn parse(contents: &str) -> Result<ast::Graph, String> {
    let mut parser = DotParser::new(contents);
    match parser.process() {
        Result::Ok(graph) => Result::Ok(graph),
        Result::Err(err) => {
            parser.print_error();
            Result::Err(err)
        }
    }
}

/// Convert the parsed AST into a graph that the engine can lay out.
pub fn build_graph(graph: &ast::Graph) -> VisualGraph {
    let mut gb = GraphBuilder::new();
    gb.visit_graph(graph);
    gb.get()
}

/// Run the layout passes and render the graph into an SVG string.
pub fn render_svg(graph: &mut VisualGraph, options: &RenderOptions) -> String {
    let mut svg = SVGWriter::new();
    graph.do_it(
        options.debug_mode,
        options.disable_opt,
        options.disable_layout,
        &mut svg,
    );
    svg.finalize()
}
