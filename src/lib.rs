/*!
This crate provides a small command line utility that loads GraphViz
`.dot` files, renders the graph, saves the result as an SVG file and a
PDF copy, and opens the rendered graph in the viewer that the operating
system associates with the file.

The heavy lifting is done by external libraries: `layout` parses the DOT
text, computes the layout and renders to SVG, `usvg` and `svg2pdf` turn
the rendered SVG into a PDF, and `opener` hands the finished file to the
platform viewer. This crate only wires the steps together.

# Example: render a graph from a DOT string

```rust
use dotview::render::{self, RenderOptions};

let contents = "digraph { a -> b [label=\"foo\"]; }";
let graph = render::parse(contents).unwrap();
let mut vg = render::build_graph(&graph);
let svg = render::render_svg(&mut vg, &RenderOptions::default());
assert!(svg.contains("</svg>"));
```

# Example: convert the rendered SVG to PDF

```rust
use dotview::pdf;
use dotview::render::{self, RenderOptions};

let graph = render::parse("digraph { a -> b; }").unwrap();
let mut vg = render::build_graph(&graph);
let svg = render::render_svg(&mut vg, &RenderOptions::default());
let bytes = pdf::svg_to_pdf(&svg).unwrap();
assert!(bytes.starts_with(b"%PDF"));
```
*/

pub mod pdf;
pub mod render;
pub mod view;
