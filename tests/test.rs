#[cfg(test)]
mod tests {

    use dotview::pdf::svg_to_pdf;
    use dotview::render::{build_graph, parse, render_svg, RenderOptions};

    fn get_sample_program() -> String {
        r##"/* a small build pipeline */
        digraph pipeline {
            fetch [shape=box,color=blue,style=bold,label="fetch sources"];
            parse [shape=box,color=blue,style=bold,label="parse\nfrontend"];
            check [shape=ellipse,color=red,style=bold,label="type check"];
            codegen [shape=ellipse,color=red,style=bold,label="codegen"];
            link [shape=box,color=blue,style=bold,label="link"];
            fetch -> parse [style=bold,color=orange];
            parse -> check [style=bold,color=orange];
            check -> codegen [style=bold,color=violet];
            codegen -> link [style=bold,color=violet];
            parse -> codegen [style=dashed];
        }
        "##
        .to_string()
    }

    #[test]
    fn parse_program0() {
        if let Result::Err(err) = parse("digraph { a -> b; b -> c;}") {
            println!("Error: {}", err);
            panic!();
        }
    }

    #[test]
    fn parse_program1() {
        if let Result::Err(err) = parse("graph { a -- b; b -- c; }") {
            println!("Error: {}", err);
            panic!();
        }
    }

    #[test]
    fn parse_sample_program() {
        let program = get_sample_program();
        if let Result::Err(err) = parse(&program[..]) {
            println!("Error: {}", err);
            panic!();
        }
    }

    #[test]
    fn parse_program_fail() {
        if parse("graph { } s").is_err() {
            return;
        }
        panic!();
    }

    #[test]
    fn render_svg_smoke() {
        let program = get_sample_program();
        let graph = parse(&program[..]).unwrap();
        let mut vg = build_graph(&graph);
        let svg = render_svg(&mut vg, &RenderOptions::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn render_svg_labels() {
        let graph = parse("digraph { a [label=\"alpha\"]; a -> b; }").unwrap();
        let mut vg = build_graph(&graph);
        let svg = render_svg(&mut vg, &RenderOptions::default());
        assert!(svg.contains("alpha"));
    }

    #[test]
    fn render_svg_no_optz() {
        let program = get_sample_program();
        let graph = parse(&program[..]).unwrap();
        let mut vg = build_graph(&graph);
        let mut options = RenderOptions::default();
        options.disable_opt = true;
        let svg = render_svg(&mut vg, &options);
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn pdf_smoke() {
        let program = get_sample_program();
        let graph = parse(&program[..]).unwrap();
        let mut vg = build_graph(&graph);
        let svg = render_svg(&mut vg, &RenderOptions::default());
        let pdf = svg_to_pdf(&svg).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_file_written() {
        let graph = parse("digraph { a -> b; }").unwrap();
        let mut vg = build_graph(&graph);
        let svg = render_svg(&mut vg, &RenderOptions::default());
        let pdf = svg_to_pdf(&svg).unwrap();

        let path = std::env::temp_dir().join("dotview_smoke.pdf");
        let filename = path.to_str().unwrap();
        dotview::pdf::save_to_file(filename, &pdf).unwrap();

        let meta = std::fs::metadata(filename).unwrap();
        assert!(meta.len() > 0);
    }
}
