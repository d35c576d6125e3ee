//! Tests for the SVG page writer

#[cfg(test)]
mod tests {
    use caposters::io::svg::{
        GradientStop, LinearGradient, SvgDocument, SvgElement, SvgStyle, escape,
    };
    use caposters::render::palette::Rgb;

    fn sample() -> SvgDocument {
        let mut document = SvgDocument::new(100.0, 50.0);
        document.push(SvgElement::Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
            style: SvgStyle::fill(Rgb::new(0xc0, 0xd6, 0xff)),
        });
        document.push(SvgElement::Group {
            transform: Some("rotate(45.000)".to_string()),
            elements: vec![
                SvgElement::Circle {
                    cx: 5.0,
                    cy: 5.0,
                    r: 2.5,
                    style: SvgStyle::fill(Rgb::BLACK),
                },
                SvgElement::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 10.0,
                    y2: 0.0,
                    style: SvgStyle::stroke(Rgb::WHITE, 0.25),
                },
            ],
        });
        document.push(SvgElement::Text {
            x: 1.0,
            y: 40.0,
            content: "RULE <30> & more".to_string(),
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            bold: true,
            color: Rgb::BLACK,
        });
        document
    }

    // Tests the page header uses points and a matching view box
    // Verified by dropping the unit suffix
    #[test]
    fn test_header() {
        let svg = sample().to_string();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains("width=\"100.000pt\" height=\"50.000pt\""));
        assert!(svg.contains("viewBox=\"0 0 100.000 50.000\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    // Tests elements serialize in order with their styles
    // Verified by writing children outside their group
    #[test]
    fn test_elements() {
        let svg = sample().to_string();
        assert!(svg.contains(
            "<rect x=\"0.000\" y=\"0.000\" width=\"100.000\" height=\"50.000\" fill=\"#c0d6ff\"/>"
        ));
        assert!(svg.contains("<g transform=\"rotate(45.000)\">"));
        assert!(svg.contains("<circle cx=\"5.000\" cy=\"5.000\" r=\"2.500\" fill=\"#000000\"/>"));
        assert!(svg.contains("fill=\"none\" stroke=\"#ffffff\" stroke-width=\"0.250\""));
        assert!(svg.contains("font-weight=\"bold\">RULE &lt;30&gt; &amp; more</text>"));

        let group = svg.find("<g ").unwrap_or(usize::MAX);
        let circle = svg.find("<circle").unwrap_or(0);
        let close = svg.find("</g>").unwrap_or(0);
        assert!(group < circle && circle < close);
    }

    // Tests gradients are written once inside defs
    // Verified by skipping the defs block
    #[test]
    fn test_gradients() {
        let mut document = SvgDocument::new(10.0, 10.0);
        assert!(!document.to_string().contains("<defs>"));

        document.add_gradient(LinearGradient {
            id: "shade".to_string(),
            from: (0.0, 0.0),
            to: (0.0, 2.0),
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Rgb::BLACK,
                    opacity: 0.2,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::BLACK,
                    opacity: 0.0,
                },
            ],
        });
        document.push(SvgElement::Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 2.0,
            style: SvgStyle::gradient("shade"),
        });

        let svg = document.to_string();
        assert_eq!(svg.matches("<linearGradient id=\"shade\"").count(), 1);
        assert!(svg.contains("stop-opacity=\"0.200\""));
        assert!(svg.contains("fill=\"url(#shade)\""));
        assert_eq!(document.gradients().len(), 1);
        assert_eq!(document.elements().len(), 1);
    }

    // Tests XML special characters are escaped
    // Verified by leaving quotes unescaped
    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    // Tests saving creates missing directories
    // Verified by writing without creating parents
    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("a/b/poster.svg");
        let document = sample();

        document.save(&path).expect("save succeeds");
        let written = std::fs::read_to_string(&path).expect("file exists");
        assert_eq!(written, document.to_string());
    }

    // Tests saving into a file path that is a directory fails cleanly
    // Verified by ignoring write errors
    #[test]
    fn test_save_reports_write_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = sample().save(dir.path());
        assert!(matches!(
            result,
            Err(caposters::PosterError::OutputWrite { .. })
        ));
    }
}
