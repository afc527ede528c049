// Example: Accordion
//
// Three expanders stacked in a column, driven on a simulated clock:
// - Config loaded from JSON
// - Content from explicit elements and from a template
// - Taps routed through header hit testing
// - Frame loop printing each section's content height

use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use unfold::prelude::*;
use unfold::BindingContext;
use unfold_dom::{Edges, Element, Size};

const SECTION_CONFIG: &str = r#"{
    "expand_animation_length": 200,
    "collapse_animation_length": 150,
    "expand_animation_easing": "cubic_out",
    "collapse_animation_easing": "ease_in"
}"#;

fn print_sections(surface: &Surface, sections: &[(&str, ExpanderId)], at: Duration) {
    let line = sections
        .iter()
        .filter_map(|(name, id)| {
            let expander = surface.expander(*id)?;
            let height = expander
                .content_holder()
                .and_then(|holder| surface.tree().bounds(holder))
                .map_or(0.0, |rect| rect.height);
            Some(format!("{name}: {:?} {:>5.1}", expander.state(), height))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{:>4}ms  {}", at.as_millis(), line);
}

fn main() {
    let log_file = File::create("accordion.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match ExpanderConfig::from_json(SECTION_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let start = Instant::now();
    let mut surface = Surface::with_clock(Size::new(60.0, 40.0), start);
    let mut sections = Vec::new();

    for (name, body) in [
        ("intro", "Expanders reveal their content with a short animation."),
        ("usage", "Tap a header to toggle it.\nTaps during an animation reverse it."),
    ] {
        let id = surface.add_expander(config.clone());
        let header = surface.tree_mut().insert(Element::text(format!("> {name}")));
        let content = surface.tree_mut().insert(
            Element::col()
                .padding(Edges::symmetric(0.0, 2.0))
                .child(Element::text(body)),
        );
        surface.update(id, |expander, cx| {
            expander.set_header(cx, Some(header));
            expander.set_content(cx, Some(content));
        });
        surface.attach(id).expect("Failed to attach section");
        sections.push((name, id));
    }

    // Templated section: content is built on first expansion.
    let id = surface.add_expander(config);
    let header = surface.tree_mut().insert(Element::text("> details"));
    let template = DataTemplate::new(|context| {
        let lines = context
            .and_then(|c| c.downcast_ref::<Vec<&'static str>>())
            .cloned()
            .unwrap_or_default();
        Element::col().children(lines.into_iter().map(Element::text))
    });
    let context: BindingContext = Rc::new(vec!["line one", "line two", "line three"]);
    surface.update(id, |expander, cx| {
        expander.set_header(cx, Some(header));
        expander.set_binding_context(cx, Some(context));
        expander.set_content_template(cx, Some(template.into()));
    });
    surface.attach(id).expect("Failed to attach section");
    sections.push(("details", id));

    let frame = Duration::from_millis(16);
    let mut at = Duration::ZERO;
    let run = |surface: &mut Surface, until: Duration, at: &mut Duration| {
        while *at < until {
            *at += frame;
            surface.tick(start + *at);
            print_sections(surface, &sections, *at);
        }
    };

    // Click the first header by position, tap the others directly.
    surface.click(1.0, 0.0);
    run(&mut surface, Duration::from_millis(250), &mut at);

    surface.tap(header);
    run(&mut surface, Duration::from_millis(320), &mut at);

    // Reverse the first section mid-collapse.
    if let Some(first) = surface.expander(sections[0].1).and_then(|e| e.header()) {
        surface.tap(first);
        run(&mut surface, Duration::from_millis(380), &mut at);
        surface.tap(first);
    }
    run(&mut surface, Duration::from_millis(700), &mut at);

    for event in surface.drain_events() {
        println!("{:?}", event);
    }
}
