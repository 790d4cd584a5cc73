//! Interactive demo: feeds stdin lines into a text field and prints the
//! counter after each one.
//!
//! Usage: `charcount [CONFIG.toml] [--maxlength N] [--dom]`
//!
//! An empty line clears the field. Set `RUST_LOG=debug` to see transitions.

use browser::Page;
use counter_core::{CounterConfig, CounterOptions, StateName};
use html::{DomSnapshot, DomSnapshotOptions, Id, Node};
use mimalloc::MiMalloc;
use std::error::Error;
use std::io::{self, BufRead, Write};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    maxlength: Option<String>,
    dom: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--maxlength" => {
                let value = it.next().ok_or("--maxlength needs a value")?;
                args.maxlength = Some(value);
            }
            "--dom" => args.dom = true,
            _ if arg.starts_with("--") => return Err(format!("unknown flag {arg}")),
            _ => args.config = Some(arg),
        }
    }
    Ok(args)
}

fn build_page(maxlength: Option<&str>) -> Page {
    let mut attrs = vec![("id", Some("message"))];
    if let Some(max) = maxlength {
        attrs.push(("maxlength", Some(max)));
    }
    Page::new(Node::document(vec![Node::element(
        "form",
        [],
        vec![Node::element("textarea", attrs, Vec::new())],
    )]))
}

fn options(config: CounterConfig, field: Id) -> CounterOptions<Id> {
    let mut options = CounterOptions::new(config).element(field);
    for name in StateName::PRIORITY {
        options = options.on_enter(name, move |_, remaining| {
            log::info!(target: "charcount", "entered {name} with {remaining} remaining");
        });
    }
    options
}

fn print_counter(out: &mut impl Write, page: &Page, field: Id, dom: bool) -> io::Result<()> {
    if dom {
        let snapshot = DomSnapshot::new(page.dom().root(), DomSnapshotOptions::default());
        return writeln!(out, "{snapshot}");
    }
    let Some(engine) = page.counter(field) else {
        return Ok(());
    };
    writeln!(
        out,
        "{} [{}] {}",
        engine.remaining(),
        engine.active_state(),
        page.dom().attribute(engine.counter(), "class").unwrap_or("")
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => CounterConfig::load(path)?,
        None => CounterConfig::default(),
    };

    let mut page = build_page(args.maxlength.as_deref());
    let field = page
        .dom()
        .get_element_by_id("message")
        .ok_or("demo page has no message field")?;
    page.attach_counter(options(config, field))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_counter(&mut out, &page, field, args.dom)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            page.clear(field);
        } else {
            page.type_text(field, &line);
        }
        page.pump();
        print_counter(&mut out, &page, field, args.dom)?;
    }
    Ok(())
}
