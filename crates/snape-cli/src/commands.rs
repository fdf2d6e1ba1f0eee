use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use snape_cli::tools::{
    LinkResult, StyleKind, classify_geojson, parse_assignment, resolve_link, style_expression,
};
use snape_style::palette::score_legend;

use crate::cli::{ClassifyArgs, LinkArgs, StyleArgs, StyleKindArg};
use crate::summary::{print_category_counts, print_legend};

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let span = info_span!("classify", input = %args.input.display());
    let _guard = span.enter();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let output = classify_geojson(&text, args.pretty)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output.geojson)
                .with_context(|| format!("write {}", path.display()))?;
            info!(output = %path.display(), "wrote classified features");
        }
        None => println!("{}", output.geojson),
    }
    print_category_counts(&output.counts);
    Ok(())
}

pub fn run_style(args: &StyleArgs) -> Result<()> {
    let kind = match args.kind {
        StyleKindArg::Categories => StyleKind::Categories,
        StyleKindArg::RoadKinds => StyleKind::RoadKinds,
        StyleKindArg::Scores => StyleKind::Scores,
    };
    let expression = style_expression(kind, args.attribute.as_deref())?;
    println!("{}", expression.to_pretty_string());
    if args.legend && kind == StyleKind::Scores {
        print_legend(&score_legend()?);
    }
    Ok(())
}

pub fn run_link(args: &LinkArgs) -> Result<LinkResult> {
    let assignments = args
        .set
        .iter()
        .map(|text| parse_assignment(text))
        .collect::<Result<Vec<_>>>()?;
    resolve_link(&args.url, &assignments)
}
