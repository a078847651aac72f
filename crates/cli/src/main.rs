use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nuvemite_agents::{AssistantConfig, HubLayout, HubOverrides, SiteAssistant};
use nuvemite_core::{
    catalog, default_radii, infer_variant, HubCanvas, Layout, LayoutVariant, Point, Theme,
    Viewport, DEFAULT_PRODUCT_KEY, SUGGESTED_PROMPTS, WELCOME_MESSAGE,
};
use nuvemite_observability::{init_tracing, AppMetrics};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "nuvemite")]
#[command(about = "Nuvemite site assistant and ecosystem hub CLI")]
struct Cli {
    /// `desktop` or `mobile`; picks the hub radii. Overrides NUVEMITE_VIEWPORT.
    #[arg(long, global = true)]
    viewport: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat with the site assistant.
    Chat,
    /// Answer a single message.
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Compute a hub layout for a product, or for an ad-hoc feature list.
    Layout {
        #[arg(long, conflicts_with = "features")]
        product: Option<String>,
        /// Comma separated feature labels.
        #[arg(long)]
        features: Option<String>,
        /// Defaults to MOLECULE for feature lists; product hubs infer it.
        #[arg(long)]
        variant: Option<String>,
        /// Product hubs only; unknown names fall back to blue.
        #[arg(long, conflicts_with = "features")]
        theme: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        cx: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        cy: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        rx: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        ry: Option<f64>,
        /// Print SVG path data per node instead of JSON.
        #[arg(long)]
        svg: bool,
    },
    /// List the product catalog.
    Products,
}

fn main() -> Result<()> {
    init_tracing("nuvemite_cli");
    let cli = Cli::parse();

    let mut config = AssistantConfig::from_env();
    if let Some(raw) = cli.viewport.as_deref() {
        let viewport = Viewport::parse(raw)
            .with_context(|| format!("invalid --viewport value: {raw}"))?;
        config = config.with_viewport(viewport);
    }
    let assistant = SiteAssistant::new(config, AppMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(&assistant)?,
        Command::Ask { text, json } => {
            let reply = assistant.ask_once(&text.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.reply_text);
            }
        }
        Command::Layout {
            product,
            features,
            variant,
            theme,
            cx,
            cy,
            rx,
            ry,
            svg,
        } => match features {
            Some(features) => {
                let labels = split_features(&features);
                let tag = variant.as_deref().unwrap_or("MOLECULE");
                let parsed = tag
                    .parse::<LayoutVariant>()
                    .context("invalid --variant value")?;
                let (default_rx, default_ry) = default_radii(parsed, config.viewport);
                let layout = assistant.custom_layout(
                    labels.as_slice(),
                    tag,
                    center_from(config.canvas, cx, cy),
                    rx.unwrap_or(default_rx),
                    ry.unwrap_or(default_ry),
                )?;
                print_layout(&layout, svg)?;
            }
            None => {
                let key = product.as_deref().unwrap_or(DEFAULT_PRODUCT_KEY);
                let overrides = HubOverrides {
                    variant: variant
                        .as_deref()
                        .map(str::parse::<LayoutVariant>)
                        .transpose()
                        .context("invalid --variant value")?,
                    theme: theme.as_deref().map(Theme::parse),
                    center: (cx.is_some() || cy.is_some())
                        .then(|| center_from(config.canvas, cx, cy)),
                    radius_x: rx,
                    radius_y: ry,
                };
                let hub = assistant.hub_layout_with(key, None, overrides)?;
                print_hub(&hub, svg)?;
            }
        },
        Command::Products => {
            let products = catalog()
                .iter()
                .map(|product| {
                    json!({
                        "key": product.key,
                        "name": product.name,
                        "theme": product.theme,
                        "stroke": product.theme.stroke(),
                        "variant": infer_variant(None, product.name),
                        "features": product.features,
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
    }

    Ok(())
}

fn run_chat(assistant: &SiteAssistant) -> Result<()> {
    let conversation = assistant.start_conversation();

    println!("{WELCOME_MESSAGE}");
    println!("Try: {}", SUGGESTED_PROMPTS.join(" | "));
    println!("Type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = assistant.ask(conversation, message)?;
        println!("\n{}\n", reply.reply_text);
    }

    if let Some(transcript) = assistant.end_conversation(conversation) {
        println!("Conversation closed after {} messages.", transcript.len());
    }

    Ok(())
}

/// Missing coordinates come from the canvas center.
fn center_from(canvas: HubCanvas, cx: Option<f64>, cy: Option<f64>) -> Point {
    let center = canvas.center();
    Point::new(cx.unwrap_or(center.x), cy.unwrap_or(center.y))
}

fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn print_hub(hub: &HubLayout, svg: bool) -> Result<()> {
    if svg {
        println!("# {} ({})", hub.product_name, hub.layout.variant);
        print_svg(&hub.layout);
    } else {
        println!("{}", serde_json::to_string_pretty(hub)?);
    }
    Ok(())
}

fn print_layout(layout: &Layout, svg: bool) -> Result<()> {
    if svg {
        print_svg(layout);
    } else {
        println!("{}", serde_json::to_string_pretty(layout)?);
    }
    Ok(())
}

fn print_svg(layout: &Layout) {
    for node in &layout.nodes {
        match &node.connector {
            Some(path) => println!("{}\t{}", node.label, path.to_svg()),
            None => println!("{}\t({}, {})", node.label, node.x, node.y),
        }
    }
}
