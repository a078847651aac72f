use nuvemite_agents::{AssistantConfig, HubOverrides};
use nuvemite_core::{catalog, LayoutVariant, Point, Theme, Topic, Viewport};
use nuvemite_tests::{fixed_assistant, FIXED_ANIMATION_SECS};

#[test]
fn full_conversation_lifecycle() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default());
    let id = assistant.start_conversation();

    let script = [
        ("Hello", Topic::SmallTalk),
        ("Who is the CTO?", Topic::Leadership),
        ("Tell me about Kmacho", Topic::Product),
        ("What services do you offer?", Topic::Service),
        ("How do I contact you?", Topic::Contact),
        ("thank you", Topic::SmallTalk),
    ];

    for (turn, (text, topic)) in script.iter().enumerate() {
        let reply = assistant.ask(id, text)?;
        assert_eq!(reply.topic, *topic, "text: {text}");
        assert_eq!(reply.turn, turn + 1);
    }

    let transcript = assistant.end_conversation(id).expect("open conversation");
    assert_eq!(transcript.len(), script.len());
    assert_eq!(transcript.exchanges()[1].user_text, "Who is the CTO?");
    assert!(assistant.transcript(id).is_none());

    let metrics = assistant.metrics();
    assert_eq!(metrics.matched_total, 6);
    assert_eq!(metrics.fallback_total, 0);
    Ok(())
}

#[test]
fn conversations_are_isolated() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default());
    let first = assistant.start_conversation();
    let second = assistant.start_conversation();

    assistant.ask(first, "ceo")?;
    assistant.ask(first, "cfo")?;
    assistant.ask(second, "vision")?;

    assert_eq!(assistant.transcript(first).map(|t| t.len()), Some(2));
    assert_eq!(assistant.transcript(second).map(|t| t.len()), Some(1));
    Ok(())
}

#[test]
fn every_catalog_product_lays_out_on_both_viewports() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default());

    for product in catalog() {
        for viewport in [Viewport::Desktop, Viewport::Mobile] {
            let hub = assistant.hub_layout(product.key, Some(viewport))?;
            assert_eq!(hub.layout.nodes.len(), product.features.len());
            assert_eq!(hub.viewport, viewport);
            assert!(hub
                .decorations
                .iter()
                .all(|d| d.animation_secs == FIXED_ANIMATION_SECS));

            let expects_paths = hub.layout.variant != LayoutVariant::Orbit;
            assert_eq!(!hub.layout.paths().is_empty(), expects_paths, "{}", product.key);
        }
    }

    assert_eq!(assistant.metrics().layouts_total, 16);
    Ok(())
}

#[test]
fn configured_viewport_is_the_default() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default().with_viewport(Viewport::Mobile));
    let hub = assistant.hub_layout("logistics", None)?;
    assert_eq!(hub.layout.variant, LayoutVariant::Radar);
    assert_eq!((hub.layout.radius_x, hub.layout.radius_y), (110.0, 100.0));
    Ok(())
}

#[test]
fn hub_serializes_for_renderers() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default());
    let hub = assistant.hub_layout("lims", None)?;
    let value = serde_json::to_value(&hub)?;

    assert_eq!(value["product_name"], "Imara LIMS");
    assert_eq!(value["stroke"], "#ef4444");
    assert_eq!(value["layout"]["variant"], "MOLECULE");
    assert_eq!(value["layout"]["nodes"][0]["label"], "Sample Management");
    assert_eq!(value["layout"]["nodes"][0]["connector"]["kind"], "elbow");
    Ok(())
}

#[test]
fn chat_names_every_catalog_product() {
    let assistant = fixed_assistant(AssistantConfig::default());
    for product in catalog() {
        let reply = assistant.ask_once(&format!("Tell me about {}", product.name));
        assert_eq!(reply.topic, Topic::Product, "{}", product.name);
    }
    assert_eq!(assistant.metrics().fallback_total, 0);
}

#[test]
fn overridden_hub_geometry_matches_a_custom_layout() -> anyhow::Result<()> {
    let assistant = fixed_assistant(AssistantConfig::default().with_viewport(Viewport::Mobile));
    let center = Point::new(120.0, 60.0);
    let hub = assistant.hub_layout_with(
        "inventory",
        None,
        HubOverrides {
            theme: Some(Theme::Red),
            center: Some(center),
            radius_x: Some(75.0),
            radius_y: Some(40.0),
            ..HubOverrides::default()
        },
    )?;
    let custom = assistant.custom_layout(
        catalog()[4].features,
        "BLUEPRINT",
        center,
        75.0,
        40.0,
    )?;

    assert_eq!(hub.layout, custom);
    assert_eq!(hub.stroke, "#ef4444");
    assert!(assistant
        .hub_layout_with(
            "inventory",
            None,
            HubOverrides {
                radius_y: Some(f64::NAN),
                ..HubOverrides::default()
            },
        )
        .is_err());
    Ok(())
}
