//! Build an iframe src from JSON options

use embed::{build_iframe_src, BuildParams, EmbedId, EmbedOptions, EmbedType, StaticHostPage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options = EmbedOptions::from_json(
        r#"{
            "hideHeaders": true,
            "opacity": 80,
            "hidden": { "email": "jane@example.com" },
            "tracking": { "utm_source": "newsletter" },
            "transitiveSearchParams": ["utm_campaign"]
        }"#,
    )?;

    let page = StaticHostPage::new()
        .with_title("Contact us")
        .with_url("https://www.example.com/contact?utm_campaign=spring")
        .with_headings(1);

    let embed_id = EmbedId::generate();
    let src = build_iframe_src(
        &BuildParams::new("abc123", EmbedType::Popup, embed_id.as_str(), &options),
        &page,
    );

    println!("{}", src);

    Ok(())
}
