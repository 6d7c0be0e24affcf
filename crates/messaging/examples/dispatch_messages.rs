//! Route a few posted messages through a dispatcher

use messaging::{FormCallbacks, FormEventKind, MessageDispatcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let dispatcher = MessageDispatcher::new();
    let callbacks = FormCallbacks::new()
        .on(FormEventKind::FormReady, |_| println!("form is ready"))
        .on(FormEventKind::FormSubmit, |payload| {
            println!("submitted: {:?}", payload.get("responseId"));
        });
    dispatcher.register_all("demo-embed", &callbacks);

    let frames = [
        r#"{"type":"form-ready","embedId":"demo-embed"}"#,
        r#"{"type":"form-ready","embedId":"another-embed"}"#,
        r#"{"type":"form-submit","embedId":"demo-embed","responseId":"abc"}"#,
    ];
    for frame in frames {
        dispatcher.dispatch_json(frame)?;
    }

    if let Err(e) = dispatcher.dispatch_json("not json") {
        println!("rejected frame: {}", e);
    }

    dispatcher.remove("demo-embed");

    Ok(())
}
