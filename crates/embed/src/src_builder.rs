//! Iframe source builder
//!
//! Layout of the produced URL:
//!
//! ```text
//! https://<domain>/to/<form id>?<behaviour params>&<tracking>#<hidden>&<hubspot>
//! ```
//!
//! Parameter names and their order are read by the form on the other side,
//! don't rename or reorder them.

use indexmap::IndexMap;

use crate::host::HostPage;
use crate::options::{is_set, EmbedOptions, DEFAULT_DOMAIN};
use crate::types::{EmbedType, FormReference};
use crate::utils::{encode_pairs, format_number};

/// Everything the builder needs besides the host page
#[derive(Debug, Clone, Copy)]
pub struct BuildParams<'a> {
    pub form_id: &'a str,
    pub embed_type: EmbedType,
    pub embed_id: &'a str,
    /// Wins over `options.domain`, ignored when `form_id` is a URL
    pub domain: Option<&'a str>,
    pub options: &'a EmbedOptions,
}

impl<'a> BuildParams<'a> {
    pub fn new(
        form_id: &'a str,
        embed_type: EmbedType,
        embed_id: &'a str,
        options: &'a EmbedOptions,
    ) -> Self {
        Self {
            form_id,
            embed_type,
            embed_id,
            domain: None,
            options,
        }
    }

    pub fn with_domain(mut self, domain: &'a str) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Build the URL the form iframe loads
pub fn build_iframe_src(params: &BuildParams<'_>, host: &dyn HostPage) -> String {
    let mut src = base_url(params);

    let query = encode_pairs(&query_params(params, host));
    if !query.is_empty() {
        src.push('?');
        src.push_str(&query);
    }

    let fragment = encode_pairs(&fragment_params(params.options, host));
    if !fragment.is_empty() {
        src.push('#');
        src.push_str(&fragment);
    }

    tracing::debug!(
        embed_id = params.embed_id,
        embed_type = %params.embed_type,
        "built iframe src: {}",
        src
    );

    src
}

fn base_url(params: &BuildParams<'_>) -> String {
    match FormReference::parse(params.form_id) {
        FormReference::Url(url) => url,
        FormReference::Id(id) => {
            let domain = params
                .domain
                .or(params.options.domain.as_deref())
                .unwrap_or(DEFAULT_DOMAIN);
            format!("https://{}/to/{}", domain, id)
        }
    }
}

/// Host page hostname with a leading `www.` dropped
fn default_source(host: &dyn HostPage) -> String {
    let hostname = host.host();
    match hostname.strip_prefix("www.") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => hostname,
    }
}

fn push_flag(query: &mut IndexMap<String, String>, key: &str, enabled: bool) {
    if enabled {
        query.insert(key.to_string(), "true".to_string());
    }
}

fn query_params(params: &BuildParams<'_>, host: &dyn HostPage) -> IndexMap<String, String> {
    let options = params.options;
    let mut query = IndexMap::new();

    query.insert("typeform-embed-id".to_string(), params.embed_id.to_string());
    query.insert("typeform-embed".to_string(), params.embed_type.param_value());
    query.insert(
        "typeform-source".to_string(),
        options
            .source()
            .map(str::to_string)
            .unwrap_or_else(|| default_source(host)),
    );
    query.insert("typeform-medium".to_string(), options.medium().to_string());
    query.insert(
        "typeform-medium-version".to_string(),
        options.medium_version().to_string(),
    );

    push_flag(&mut query, "embed-hide-footer", is_set(options.hide_footer));
    push_flag(&mut query, "embed-hide-headers", is_set(options.hide_headers));
    if let Some(opacity) = options.opacity {
        query.insert("embed-opacity".to_string(), format_number(opacity));
    }

    let tracking_disabled = options.tracking_disabled();
    push_flag(&mut query, "disable-tracking", tracking_disabled);
    push_flag(&mut query, "__dangerous-disable-submissions", tracking_disabled);

    push_flag(&mut query, "force-touch", is_set(options.force_touch));
    push_flag(&mut query, "typeform-embed-auto-resize", is_set(options.auto_resize));
    push_flag(
        &mut query,
        "typeform-embed-disable-scroll",
        is_set(options.disable_scroll),
    );
    if let Some(target) = &options.redirect_target {
        query.insert("typeform-embed-redirect-target".to_string(), target.clone());
    }
    push_flag(
        &mut query,
        "typeform-embed-handle-ending-button-click",
        is_set(options.on_ending_button_click),
    );
    push_flag(&mut query, "typeform-embed-no-heading", host.has_heading());

    for key in &options.transitive_search_params {
        match host.query_param(key) {
            Some(value) => {
                query.insert(key.clone(), value);
            }
            None => tracing::trace!("host page has no '{}' param to forward", key),
        }
    }

    // Same key as a built-in param overrides its value in place
    for (key, value) in &options.tracking {
        query.insert(key.clone(), value.clone());
    }

    query
}

fn fragment_params(options: &EmbedOptions, host: &dyn HostPage) -> IndexMap<String, String> {
    let mut fragment = options.hidden.clone();

    if is_set(options.hubspot) {
        fragment.insert("hubspot_page_name".to_string(), host.title());
        fragment.insert("hubspot_page_url".to_string(), host.url());
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHostPage;

    const DEFAULT_PARAMS: &str = "?typeform-embed-id=embed-id\
        &typeform-embed=embed-widget\
        &typeform-source=localhost\
        &typeform-medium=embed-sdk\
        &typeform-medium-version=next";

    fn build(params: BuildParams<'_>) -> String {
        build_iframe_src(&params, &StaticHostPage::new().with_title("page title"))
    }

    #[test]
    fn test_default_params() {
        let options = EmbedOptions::new();
        let src = build(BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options));
        assert_eq!(
            src,
            format!("https://form.typeform.com/to/some-id{}", DEFAULT_PARAMS)
        );
    }

    #[test]
    fn test_empty_embed_id_is_kept() {
        let options = EmbedOptions::new();
        let src = build(BuildParams::new("some-id", EmbedType::Widget, "", &options));
        assert!(src.starts_with("https://form.typeform.com/to/some-id?typeform-embed-id=&"));
    }

    #[test]
    fn test_custom_domain() {
        let options = EmbedOptions::new();
        let src = build(
            BuildParams::new("formId", EmbedType::Widget, "embed-id", &options)
                .with_domain("custom.example.com"),
        );
        assert_eq!(
            src,
            format!("https://custom.example.com/to/formId{}", DEFAULT_PARAMS)
        );
    }

    #[test]
    fn test_domain_argument_wins_over_option() {
        let options = EmbedOptions {
            domain: Some("from-options.example.com".to_string()),
            ..Default::default()
        };
        let src = build(
            BuildParams::new("formId", EmbedType::Widget, "embed-id", &options)
                .with_domain("custom.example.com"),
        );
        assert!(src.starts_with("https://custom.example.com/to/formId?"));

        let src = build(BuildParams::new("formId", EmbedType::Widget, "embed-id", &options));
        assert!(src.starts_with("https://from-options.example.com/to/formId?"));
    }

    #[test]
    fn test_url_form_id_ignores_domain() {
        let options = EmbedOptions::new();
        let form_id = "https://custom.example.com/form-id";
        let src = build(
            BuildParams::new(form_id, EmbedType::Widget, "embed-id", &options)
                .with_domain("foobar.example.net"),
        );
        assert_eq!(src, format!("{}{}", form_id, DEFAULT_PARAMS));
    }

    #[test]
    fn test_zero_opacity_is_present() {
        let options = EmbedOptions {
            opacity: Some(0.0),
            ..Default::default()
        };
        let src = build(BuildParams::new("some-id", EmbedType::Popup, "id", &options));
        assert!(src.contains("&embed-opacity=0"));
        assert!(src.contains("typeform-embed=embed-popup"));
    }

    #[test]
    fn test_false_flags_are_omitted() {
        let options = EmbedOptions {
            hide_footer: Some(false),
            hide_headers: Some(false),
            disable_tracking: Some(false),
            enable_sandbox: Some(false),
            hubspot: Some(false),
            auto_resize: Some(false),
            force_touch: Some(false),
            disable_scroll: Some(false),
            on_ending_button_click: Some(false),
            ..Default::default()
        };
        let src = build(BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options));
        assert!(!src.contains("false"));
        assert!(!src.contains('#'));
        assert_eq!(
            src,
            format!("https://form.typeform.com/to/some-id{}", DEFAULT_PARAMS)
        );
    }

    #[test]
    fn test_enabled_behaviour_flags() {
        let options = EmbedOptions {
            disable_tracking: Some(true),
            force_touch: Some(true),
            disable_scroll: Some(true),
            redirect_target: Some("_top".to_string()),
            ..Default::default()
        };
        let src = build(BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options));
        assert_eq!(
            src,
            format!(
                "https://form.typeform.com/to/some-id{}\
                 &disable-tracking=true\
                 &__dangerous-disable-submissions=true\
                 &force-touch=true\
                 &typeform-embed-disable-scroll=true\
                 &typeform-embed-redirect-target=_top",
                DEFAULT_PARAMS
            )
        );
    }

    #[test]
    fn test_default_source_is_bare_hostname() {
        let options = EmbedOptions::new();
        let params = BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options);

        let page = StaticHostPage::new().with_url("https://www.example.com:8080/pricing");
        let src = build_iframe_src(&params, &page);
        assert!(src.contains("&typeform-source=example.com&"));

        let page = StaticHostPage::new().with_url("https://wwwidget.example.com/");
        let src = build_iframe_src(&params, &page);
        assert!(src.contains("&typeform-source=wwwidget.example.com&"));
    }

    #[test]
    fn test_tracking_overrides_builtin_in_place() {
        let mut options = EmbedOptions::new();
        options
            .tracking
            .insert("typeform-medium".to_string(), "partner".to_string());
        let src = build(BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options));
        assert!(src.contains("&typeform-medium=partner&typeform-medium-version=next"));
    }

    #[test]
    fn test_transitive_search_params() {
        let mut options = EmbedOptions::new();
        options.transitive_search_params =
            vec!["utm_source".to_string(), "missing".to_string(), "ref".to_string()];
        options
            .tracking
            .insert("ref".to_string(), "tracking-wins".to_string());

        let host = StaticHostPage::new()
            .with_url("https://shop.example.com/?utm_source=ads&ref=host-value");
        let src = build_iframe_src(
            &BuildParams::new("some-id", EmbedType::Widget, "embed-id", &options),
            &host,
        );

        assert!(src.contains("typeform-source=shop.example.com"));
        assert!(src.ends_with("&utm_source=ads&ref=tracking-wins"));
        assert!(!src.contains("missing"));
    }
}
